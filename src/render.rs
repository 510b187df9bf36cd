//! Line rendering: turns a template choice into literal RSpec lines.
//!
//! Pure text generation; the binary owns actually writing the lines out.
//! Every non-blank line is prefixed with the run-wide indent unit plus two
//! spaces per nesting depth. Blank separator lines are truly empty.

use crate::select::{Annotation, Body, TemplateChoice, PENDING_MESSAGE};

const DEPTH_STEP: &str = "  ";

/// Push one line at the given depth.
pub fn iline(out: &mut Vec<String>, indent_unit: &str, depth: usize, text: &str) {
    let mut line = String::with_capacity(indent_unit.len() + depth * DEPTH_STEP.len() + text.len());
    line.push_str(indent_unit);
    for _ in 0..depth {
        line.push_str(DEPTH_STEP);
    }
    line.push_str(text);
    out.push(line);
}

/// Render one choice at the given depth. Deterministic; no line is ever
/// split or reflowed.
pub fn render(choice: &TemplateChoice, depth: usize, indent_unit: &str) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(annotation) = &choice.annotation {
        iline(&mut out, indent_unit, depth, "before :example do");
        match annotation {
            Annotation::Documented { problem, url } => {
                iline(
                    &mut out,
                    indent_unit,
                    depth,
                    &format!("  known_bug \"{problem}\", \"{url}\""),
                );
            }
            Annotation::Provisional { problem } => {
                iline(&mut out, indent_unit, depth, &format!("  xbug \"{problem}\""));
            }
        }
        iline(&mut out, indent_unit, depth, "end");
        out.push(String::new());
    }

    let body = match &choice.body {
        Body::Unsupported => "example('internal type not supported') {}".to_string(),
        Body::Roundtrip { name } => {
            format!("include_examples 'roundtrip type', \"{name}\", true")
        }
        Body::BitString { name, bounded } => match bounded {
            Some((value, length)) => {
                format!("include_examples 'bit-string type', \"{name}\", \"{value}\", {length}")
            }
            None => format!("include_examples 'bit-string type', \"{name}\""),
        },
        Body::Numeric { name } => format!("include_examples 'numeric type', \"{name}\""),
        Body::CharString { name, bounded } => match bounded {
            Some((value, length)) => {
                format!("include_examples 'string type', \"{name}\", \"{value}\", {length}")
            }
            None => format!("include_examples 'string type', \"{name}\""),
        },
        // Relies on a shared example of exactly this name existing.
        Body::DateTime { name } => format!("include_examples \"{name}\""),
        Body::Pending => {
            format!("pending('should have specs') {{ fail '{PENDING_MESSAGE}' }}")
        }
    };
    iline(&mut out, indent_unit, depth, &body);
    out
}
