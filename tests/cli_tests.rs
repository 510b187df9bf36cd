use typespecgen::cli::{parse_options, write_fragment};
use typespecgen::error::AppError;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn flags_populate_connection_and_indent() {
    let opts = parse_options(&args(&[
        "--host", "db.local", "--port", "5433", "--user", "alice", "--database", "catalog",
        "--indent", "4",
    ]))
    .expect("parse failed");
    assert_eq!(opts.catalog.host.as_deref(), Some("db.local"));
    assert_eq!(opts.catalog.port, Some(5433));
    assert_eq!(opts.catalog.user.as_deref(), Some("alice"));
    assert_eq!(opts.catalog.database, "catalog");
    assert_eq!(opts.indent, 4);
    assert!(opts.out.is_none());
    assert!(!opts.help);
}

#[test]
fn short_flags_match_long_flags() {
    let opts = parse_options(&args(&["-H", "h1", "-p", "6000", "-u", "bob", "-d", "db1", "-i", "2"]))
        .expect("parse failed");
    assert_eq!(opts.catalog.host.as_deref(), Some("h1"));
    assert_eq!(opts.catalog.port, Some(6000));
    assert_eq!(opts.catalog.user.as_deref(), Some("bob"));
    assert_eq!(opts.catalog.database, "db1");
    assert_eq!(opts.indent, 2);
}

#[test]
fn out_flag_sets_file_sink() {
    let opts = parse_options(&args(&["-o", "generated/type_specs.rb"])).expect("parse failed");
    assert_eq!(
        opts.out.as_deref().and_then(|p| p.to_str()),
        Some("generated/type_specs.rb")
    );
}

#[test]
fn malformed_port_is_a_config_error() {
    let err = parse_options(&args(&["--port", "not-a-port"])).unwrap_err();
    match err {
        AppError::Config { message } => assert!(message.contains("not-a-port")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn malformed_indent_is_a_config_error() {
    let err = parse_options(&args(&["--indent", "-3"])).unwrap_err();
    match err {
        AppError::Config { message } => assert!(message.contains("-3")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn missing_flag_value_is_a_config_error() {
    let err = parse_options(&args(&["--host"])).unwrap_err();
    match err {
        AppError::Config { message } => assert!(message.contains("--host")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse_options(&args(&["--frobnicate"])).unwrap_err();
    match err {
        AppError::Config { message } => assert!(message.contains("--frobnicate")),
        other => panic!("expected config error, got {other:?}"),
    }
}

#[test]
fn help_flag_is_recognized() {
    let opts = parse_options(&args(&["-h"])).expect("parse failed");
    assert!(opts.help);
}

#[test]
fn file_sink_receives_lines_with_trailing_newline() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("type_specs.rb");
    let lines = vec!["shared_examples 'type specs' do".to_string(), "end".to_string()];
    write_fragment(&lines, Some(&path)).expect("write failed");
    let written = std::fs::read_to_string(&path).expect("read failed");
    assert_eq!(written, "shared_examples 'type specs' do\nend\n");
}

#[test]
fn unwritable_file_sink_is_an_io_error() {
    let lines = vec!["end".to_string()];
    let err = write_fragment(&lines, Some(std::path::Path::new("/no/such/dir/specs.rb")))
        .unwrap_err();
    match err {
        AppError::Io { .. } => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
