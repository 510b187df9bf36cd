pub mod record;
pub mod tables;
pub mod select;
pub mod render;
pub mod assemble;
pub mod catalog;
pub mod error;
pub mod cli;
