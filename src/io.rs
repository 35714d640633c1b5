pub mod param_parser;
pub mod prompt;
pub mod write_to_csv;
