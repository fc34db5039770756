use thiserror::Error;

use crate::grammar::Rule;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Syntax error at {line}:{col}: {message}")]
    Syntax { message: String, line: usize, col: usize },
    #[error("Closing bracket at {line}:{col} has no matching opening bracket")]
    UnmatchedClose { line: usize, col: usize },
    #[error("{unclosed} opening bracket(s) never closed, outermost at {line}:{col}")]
    UnbalancedOpen { unclosed: usize, line: usize, col: usize },
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, CheckError>;

// Helper conversions
impl From<pest::error::Error<Rule>> for CheckError {
    fn from(e: pest::error::Error<Rule>) -> Self {
        let (line, col) = match e.line_col {
            pest::error::LineColLocation::Pos(pos) => pos,
            pest::error::LineColLocation::Span(start, _) => start,
        };
        Self::Syntax { message: e.variant.message().into_owned(), line, col }
    }
}

impl From<config::ConfigError> for CheckError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}

impl From<std::io::Error> for CheckError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
