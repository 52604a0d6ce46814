use thiserror::Error;

use crate::curl::ScanIssue;

/// Reasons [`crate::parse_strict`] rejects a command line.
///
/// The lenient [`crate::parse`] never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurlError {
    #[error("unterminated {quote} quote opened at offset {offset}")]
    UnterminatedQuote { quote: char, offset: usize },

    #[error("dangling escape at offset {offset}")]
    DanglingEscape { offset: usize },

    #[error("not a curl command: ({0})")]
    NotCurl(String),

    #[error("no target url found")]
    MissingUrl,
}

impl From<ScanIssue> for CurlError {
    fn from(issue: ScanIssue) -> Self {
        match issue {
            ScanIssue::UnterminatedQuote { quote, offset } => {
                CurlError::UnterminatedQuote { quote, offset }
            }
            ScanIssue::DanglingEscape { offset } => CurlError::DanglingEscape { offset },
        }
    }
}

pub type Result<T> = std::result::Result<T, CurlError>;
