pub mod assembler;
pub mod flags;
pub mod header;
pub mod interpreter;
pub mod scanner;
pub mod sniff;
pub mod store;

use serde::{Deserialize, Serialize};

pub use assembler::assemble;
pub use interpreter::{Tokenized, normalize_command, tokenize};
pub use scanner::ScanIssue;
pub use store::{FlagStore, FlagValue, POSITIONAL};

use crate::error::{CurlError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicAuth {
    pub user: String,
    pub pass: String,
}

/// The HTTP request a curl command line describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurlRequest {
    pub url: String,
    /// Uppercased, but otherwise whatever `-X` said.
    pub method: String,
    /// In command line order, with a synthesized `Content-Type` last when
    /// none was given.
    pub headers: Vec<Header>,
    pub data: String,
    /// Upload references taken from `-d @file`; never opened.
    pub files: Vec<String>,
    pub basic_auth: Option<BasicAuth>,
    pub content_type: String,
}

/// Whether `program` names the curl binary (`curl`, `/usr/bin/curl`, `curl.exe`).
pub fn is_curl(program: &str) -> bool {
    let name = program.rsplit(['/', '\\']).next().unwrap_or(program);
    name.eq_ignore_ascii_case("curl") || name.eq_ignore_ascii_case("curl.exe")
}

/// Best-effort parse: any input, however broken, yields a request.
pub fn parse(input: &str) -> CurlRequest {
    let tokenized = tokenize(input);
    for issue in &tokenized.issues {
        tracing::debug!(?issue, "recovered from malformed input");
    }
    assemble(&tokenized.store)
}

/// Like [`parse`], but rejects input that [`parse`] would have to guess at.
pub fn parse_strict(input: &str) -> Result<CurlRequest> {
    let tokenized = tokenize(input);
    if let Some(issue) = tokenized.issues.first() {
        return Err((*issue).into());
    }

    let program = tokenized.store.positionals().first().cloned().unwrap_or_default();
    if !is_curl(&program) {
        return Err(CurlError::NotCurl(program));
    }

    let request = assemble(&tokenized.store);
    if request.url.is_empty() {
        return Err(CurlError::MissingUrl);
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("curl", true)]
    #[case("CURL", true)]
    #[case("/usr/bin/curl", true)]
    #[case(r"C:\tools\curl.exe", true)]
    #[case("wget", false)]
    #[case("curlie", false)]
    #[case("", false)]
    fn test_is_curl(#[case] program: &str, #[case] expected: bool) {
        assert_eq!(is_curl(program), expected);
    }

    #[test]
    fn test_parse_strict_accepts_well_formed_input() {
        let request = parse_strict("curl -X POST https://x.com").unwrap();
        assert_eq!(request, parse("curl -X POST https://x.com"));
    }

    #[rstest]
    #[case("curl -d 'open https://x.com", CurlError::UnterminatedQuote { quote: '\'', offset: 8 })]
    #[case("curl https://x.com \\", CurlError::DanglingEscape { offset: 19 })]
    #[case("wget https://x.com", CurlError::NotCurl("wget".into()))]
    #[case("-X POST", CurlError::NotCurl(String::new()))]
    #[case("curl -X POST", CurlError::MissingUrl)]
    fn test_parse_strict_rejects(#[case] input: &str, #[case] expected: CurlError) {
        assert_eq!(parse_strict(input), Err(expected));
    }
}
