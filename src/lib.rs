//! Turns a shell-style `curl ...` command line into the HTTP request it
//! describes.
//!
//! ```
//! let request = curlparse::parse("curl -X POST -d 'a=1' -d 'b=2' https://x.com");
//! assert_eq!(request.method, "POST");
//! assert_eq!(request.url, "https://x.com");
//! assert_eq!(request.data, "a=1&b=2");
//! assert_eq!(request.content_type, "application/x-www-form-urlencoded");
//! ```

pub mod curl;
pub mod error;
pub mod logger;

#[cfg(test)]
mod test_util;

pub use curl::{BasicAuth, CurlRequest, Header, parse, parse_strict};
pub use error::{CurlError, Result};
