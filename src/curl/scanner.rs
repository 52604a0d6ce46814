//! Cursor over a normalized command line.
//!
//! The scanner knows nothing about flags: it only resolves quoting and
//! backslash escapes and hands back one argument at a time.

use winnow::{
    ModalResult, Parser,
    combinator::opt,
    stream::{Offset, Stream},
    token::take_while,
};

type Input<'a> = &'a str;

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Something the scanner recovered from instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanIssue {
    /// Input ended while a quote opened at `offset` was still open.
    UnterminatedQuote { quote: char, offset: usize },
    /// Input ended right after a backslash at `offset`.
    DanglingEscape { offset: usize },
}

/// One argument with its quotes and escapes already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    /// Whether the argument ended on the requested terminator.
    pub terminated: bool,
    pub issue: Option<ScanIssue>,
}

/// Whitespace, then at most one `\` line continuation.
///
/// A second `\ ` is an escaped space that starts the next argument.
fn separators(input: &mut Input<'_>) -> ModalResult<()> {
    (
        take_while(0.., is_whitespace),
        opt(('\\', take_while(1.., is_whitespace))),
    )
        .void()
        .parse_next(input)
}

#[derive(Debug, Clone, Copy)]
pub struct Scanner<'a> {
    source: &'a str,
    rest: Input<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    /// Byte offset of the cursor into the source.
    pub fn offset(&self) -> usize {
        self.rest.offset_from(&self.source)
    }

    pub fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// The character after the one under the cursor.
    pub fn peek_second(&self) -> Option<char> {
        self.rest.chars().nth(1)
    }

    pub fn bump(&mut self) -> Option<char> {
        self.rest.next_token()
    }

    pub fn skip_whitespace(&mut self) {
        // `separators` matches the empty string, so it cannot fail.
        let _ = separators.parse_next(&mut self.rest);
    }

    /// Reads the next argument.
    ///
    /// A quote as the first character opens quoted mode until the matching
    /// unescaped quote; the quote characters are never part of the value.
    /// Outside quotes the argument ends at unescaped whitespace (left in
    /// place) or at `terminator` (consumed). A backslash escapes the next
    /// character and is dropped, except before `$`, where it is kept so
    /// callers can tell a literal dollar from a variable.
    ///
    /// Hitting the end of input inside a quote is not an error: the value
    /// read so far is returned and the condition is reported in
    /// [`Token::issue`].
    pub fn next_token(&mut self, terminator: Option<char>) -> Token {
        self.skip_whitespace();

        let start = self.offset();
        let mut value = String::new();
        let mut quote = match self.peek() {
            Some(q @ ('"' | '\'')) => {
                self.bump();
                Some(q)
            }
            _ => None,
        };
        let mut escaped = false;
        let mut escape_at = start;
        let mut terminated = false;

        while let Some(c) = self.peek() {
            if quote == Some(c) && !escaped {
                self.bump();
                quote = None;
                continue;
            }
            if quote.is_none() && !escaped {
                if is_whitespace(c) {
                    break;
                }
                if terminator == Some(c) {
                    self.bump();
                    terminated = true;
                    break;
                }
            }

            escape_at = self.offset();
            self.bump();
            if !escaped && c == '\\' {
                escaped = true;
                if self.peek() != Some('$') {
                    continue;
                }
            }
            value.push(c);
            escaped = false;
        }

        let issue = match quote {
            Some(quote) => Some(ScanIssue::UnterminatedQuote {
                quote,
                offset: start,
            }),
            _ if escaped => Some(ScanIssue::DanglingEscape { offset: escape_at }),
            _ => None,
        };
        tracing::trace!(offset = start, value = %value, ?issue, "scanned token");

        Token {
            value,
            terminated,
            issue,
        }
    }
}
