use super::{
    flags::is_boolean,
    scanner::{ScanIssue, Scanner, Token, is_whitespace},
    store::FlagStore,
};

/// Flags read from a command line, plus whatever the scanner had to recover from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub store: FlagStore,
    pub issues: Vec<ScanIssue>,
}

/// ASCII whitespace, vertical tab and form feed included; non-ASCII spaces
/// such as U+00A0 are ordinary characters.
fn is_collapsible(c: char) -> bool {
    is_whitespace(c) || matches!(c, '\x0b' | '\x0c')
}

/// Collapses whitespace runs to one space, trims, and drops a leading
/// `$ ` or `# ` left over from a copied shell prompt.
pub fn normalize_command(input: &str) -> String {
    let collapsed = input
        .split(is_collapsible)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = collapsed.chars();
    match (chars.next(), chars.next()) {
        (Some('$' | '#'), Some(c)) if collapsed.len() > 2 && is_whitespace(c) => {
            collapsed[1..].trim().to_string()
        }
        _ => collapsed,
    }
}

struct FlagInterpreter<'a> {
    scanner: Scanner<'a>,
    out: Tokenized,
}

impl<'a> FlagInterpreter<'a> {
    fn new(command: &'a str) -> Self {
        Self {
            scanner: Scanner::new(command),
            out: Tokenized::default(),
        }
    }

    fn run(mut self) -> Tokenized {
        loop {
            self.scanner.skip_whitespace();
            match (self.scanner.peek(), self.scanner.peek_second()) {
                (None, _) => break,
                (Some('-'), Some('-')) => self.long_flag(),
                (Some('-'), _) => self.short_flags(),
                _ => {
                    let token = self.next_token(None);
                    self.out.store.push_positional(token.value);
                }
            }
        }
        self.out
    }

    fn next_token(&mut self, terminator: Option<char>) -> Token {
        let token = self.scanner.next_token(terminator);
        if let Some(issue) = token.issue {
            self.out.issues.push(issue);
        }
        token
    }

    /// `--name value`, `--name=value` or a boolean `--name`.
    fn long_flag(&mut self) {
        self.scanner.bump();
        self.scanner.bump();

        let name = self.next_token(Some('='));
        if is_boolean(&name.value) {
            if name.terminated {
                let ignored = self.next_token(None);
                tracing::debug!(flag = %name.value, value = %ignored.value, "ignoring value of boolean flag");
            }
            self.out.store.set_boolean(&name.value);
        } else {
            let value = self.next_token(None);
            self.out.store.push_value(&name.value, value.value);
        }
    }

    /// A run of single-letter flags such as `-sSL` or `-XPOST`.
    ///
    /// The first letter that takes a value ends the run: the rest of the
    /// argument, or the next argument, is its value.
    fn short_flags(&mut self) {
        self.scanner.bump();

        while let Some(c) = self.scanner.peek() {
            if is_whitespace(c) {
                break;
            }
            self.scanner.bump();

            let mut buf = [0u8; 4];
            let name = c.encode_utf8(&mut buf);
            if is_boolean(name) {
                self.out.store.set_boolean(name);
            } else {
                let value = self.next_token(None);
                self.out.store.push_value(name, value.value);
            }
        }
    }
}

/// Reads every argument of an already normalized command line.
pub fn interpret(command: &str) -> Tokenized {
    let tokenized = FlagInterpreter::new(command).run();
    tracing::debug!(
        flags = tokenized.store.len(),
        issues = tokenized.issues.len(),
        "interpreted command line"
    );
    tokenized
}

/// Normalizes `input` and reads it into a [`FlagStore`].
pub fn tokenize(input: &str) -> Tokenized {
    interpret(&normalize_command(input))
}
