use nom::{
    IResult,
    bytes::complete::take_till,
    character::complete::char,
    combinator::{opt, rest},
    error::context,
    sequence::{pair, preceded},
};

/// Splits on the first `:` only; the right side is `None` without one.
fn split_first_colon(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    context(
        "split first colon",
        pair(take_till(|c: char| c == ':'), opt(preceded(char(':'), rest))),
    )(input)
}

fn split_pair(input: &str) -> (&str, Option<&str>) {
    match split_first_colon(input) {
        Ok((_rest, parts)) => parts,
        Err(_) => (input, None),
    }
}

/// Splits a raw `-H` value into a trimmed key and value.
pub fn parse_header(raw: &str) -> (String, String) {
    let (key, value) = split_pair(raw);
    (key.trim().into(), value.unwrap_or_default().trim().into())
}

/// Splits a `-u` value into user and password; the password may contain `:`.
pub fn parse_credentials(raw: &str) -> (String, String) {
    let (user, pass) = split_pair(raw);
    (user.into(), pass.unwrap_or_default().into())
}
