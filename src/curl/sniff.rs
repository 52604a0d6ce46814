//! Guessing a request body's media type from its shape.

use serde_json::Value;
use winnow::{
    ModalResult, Parser,
    ascii::multispace0,
    combinator::{opt, preceded},
    token::{take_until, take_while},
};

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Soap,
    Xml,
    Form,
}

impl BodyKind {
    pub fn content_type(self) -> &'static str {
        match self {
            BodyKind::Json => "application/json",
            BodyKind::Soap | BodyKind::Xml => "text/xml",
            BodyKind::Form => FORM_URLENCODED,
        }
    }
}

/// `<?xml version="1.0"?>`
fn xml_prolog(s: &mut &str) -> ModalResult<()> {
    ("<?", take_until(0.., "?>"), "?>").void().parse_next(s)
}

/// Name of the first element, prefix included (`soap:Envelope`).
fn root_element<'a>(s: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        (multispace0, opt(xml_prolog), multispace0, '<'),
        take_while(1.., |c: char| {
            c.is_alphanumeric() || matches!(c, ':' | '_' | '-' | '.')
        }),
    )
    .parse_next(s)
}

fn xml_root(body: &str) -> Option<&str> {
    let mut input = body;
    let root = root_element.parse_next(&mut input).ok()?;
    body.trim_end().ends_with('>').then_some(root)
}

fn is_json(body: &str) -> bool {
    matches!(
        serde_json::from_str::<Value>(body),
        Ok(Value::Object(_) | Value::Array(_))
    )
}

fn is_soap(body: &str) -> bool {
    xml_root(body).is_some_and(|root| {
        let local = root.rsplit(':').next().unwrap_or(root);
        local.eq_ignore_ascii_case("envelope")
    })
}

fn is_xml(body: &str) -> bool {
    xml_root(body).is_some()
}

pub fn sniff(body: &str) -> BodyKind {
    if is_json(body) {
        BodyKind::Json
    } else if is_soap(body) {
        BodyKind::Soap
    } else if is_xml(body) {
        BodyKind::Xml
    } else {
        BodyKind::Form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(r#"{"a":1}"#, BodyKind::Json)]
    #[case(r#" [1, 2, {"b": null}] "#, BodyKind::Json)]
    #[case(r#"{"a":1"#, BodyKind::Form)]
    #[case("42", BodyKind::Form)]
    #[case(r#""str""#, BodyKind::Form)]
    #[case(
        r#"<?xml version="1.0"?><soap:Envelope xmlns:soap="http://www.w3.org/2003/05/soap-envelope"><soap:Body/></soap:Envelope>"#,
        BodyKind::Soap
    )]
    #[case("<SOAP-ENV:Envelope></SOAP-ENV:Envelope>", BodyKind::Soap)]
    #[case("<Envelope/>", BodyKind::Soap)]
    #[case(r#"<?xml version="1.0" encoding="UTF-8"?> <note><to>Tove</to></note>"#, BodyKind::Xml)]
    #[case("<note>unclosed", BodyKind::Form)]
    #[case("<!-- comment -->", BodyKind::Form)]
    #[case("a=1&b=2", BodyKind::Form)]
    #[case("", BodyKind::Form)]
    fn test_sniff(#[case] body: &str, #[case] expected: BodyKind) {
        assert_eq!(sniff(body), expected, "body: ({})", body);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(BodyKind::Json.content_type(), "application/json");
        assert_eq!(BodyKind::Soap.content_type(), "text/xml");
        assert_eq!(BodyKind::Xml.content_type(), "text/xml");
        assert_eq!(BodyKind::Form.content_type(), FORM_URLENCODED);
    }

    #[test]
    fn test_xml_root() {
        assert_eq!(xml_root("  <soapenv:Envelope>x</soapenv:Envelope>"), Some("soapenv:Envelope"));
        assert_eq!(xml_root("plain"), None);
    }
}
