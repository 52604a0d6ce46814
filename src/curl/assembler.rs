use super::{
    BasicAuth, CurlRequest, Header,
    header::{parse_credentials, parse_header},
    sniff::sniff,
    store::FlagStore,
};

const DATA_FLAGS: [&str; 3] = ["d", "data", "data-binary"];
const HEADER_FLAGS: [&str; 2] = ["H", "header"];

/// `--url` wins over the positional; position 0 is `curl` itself.
fn pick_url(store: &FlagStore) -> String {
    store
        .first("url")
        .filter(|url| !url.is_empty())
        .or_else(|| store.positionals().get(1).map(String::as_str))
        .unwrap_or_default()
        .into()
}

/// Folds one data flag's values into the body; `@name` values are uploads.
///
/// Pieces are glued with `&` when the first one (the body so far, if any)
/// looks like a form field, otherwise concatenated as an opaque payload.
fn join_data(body: &mut String, files: &mut Vec<String>, values: &[String]) {
    let mut fragments = Vec::with_capacity(values.len() + 1);
    if !body.is_empty() {
        fragments.push(body.as_str());
    }
    for value in values {
        match value.strip_prefix('@') {
            Some(file) => files.push(file.into()),
            None if value.is_empty() => {}
            None => fragments.push(value),
        }
    }

    let glue = if fragments.first().is_some_and(|f| f.contains('=')) {
        "&"
    } else {
        ""
    };
    *body = fragments.join(glue);
}

fn is_content_type(key: &str) -> bool {
    key.to_ascii_lowercase().contains("content-type")
}

fn pick_method(store: &FlagStore) -> String {
    let fallback = if store.contains("I") || store.contains("head") {
        "HEAD"
    } else {
        "GET"
    };
    // curl uses the last -X when it is repeated.
    store
        .last("request")
        .or_else(|| store.last("X"))
        .unwrap_or(fallback)
        .to_uppercase()
}

fn pick_basic_auth(store: &FlagStore) -> Option<BasicAuth> {
    let raw = store.last("user").or_else(|| store.last("u"))?;
    let (user, pass) = parse_credentials(raw);
    Some(BasicAuth { user, pass })
}

/// Turns collected flags into a request description. Never fails: every
/// field falls back to an empty value (or `GET`) when its flags are absent.
pub fn assemble(store: &FlagStore) -> CurlRequest {
    let url = pick_url(store);

    let mut data = String::new();
    let mut files = Vec::new();
    for flag in DATA_FLAGS {
        if store.contains(flag) {
            join_data(&mut data, &mut files, store.values(flag));
        }
    }

    let mut content_type = None;
    let mut headers: Vec<Header> = HEADER_FLAGS
        .iter()
        .flat_map(|flag| store.values(flag))
        .map(|raw| {
            let (key, value) = parse_header(raw);
            if is_content_type(&key) {
                content_type = Some(value.clone());
            }
            Header { key, value }
        })
        .collect();

    let content_type = match content_type {
        Some(explicit) => explicit,
        None => {
            let kind = sniff(&data);
            tracing::debug!(?kind, "no Content-Type header, sniffed body");
            let inferred = kind.content_type().to_string();
            headers.push(Header {
                key: "Content-Type".into(),
                value: inferred.clone(),
            });
            inferred
        }
    };

    let method = pick_method(store);
    let basic_auth = pick_basic_auth(store);

    tracing::debug!(
        %url,
        %method,
        headers = headers.len(),
        files = files.len(),
        "assembled request"
    );

    CurlRequest {
        url,
        method,
        headers,
        data,
        files,
        basic_auth,
        content_type,
    }
}
