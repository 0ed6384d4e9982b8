use http::{header, HeaderMap};
use percent_encoding::percent_decode;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub fn is_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_CONTENT_TYPE))
}

/// First value of `name` in an urlencoded form, decoded to raw bytes.
///
/// Values are never forced through UTF-8, so page bodies keep exactly the
/// bytes the client encoded.
pub fn field(raw: &[u8], name: &str) -> Option<Vec<u8>> {
    raw.split(|&b| b == b'&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = match pair.iter().position(|&b| b == b'=') {
                Some(split) => (&pair[..split], &pair[split + 1..]),
                None => (pair, &[][..]),
            };
            (decode(key) == name.as_bytes()).then(|| decode(value))
        })
}

// '+' is a space in form encoding, percent_decode leaves it alone
fn decode(encoded: &[u8]) -> Vec<u8> {
    let spaced: Vec<u8> = encoded
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    percent_decode(&spaced).collect()
}
