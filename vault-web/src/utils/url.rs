//! URL utility functions for reading query parameters

use std::collections::HashMap;

use web_sys::window;

/// Parse a `?a=1&b=2` query string. Keys without `=` map to an empty value;
/// values are percent-decoded.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_string());
            (key.to_string(), value)
        })
        .collect()
}

/// Get all query parameters from the current URL
pub fn get_query_params() -> HashMap<String, String> {
    window()
        .and_then(|w| w.location().search().ok())
        .map(|search| parse_query(&search))
        .unwrap_or_default()
}
