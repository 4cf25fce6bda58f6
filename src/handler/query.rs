//! Query string parsing module
//!
//! Minimal key/value parsing for the query component of a request URI.
//! The only parameter this server reads is the numeric `id` on the user
//! detail page.

/// Outcome of reading the `id` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdParam {
    /// The parameter is absent from the query string.
    Missing,
    /// The parameter is present but not an integer.
    Malformed,
    /// Parsed value.
    Id(i64),
}

/// Find the first value for `name` in a raw query string.
///
/// Pairs are split on `&`, keys from values on the first `=`. A key
/// without `=` yields an empty value. The first occurrence wins.
pub fn find_param<'a>(query: Option<&'a str>, name: &str) -> Option<&'a str> {
    let query = query?;
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    })
}

/// Read the `id` parameter from a query string.
pub fn parse_user_id(query: Option<&str>) -> IdParam {
    match find_param(query, "id") {
        None => IdParam::Missing,
        Some(raw) => raw.parse::<i64>().map_or(IdParam::Malformed, IdParam::Id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_param() {
        assert_eq!(find_param(Some("id=1"), "id"), Some("1"));
        assert_eq!(find_param(Some("a=2&id=7&id=9"), "id"), Some("7"));
        assert_eq!(find_param(Some("a=2"), "id"), None);
        assert_eq!(find_param(None, "id"), None);
        // Key without '=' yields an empty value
        assert_eq!(find_param(Some("id"), "id"), Some(""));
    }

    #[test]
    fn test_parse_user_id_missing() {
        assert_eq!(parse_user_id(None), IdParam::Missing);
        assert_eq!(parse_user_id(Some("name=Ali")), IdParam::Missing);
    }

    #[test]
    fn test_parse_user_id_malformed() {
        assert_eq!(parse_user_id(Some("id=notanumber")), IdParam::Malformed);
        assert_eq!(parse_user_id(Some("id=")), IdParam::Malformed);
        assert_eq!(parse_user_id(Some("id=1.5")), IdParam::Malformed);
    }

    #[test]
    fn test_parse_user_id_value() {
        assert_eq!(parse_user_id(Some("id=3")), IdParam::Id(3));
        assert_eq!(parse_user_id(Some("other=x&id=12")), IdParam::Id(12));
        // Negative values parse; the lookup decides whether they exist
        assert_eq!(parse_user_id(Some("id=-1")), IdParam::Id(-1));
    }
}
