//! URL query parameter codec
//!
//! The host persists a session as a handful of query parameters on the
//! share URL:
//!
//! | key | value                                   |
//! |-----|-----------------------------------------|
//! | `v` | format version                          |
//! | `p` | program text (compact alphabet)         |
//! | `c` | character state text                    |
//! | `t` | theme name                              |
//! | `w` | world name                              |
//! | `a` | allowed actions (compact alphabet)      |
//!
//! This module only maps the query string to and from those raw values;
//! interpreting `p`/`c`/`a` is the job of the [`program`](super::program)
//! and [`character`](super::character) codecs.

use std::borrow::Cow;

use urlencoding::{decode, encode};

/// Decoded view of the persisted query parameters. Missing keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParams {
    pub version: Option<String>,
    pub program: Option<String>,
    pub character_state: Option<String>,
    pub theme: Option<String>,
    pub world: Option<String>,
    pub allowed_actions: Option<String>,
}

impl UrlParams {
    /// Parse a query string, with or without the leading `?`.
    ///
    /// Values are percent-decoded; a value with an undecodable percent
    /// sequence is kept verbatim rather than dropped.
    pub fn parse(query: &str) -> UrlParams {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = UrlParams::default();

        for pair in query.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, raw_value) = match pair.split_once('=') {
                Some((key, value)) => (key, value),
                None => (pair, ""),
            };
            let value = decode(raw_value)
                .unwrap_or(Cow::Borrowed(raw_value))
                .into_owned();
            match key {
                "v" => params.version = Some(value),
                "p" => params.program = Some(value),
                "c" => params.character_state = Some(value),
                "t" => params.theme = Some(value),
                "w" => params.world = Some(value),
                "a" => params.allowed_actions = Some(value),
                _ => {}
            }
        }

        params
    }

    /// Build the query string (no leading `?`) from the present fields,
    /// percent-encoding each value. Keys appear in a fixed order so the
    /// generated share URLs are stable.
    pub fn to_query_string(&self) -> String {
        let fields = [
            ("v", &self.version),
            ("t", &self.theme),
            ("w", &self.world),
            ("p", &self.program),
            ("c", &self.character_state),
            ("a", &self.allowed_actions),
        ];

        let mut query = String::new();
        for (key, value) in fields {
            if let Some(value) = value {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(key);
                query.push('=');
                query.push_str(&encode(value));
            }
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_query() {
        let params = UrlParams::parse("?v=0.9&p=12AB&c=0ab&t=dark&w=space&a=123");
        assert_eq!(params.version.as_deref(), Some("0.9"));
        assert_eq!(params.program.as_deref(), Some("12AB"));
        assert_eq!(params.character_state.as_deref(), Some("0ab"));
        assert_eq!(params.theme.as_deref(), Some("dark"));
        assert_eq!(params.world.as_deref(), Some("space"));
        assert_eq!(params.allowed_actions.as_deref(), Some("123"));
    }

    #[test]
    fn test_parse_missing_keys_are_none() {
        let params = UrlParams::parse("p=1");
        assert_eq!(params.program.as_deref(), Some("1"));
        assert_eq!(params.version, None);
        assert_eq!(params.character_state, None);
    }

    #[test]
    fn test_parse_percent_decodes_values() {
        let params = UrlParams::parse("t=default%20theme");
        assert_eq!(params.theme.as_deref(), Some("default theme"));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let params = UrlParams::parse("x=1&p=2");
        assert_eq!(params.program.as_deref(), Some("2"));
    }

    #[test]
    fn test_query_string_round_trip() {
        let params = UrlParams {
            version: Some("0.9".to_string()),
            program: Some("12AB".to_string()),
            character_state: Some("0ab".to_string()),
            theme: Some("default theme".to_string()),
            world: None,
            allowed_actions: None,
        };
        let query = params.to_query_string();
        assert_eq!(query, "v=0.9&t=default%20theme&p=12AB&c=0ab");
        assert_eq!(UrlParams::parse(&query), params);
    }
}
