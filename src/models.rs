use serde::Serialize;
use serde_json::Value;

use crate::error::SearchError;

/// Raw user input, sent as-is. May be empty.
pub type Query = String;

/// JSON body of a search request: `{"query": "..."}`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

impl<'a> SearchRequest<'a> {
    pub fn new(query: &'a str) -> Self {
        SearchRequest { query }
    }

    pub fn to_json(&self) -> String {
        // Serializing a struct with a single &str field cannot fail
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Status line and body as returned by the transport
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        HttpReply {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Interpret a reply as a result list.
    ///
    /// A non-2xx status is an error before the body is ever looked at.
    pub fn into_results(self) -> Result<Vec<String>, SearchError> {
        if !self.is_success() {
            return Err(SearchError::Status(self.status));
        }
        parse_results(&self.body)
    }
}

/// Decode a response body and pull out the `results` array.
pub fn parse_results(body: &str) -> Result<Vec<String>, SearchError> {
    let data: Value =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    let items = match data.get("results") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(SearchError::Shape(format!(
                "`results` is {}, expected an array",
                json_type(other)
            )))
        }
        None => return Err(SearchError::Shape(String::from("`results` is missing"))),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(url) => Ok(url.clone()),
            other => Err(SearchError::Shape(format!(
                "`results[{}]` is {}, expected a string",
                i,
                json_type(other)
            ))),
        })
        .collect()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_sent_byte_for_byte() {
        assert_eq!(
            SearchRequest::new("cats & dogs").to_json(),
            r#"{"query":"cats & dogs"}"#
        );
        assert_eq!(SearchRequest::new("").to_json(), r#"{"query":""}"#);
    }

    #[test]
    fn test_query_with_quotes_and_unicode() {
        let json = SearchRequest::new("say \"héllo\"").to_json();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back["query"], "say \"héllo\"");
    }

    #[test]
    fn test_parse_results_keeps_order() {
        let body = r#"{"results":["https://a.com","https://b.com","https://a.com"]}"#;
        assert_eq!(
            parse_results(body).unwrap(),
            vec!["https://a.com", "https://b.com", "https://a.com"]
        );
    }

    #[test]
    fn test_parse_empty_results_is_success() {
        assert_eq!(parse_results(r#"{"results":[]}"#).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_missing_results_is_shape_error() {
        let err = parse_results(r#"{"query":"x"}"#).unwrap_err();
        assert!(matches!(err, SearchError::Shape(_)));
    }

    #[test]
    fn test_object_results_is_shape_error() {
        let body = r#"{"results":{"google_results":[],"wikipedia_results":[]}}"#;
        let err = parse_results(body).unwrap_err();
        assert_eq!(
            err,
            SearchError::Shape(String::from("`results` is an object, expected an array"))
        );
    }

    #[test]
    fn test_non_string_item_is_shape_error() {
        let err = parse_results(r#"{"results":["https://a.com", 3]}"#).unwrap_err();
        assert!(matches!(err, SearchError::Shape(msg) if msg.contains("results[1]")));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = parse_results("<html>oops</html>").unwrap_err();
        assert!(matches!(err, SearchError::Decode(_)));
    }

    #[test]
    fn test_error_status_skips_body() {
        let reply = HttpReply::new(500, r#"{"results":["https://a.com"]}"#);
        assert_eq!(reply.into_results(), Err(SearchError::Status(500)));
    }

    #[test]
    fn test_success_status_range() {
        assert!(HttpReply::new(204, "").is_success());
        assert!(!HttpReply::new(302, "").is_success());
        assert!(!HttpReply::new(404, "").is_success());
    }
}
