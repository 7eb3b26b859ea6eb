use crate::error::{FigmaError, Result};
use serde_json::Value;
use std::fmt;
use url::Url;

/// True iff the key is a non-empty string. No remote existence check.
pub fn validate_file_key(key: &str) -> bool {
    !key.is_empty()
}

/// Same check for untyped input: only a non-empty JSON string passes
pub fn validate_file_key_value(value: &Value) -> bool {
    value.as_str().map(validate_file_key).unwrap_or(false)
}

/// Well-formed Figma file key, optionally with a node id taken from a URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileKey {
    key: String,
    node_id: Option<String>,
}

impl FileKey {
    /// Parse a file key or a Figma URL
    ///
    /// Supports formats:
    /// - `abc123`
    /// - `https://www.figma.com/file/abc123/File-Name`
    /// - `https://www.figma.com/design/abc123/File-Name?node-id=123-456`
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if !validate_file_key(input) {
            return Err(FigmaError::Validation("File key must not be empty".to_string()));
        }

        if input.starts_with("http://") || input.starts_with("https://") {
            return Self::parse_url(input);
        }

        Ok(Self {
            key: input.to_string(),
            node_id: None,
        })
    }

    fn parse_url(input: &str) -> Result<Self> {
        let invalid = |reason: String| FigmaError::Validation(reason);

        let url = Url::parse(input).map_err(|e| invalid(format!("Invalid URL: {}", e)))?;
        let host = url.host_str().ok_or_else(|| invalid("Invalid URL: no host".to_string()))?;
        if !host.ends_with("figma.com") {
            return Err(invalid(format!("Not a Figma URL: {}", host)));
        }

        // /file/<key>/<name>, /design/<key>/<name>, ...
        let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
        let (kind, key) = match segments.as_slice() {
            [kind, key, ..] => (*kind, *key),
            _ => return Err(invalid("Invalid Figma URL: missing file key".to_string())),
        };
        if !["file", "design", "proto", "board"].contains(&kind) {
            return Err(invalid(format!("Invalid Figma URL type: {}", kind)));
        }

        // URLs carry node ids as 123-456, the API expects 123:456
        let node_id = url
            .query_pairs()
            .find(|(name, _)| name == "node-id")
            .map(|(_, value)| value.replace('-', ":"));

        Ok(Self {
            key: key.to_string(),
            node_id,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    pub fn node_id(&self) -> Option<&str> {
        self.node_id.as_deref()
    }

    /// Key encoded for use as a URL path segment
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.key).into_owned()
    }
}

impl fmt::Display for FileKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_file_key() {
        assert!(!validate_file_key(""));
        assert!(validate_file_key("abc123"));
    }

    #[test]
    fn test_validate_untyped_value() {
        assert!(validate_file_key_value(&json!("abc123")));
        assert!(!validate_file_key_value(&json!("")));
        assert!(!validate_file_key_value(&json!(42)));
        assert!(!validate_file_key_value(&json!(null)));
    }

    #[test]
    fn test_parse_plain_key() {
        let key = FileKey::parse("  abc123xyz ").unwrap();
        assert_eq!(key.as_str(), "abc123xyz");
        assert_eq!(key.node_id(), None);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(FileKey::parse("   "), Err(FigmaError::Validation(_))));
    }

    #[test]
    fn test_parse_design_url() {
        let key = FileKey::parse("https://www.figma.com/design/abc123/Test?node-id=1-234").unwrap();
        assert_eq!(key.as_str(), "abc123");
        assert_eq!(key.node_id(), Some("1:234"));
    }

    #[test]
    fn test_parse_rejects_other_hosts() {
        assert!(FileKey::parse("https://example.com/file/abc123").is_err());
        assert!(FileKey::parse("https://www.figma.com/community/abc123").is_err());
        assert!(FileKey::parse("https://www.figma.com/file").is_err());
    }

    #[test]
    fn test_path_segment_is_encoded() {
        let key = FileKey::parse("a b/c").unwrap();
        assert_eq!(key.path_segment(), "a%20b%2Fc");
    }
}
