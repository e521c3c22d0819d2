use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the backend: `{"detail": ...}`.
///
/// `detail` is usually a code such as `LOGIN_BAD_CREDENTIALS`, but validation
/// failures carry a list of objects instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    pub fn into_detail(self) -> Option<String> {
        match self.detail? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    pub fn parse_detail(raw: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(raw)
            .ok()
            .and_then(ErrorBody::into_detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_kept() {
        assert_eq!(
            ErrorBody::parse_detail(r#"{"detail":"LOGIN_BAD_CREDENTIALS"}"#).as_deref(),
            Some("LOGIN_BAD_CREDENTIALS")
        );
    }

    #[test]
    fn structured_detail_is_rendered_as_json() {
        let detail = ErrorBody::parse_detail(r#"{"detail":[{"loc":["body","email"]}]}"#);
        assert_eq!(detail.as_deref(), Some(r#"[{"loc":["body","email"]}]"#));
    }

    #[test]
    fn missing_or_invalid_body_has_no_detail() {
        assert_eq!(ErrorBody::parse_detail("{}"), None);
        assert_eq!(ErrorBody::parse_detail(r#"{"detail":null}"#), None);
        assert_eq!(ErrorBody::parse_detail("<html>502</html>"), None);
    }
}
