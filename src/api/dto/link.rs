//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// Both fields are optional at the wire level so that a missing target is
/// reported as an invalid URL rather than a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    /// The URL to redirect to (must be absolute HTTP/HTTPS).
    #[serde(default)]
    pub target: Option<String>,

    /// Optional custom short code (6-8 letters or digits).
    #[serde(default)]
    pub code: Option<String>,
}

/// JSON representation of a link.
///
/// Timestamps are ISO 8601 in UTC with millisecond precision,
/// e.g. `2025-01-01T12:00:00.000Z`.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub code: String,
    pub target: String,
    pub total_clicks: i64,
    #[serde(serialize_with = "iso8601_millis::serialize_option")]
    pub last_clicked: Option<DateTime<Utc>>,
    #[serde(serialize_with = "iso8601_millis::serialize")]
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            target: link.target,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Acknowledgement body for operations without a payload.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

/// Custom Serde serializers for millisecond-precision UTC timestamps.
mod iso8601_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn serialize_option<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_missing_fields() {
        let req: CreateLinkRequest = serde_json::from_str("{}").unwrap();
        assert!(req.target.is_none());
        assert!(req.code.is_none());
    }

    #[test]
    fn test_create_request_with_code() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": "custom1"}"#)
                .unwrap();
        assert_eq!(req.target.as_deref(), Some("https://example.com"));
        assert_eq!(req.code.as_deref(), Some("custom1"));
    }

    #[test]
    fn test_create_request_null_code() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{"target": "https://example.com", "code": null}"#).unwrap();
        assert!(req.code.is_none());
    }

    #[test]
    fn test_link_response_shape() {
        let created = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let link = Link::new(
            7,
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            created,
            false,
        );

        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(json["code"], "abc123");
        assert_eq!(json["target"], "https://example.com");
        assert_eq!(json["total_clicks"], 0);
        assert!(json["last_clicked"].is_null());
        assert_eq!(json["created_at"], "2025-01-02T03:04:05.000Z");
        assert!(json.get("id").is_none());
        assert!(json.get("deleted").is_none());
    }

    #[test]
    fn test_link_response_last_clicked_serialized() {
        let ts = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        let link = Link::new(
            1,
            "redir1".to_string(),
            "https://example.com".to_string(),
            3,
            Some(ts),
            ts,
            false,
        );

        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();
        assert_eq!(json["total_clicks"], 3);
        assert_eq!(json["last_clicked"], "2025-06-01T00:00:00.000Z");
    }

    #[test]
    fn test_ok_response() {
        let json = serde_json::to_value(OkResponse::ok()).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": true }));
    }
}
