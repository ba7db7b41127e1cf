//! Response envelopes.
//!
//! Every read endpoint answers under the same `{success, data, count,
//! source}` envelope so callers can merge live and fallback data without
//! branching on shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::fallback::Source;

/// Envelope for collection reads.
#[derive(Debug, Serialize)]
pub struct ListEnvelope<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
    pub source: Source,
}

/// 200 with the standard list envelope.
pub fn list_response<T: Serialize>(data: Vec<T>, source: Source) -> Response {
    let count = data.len();
    (
        StatusCode::OK,
        Json(ListEnvelope {
            success: true,
            data,
            count,
            source,
        }),
    )
        .into_response()
}

/// 200 with an arbitrary JSON body.
pub fn json_ok(body: impl Serialize) -> Response {
    (StatusCode::OK, Json(body)).into_response()
}

/// Error body with an optional upstream detail.
pub fn json_error(status: StatusCode, error: &str, details: Option<&str>) -> Response {
    let body = match details {
        Some(details) => serde_json::json!({
            "success": false,
            "error": error,
            "details": details,
        }),
        None => serde_json::json!({
            "success": false,
            "error": error,
        }),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;

    #[tokio::test]
    async fn test_list_envelope_shape() {
        let response = list_response(
            vec![Template {
                id: "t1".into(),
                name: "Launch".into(),
                template_type: vec!["launch".into()],
                usage_count: 3,
            }],
            Source::Supabase,
        );
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 1);
        assert_eq!(body["source"], "supabase");
        assert_eq!(body["data"][0]["id"], "t1");
    }

    #[tokio::test]
    async fn test_error_body_includes_details_when_present() {
        let response = json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Proposal generation failed",
            Some("upstream returned status 502"),
        );
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["success"], false);
        assert_eq!(body["details"], "upstream returned status 502");
    }
}
