//! Request/response bodies for the document QA endpoints.

use serde::{Deserialize, Serialize};

/// Body of `POST /query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRequest {
    pub question: String,
    pub session_id: String,
}

/// Success body of `POST /query`.
///
/// `sources` may be absent entirely; `confidence` is a coarse
/// "High" / "Medium" / "Low" label the backend attaches per answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<String>,
}

/// One retrieved chunk backing an answer: origin label plus excerpt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub source: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_request_field_names() {
        let req = QueryRequest {
            question: "What is the revenue?".to_string(),
            session_id: "session-42".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["question"], "What is the revenue?");
        assert_eq!(json["session_id"], "session-42");
    }

    #[test]
    fn query_response_minimal_body() {
        let resp: QueryResponse = serde_json::from_str(r#"{"answer": "42"}"#).unwrap();
        assert_eq!(resp.answer, "42");
        assert!(resp.sources.is_empty());
        assert!(resp.confidence.is_none());
    }

    #[test]
    fn query_response_full_body() {
        let body = r#"{
            "answer": "Revenue grew 12%.",
            "sources": [{"source": "report.pdf", "text": "Revenue grew..."}],
            "confidence": "High"
        }"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.sources.len(), 1);
        assert_eq!(resp.sources[0].source, "report.pdf");
        assert_eq!(resp.confidence.as_deref(), Some("High"));
    }

    #[test]
    fn query_response_ignores_unknown_fields() {
        let body = r#"{"answer": "ok", "model": "gpt", "tokens": 12}"#;
        let resp: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.answer, "ok");
    }
}
