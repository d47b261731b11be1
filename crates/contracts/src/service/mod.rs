//! Wire contracts for the register-rag HTTP service.
//!
//! Field names and defaults follow the service's request models, so these
//! structs serialize into exactly the JSON bodies the endpoints expect.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Per-application settings file the service resolves modules from.
pub const DEFAULT_CONFIG_PATH: &str = "app_register_config.json";

/// Content kind for documents posted as already-decoded text.
pub const FILE_TYPE_TEXT: &str = "text";

/// Request body for `POST /insertDocToStore`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsertDocRequest {
    /// Document body. Sent as text; `"stream"` uploads are a service-side
    /// concern and never produced by this client.
    pub file_content: String,
    /// Content kind, see [`FILE_TYPE_TEXT`].
    pub file_type: String,
    /// Application the document belongs to (service routing key).
    pub app_name: String,
    /// Index of the first chunk to insert.
    #[serde(default)]
    pub begin_index: i64,
    /// Display name of the source document.
    #[serde(default)]
    pub doc_name: Option<String>,
    /// Service-side document id; the store assigns one when absent.
    #[serde(default)]
    pub doc_id: Option<i64>,
}

impl InsertDocRequest {
    /// Build a text-document request for `app_name` from a named source.
    pub fn text(app_name: impl Into<String>, doc_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_content: content.into(),
            file_type: FILE_TYPE_TEXT.to_string(),
            app_name: app_name.into(),
            begin_index: 0,
            doc_name: Some(doc_name.into()),
            doc_id: None,
        }
    }

    /// Reject requests the service would not be able to route or chunk.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            bail!("application name is empty");
        }
        if self.file_content.is_empty() {
            bail!("document content is empty");
        }
        if self.begin_index < 0 {
            bail!("begin_index must be non-negative, got {}", self.begin_index);
        }
        Ok(())
    }
}

/// Request body for `POST /getResponseFromLLM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetResponseRequest {
    /// User query to answer from the knowledge base.
    pub query_content: String,
    /// Application the query is routed to.
    pub app_name: String,
    /// Settings file override, defaults to [`DEFAULT_CONFIG_PATH`].
    #[serde(default = "default_config_path")]
    pub config_path: String,
}

impl GetResponseRequest {
    pub fn new(app_name: impl Into<String>, query_content: impl Into<String>) -> Self {
        Self {
            query_content: query_content.into(),
            app_name: app_name.into(),
            config_path: DEFAULT_CONFIG_PATH.to_string(),
        }
    }

    /// Reject requests the service would not be able to route.
    pub fn validate(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            bail!("application name is empty");
        }
        if self.query_content.trim().is_empty() {
            bail!("query is empty");
        }
        Ok(())
    }
}

fn default_config_path() -> String {
    DEFAULT_CONFIG_PATH.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_doc_wire_format() {
        let request = InsertDocRequest::text("qa-register", "faq.txt", "Q: a\nA: b\n");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["file_content"], "Q: a\nA: b\n");
        assert_eq!(json["file_type"], "text");
        assert_eq!(json["app_name"], "qa-register");
        assert_eq!(json["begin_index"], 0);
        assert_eq!(json["doc_name"], "faq.txt");
        assert_eq!(json["doc_id"], serde_json::Value::Null);
    }

    #[test]
    fn insert_doc_optional_fields_default() {
        let request: InsertDocRequest = serde_json::from_str(
            r#"{"file_content": "body", "file_type": "text", "app_name": "qa-register"}"#,
        )
        .unwrap();

        assert_eq!(request.begin_index, 0);
        assert_eq!(request.doc_name, None);
        assert_eq!(request.doc_id, None);
    }

    #[test]
    fn get_response_wire_format() {
        let request = GetResponseRequest::new("qa-register", "what is the refund policy?");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["query_content"], "what is the refund policy?");
        assert_eq!(json["app_name"], "qa-register");
        assert_eq!(json["config_path"], "app_register_config.json");
    }

    #[test]
    fn get_response_config_path_defaults() {
        let request: GetResponseRequest =
            serde_json::from_str(r#"{"query_content": "q", "app_name": "a"}"#).unwrap();
        assert_eq!(request.config_path, DEFAULT_CONFIG_PATH);
    }

    #[test]
    fn validation_rejects_unroutable_requests() {
        assert!(InsertDocRequest::text("", "doc.txt", "body").validate().is_err());
        assert!(InsertDocRequest::text("app", "doc.txt", "").validate().is_err());
        assert!(InsertDocRequest::text("app", "doc.txt", "body").validate().is_ok());

        assert!(GetResponseRequest::new("app", "   ").validate().is_err());
        assert!(GetResponseRequest::new("app", "query").validate().is_ok());
    }
}
