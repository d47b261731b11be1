//! HTTP client for the register-rag service endpoints.

use crate::shared::api_utils::api_url;
use contracts::service::{GetResponseRequest, InsertDocRequest};
use gloo_net::http::Request;

/// Insert a document into the knowledge base.
pub async fn insert_doc_to_store(request: InsertDocRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/insertDocToStore"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Service returned status {}", response.status()));
    }
    Ok(())
}

/// Answer a query from the knowledge base. The service responds with the
/// answer as a JSON-encoded string.
pub async fn get_response_from_llm(request: GetResponseRequest) -> Result<String, String> {
    Request::post(&api_url("/getResponseFromLLM"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
