//! Backend API calls. One request per call, no retries.

use contracts::chat::{QueryRequest, QueryResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Where a query went wrong, so the chat pane can pick the right
/// bot-authored error text.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFailure {
    /// The request never completed (offline, connection refused).
    Transport(String),
    /// The backend answered with a non-2xx status or an unreadable body.
    Backend(String),
}

/// POST the question with the page's session id and parse the answer.
pub async fn post_query(req: &QueryRequest) -> Result<QueryResponse, QueryFailure> {
    let response = Request::post(&api_url("/query"))
        .json(req)
        .map_err(|e| QueryFailure::Backend(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| QueryFailure::Transport(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(QueryFailure::Backend(format!("HTTP {}", response.status())));
    }

    response
        .json::<QueryResponse>()
        .await
        .map_err(|e| QueryFailure::Backend(format!("Failed to parse response: {}", e)))
}

/// POST the file as a multipart form to the upload endpoint. The response
/// body is not inspected; any 2xx means the document was indexed.
pub async fn upload_document(file: web_sys::File) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let request =
        Request::new_with_str_and_init(&api_url("/upload"), &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    Ok(())
}

/// POST to the reset endpoint (no body). Any 2xx means the index was wiped.
pub async fn reset_index() -> Result<(), String> {
    let response = Request::post(&api_url("/reset"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    Ok(())
}
