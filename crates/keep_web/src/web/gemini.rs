//! Fetch transport for the generative-language API.
//!
//! Prompt construction and response parsing live in `keep::ai`; this module
//! only moves bytes. Single request per call, no retry, no timeout: a failed
//! or malformed call surfaces as an [`AiError`] and the caller changes nothing.

use keep::ai::{self, AiError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::storage::PersistedSettings;
use super::{ToastLevel, Toasts};

pub(super) async fn generate(
    settings: &PersistedSettings,
    prompt: &str,
    expect_json: bool,
) -> Result<String, AiError> {
    if settings.api_key.trim().is_empty() {
        return Err(AiError::Transport(
            "no API key configured (see Settings)".to_string(),
        ));
    }

    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        settings.model, settings.api_key
    );

    let mut body = serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
    });
    if expect_json {
        body["generationConfig"] = serde_json::json!({
            "responseMimeType": "application/json",
        });
    }

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body.to_string()));

    let request = web_sys::Request::new_with_str_and_init(&url, &init)
        .map_err(|_| AiError::Transport("request: failed to build".to_string()))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| AiError::Transport("request: failed to set headers".to_string()))?;

    let window =
        web_sys::window().ok_or_else(|| AiError::Transport("no window".to_string()))?;
    let resp = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| AiError::Transport("network error".to_string()))?;
    let resp: web_sys::Response = resp
        .dyn_into()
        .map_err(|_| AiError::Transport("fetch: unexpected response object".to_string()))?;
    if !resp.ok() {
        return Err(AiError::Transport(format!("http {}", resp.status())));
    }

    let text_promise = resp
        .text()
        .map_err(|_| AiError::Transport("response: text() threw".to_string()))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|_| AiError::Transport("response: body read failed".to_string()))?;
    let raw = text
        .as_string()
        .ok_or_else(|| AiError::Transport("response: not a string".to_string()))?;

    ai::extract_generated_text(&raw)
}

/// Standard failure path for every AI call site: console + toast, nothing
/// else. Existing widget state is the caller's to leave alone.
pub(super) fn report_ai_failure(toasts: Toasts, context: &str, err: &AiError) {
    web_sys::console::error_1(&JsValue::from_str(&format!("{context}: {err}")));
    toasts.push(ToastLevel::Error, format!("{context} failed: {err}"));
}
