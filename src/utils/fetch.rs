//! Network fetching utilities with timeout support.
//!
//! Provides async fetch functions with timeout racing. Every function here
//! reports failures as [`FetchError`] so the core loader can treat them
//! uniformly.

use js_sys::{Array, Promise, Uint8Array};
use repoview_core::FetchError;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Issue a GET and return the successful response.
///
/// If the request takes longer than `FETCH_TIMEOUT_MS`, returns
/// [`FetchError::Timeout`]; non-2xx statuses become [`FetchError::Http`].
pub async fn fetch_response(url: &str) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::Network(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::Http(resp.status()));
            }
            Ok(resp)
        }
    }
}

/// Read a response body as text.
pub async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;

    text.as_string().ok_or(FetchError::InvalidContent)
}

/// Fetch text from a URL.
pub async fn fetch_text(url: &str) -> Result<String, FetchError> {
    let resp = fetch_response(url).await?;
    read_text(&resp).await
}

/// Fetch the raw bytes of a URL.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let resp = fetch_response(url).await?;
    let buffer = JsFuture::from(
        resp.array_buffer()
            .map_err(|_| FetchError::ResponseReadFailed)?,
    )
    .await
    .map_err(|_| FetchError::ResponseReadFailed)?;

    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Read a header, if present.
pub fn header(resp: &Response, name: &str) -> Option<String> {
    resp.headers().get(name).ok().flatten()
}
