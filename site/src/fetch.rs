//! `SectionSource` backed by the browser Fetch API.

use docsite::{FetchError, SectionSource};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::dom::js_error;

/// Fetches fragments relative to the page's origin with `window.fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSource;

impl BrowserSource {
    fn window() -> Result<web_sys::Window, FetchError> {
        web_sys::window().ok_or_else(|| FetchError::Unavailable("no global `window`".into()))
    }
}

impl SectionSource for BrowserSource {
    fn ensure_ready(&self) -> Result<(), FetchError> {
        Self::window().map(|_| ())
    }

    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let window = Self::window()?;

        let response = JsFuture::from(window.fetch_with_str(path))
            .await
            .map_err(|e| FetchError::Network(js_error(&e)))?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| FetchError::Network("fetch resolved to a non-Response value".into()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: response.status(),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Body(js_error(&e)))?;
        JsFuture::from(body)
            .await
            .map_err(|e| FetchError::Body(js_error(&e)))?
            .as_string()
            .ok_or_else(|| FetchError::Body("response body is not a string".into()))
    }
}
