//! Header utilities for upstream requests
//!
//! Outbound headers are built only from server-held credentials; nothing from
//! the inbound request is forwarded to the completion API.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{
    config::Credentials,
    error::{RelayError, RelayResult},
};

/// Header carrying the folder (tenant) id
pub const FOLDER_ID_HEADER: &str = "x-folder-id";

/// Build headers for a completion request
///
/// The API key is interpolated at call time and the resulting header is marked
/// sensitive so it is redacted from `Debug` output.
pub fn build_completion_headers(credentials: &Credentials) -> RelayResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&format!("Api-Key {}", credentials.api_key()))
        .map_err(|_| {
            RelayError::Configuration("API key contains invalid header characters".to_string())
        })?;
    authorization.set_sensitive(true);

    let folder_id = HeaderValue::from_str(&credentials.folder_id).map_err(|_| {
        RelayError::Configuration("Folder id contains invalid header characters".to_string())
    })?;

    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(HeaderName::from_static(FOLDER_ID_HEADER), folder_id);

    Ok(headers)
}
