//! HTTP Basic-auth extractor over the static user directory.

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;

use ofivote_core::{
  auth::{Directory, User},
  store::VoteStore,
};

use crate::{AppState, error::ApiError};

/// Present in a handler's arguments means the request carried valid
/// credentials; holds the matched directory record (stored spelling of the
/// username, which is what vote rows are keyed by).
pub struct Authenticated(pub User);

/// Verify credentials directly from headers.
pub fn verify_basic(headers: &HeaderMap, directory: &Directory) -> Result<User, ApiError> {
  let header_val = headers
    .get(axum::http::header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .ok_or(ApiError::Unauthorized)?;

  let encoded = header_val
    .strip_prefix("Basic ")
    .ok_or(ApiError::Unauthorized)?;

  let decoded = B64.decode(encoded).map_err(|_| ApiError::Unauthorized)?;
  let creds   = std::str::from_utf8(&decoded).map_err(|_| ApiError::Unauthorized)?;

  let (username, password) = creds.split_once(':').ok_or(ApiError::Unauthorized)?;

  directory
    .verify(username, password)
    .cloned()
    .ok_or(ApiError::Unauthorized)
}

impl<S> FromRequestParts<AppState<S>> for Authenticated
where
  S: VoteStore + Clone + Send + Sync + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let user = verify_basic(&parts.headers, &state.directory)?;
    Ok(Authenticated(user))
  }
}
