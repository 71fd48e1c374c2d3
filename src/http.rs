//! Shared HTTP plumbing for the two remote APIs.
//!
//! Both clients use blocking `ureq` calls; there is no retry and no timeout
//! override beyond the agent defaults. The only typed error in the crate is
//! [`ApiError`], so callers can see the status line and response body when a
//! service rejects a request.

use anyhow::Result;
use thiserror::Error;

/// A non-success response from a remote API.
#[derive(Debug, Error)]
#[error("{service} returned HTTP {status}: {body}")]
pub struct ApiError {
    /// Which service answered (for log and error messages).
    pub service: &'static str,
    /// HTTP status code.
    pub status: u16,
    /// Response body, as far as it could be read.
    pub body: String,
}

/// Map a `ureq` call result into the crate's error shape.
///
/// Status errors (4xx/5xx) become [`ApiError`] with the body attached;
/// transport errors propagate as-is.
pub fn check_response(
    service: &'static str,
    result: std::result::Result<ureq::Response, ureq::Error>,
) -> Result<ureq::Response> {
    match result {
        Ok(response) => Ok(response),
        Err(ureq::Error::Status(status, response)) => {
            let body = response.into_string().unwrap_or_default();
            Err(ApiError { service, status, body }.into())
        }
        Err(err) => Err(anyhow::Error::new(err).context(format!("{service} request failed"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            service: "OpenRouter",
            status: 401,
            body: "bad key".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("OpenRouter"));
        assert!(msg.contains("401"));
        assert!(msg.contains("bad key"));
    }
}
