use thiserror::Error;

/// The single failure type for the three provider capabilities.
///
/// Callers only learn that a fetch produced no data; the variants exist for
/// diagnostics, not for routing. Errors propagate to the caller of the view
/// transition that triggered the fetch - nothing in this crate retries.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Invalid(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Back off to a char boundary; a fixed byte cut can land inside a
        // multibyte character and panic.
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        FetchError::Status {
            status: status.as_u16(),
            body: Self::truncate_body(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_kept_verbatim() {
        let err = FetchError::from_status(reqwest::StatusCode::NOT_FOUND, "no such employee");
        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such employee");
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_long_multibyte_body_cut_on_char_boundary() {
        // Byte 500 lands mid-character here; the cut must back off rather
        // than panic.
        let body = "€".repeat(200);
        let err = FetchError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.starts_with('€'));
                assert!(body.contains("truncated, 600 total bytes"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_long_body_truncated() {
        let body = "x".repeat(2000);
        let err = FetchError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &body);
        match err {
            FetchError::Status { body, .. } => {
                assert!(body.len() < 600);
                assert!(body.contains("truncated"));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
