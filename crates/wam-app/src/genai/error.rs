use thiserror::Error;

/// Failures talking to the generation service.
///
/// All variants surface to the user as the same generic message; the
/// detail only reaches the log.
#[derive(Error, Debug)]
pub enum ExternalServiceError {
    #[error("API key not found in environment variable {var}")]
    MissingCredential { var: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response contained no text")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExternalServiceError::MissingCredential {
            var: "API_KEY".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API key not found in environment variable API_KEY"
        );

        let err = ExternalServiceError::Status {
            status: 403,
            body: "forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API error 403: forbidden");
    }
}
