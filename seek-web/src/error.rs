use reqwest::StatusCode;
use seek_http::HttpError;
use thiserror::Error;

/// Everything a provider call can fail with. Nothing here is retried; the
/// first failure ends the operation and reaches the caller as-is.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The credential variable was unset or empty when the adapter was built.
    #[error("{var} environment variable is not set")]
    MissingCredential { var: &'static str },

    /// The request never produced a response (connect, TLS, timeout, build).
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("API error: {status} - {body}")]
    Upstream { status: StatusCode, body: String },

    /// The provider answered 2xx with a body we could not parse.
    #[error("decode error: {0}")]
    Decode(String),

    #[error("{provider} does not support {operation}")]
    Unsupported {
        provider: &'static str,
        operation: &'static str,
    },
}

impl From<HttpError> for ProviderError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::Api { status, body, .. } => ProviderError::Upstream { status, body },
            HttpError::Decode(message, snippet) => {
                ProviderError::Decode(format!("{message} (body: {snippet})"))
            }
            HttpError::Url(_) | HttpError::Build(_) | HttpError::Network(_) => {
                ProviderError::Transport(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_become_upstream_with_body() {
        let err: ProviderError = HttpError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: r#"{"message":"Unauthorized"}"#.into(),
            request_id: "-".into(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            r#"API error: 401 Unauthorized - {"message":"Unauthorized"}"#
        );
        assert!(matches!(err, ProviderError::Upstream { status, .. } if status == StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn network_errors_become_transport() {
        let err: ProviderError = HttpError::Network("connection refused".into()).into();
        assert!(matches!(err, ProviderError::Transport(ref m) if m.contains("connection refused")));
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = ProviderError::MissingCredential {
            var: "SERPER_API_KEY",
        };
        assert_eq!(err.to_string(), "SERPER_API_KEY environment variable is not set");
    }
}
