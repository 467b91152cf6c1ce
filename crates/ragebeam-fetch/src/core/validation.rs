use reqwest::StatusCode;

/// Returns `true` for any 2xx status.
pub fn is_success(status: StatusCode) -> bool {
    status.is_success()
}

/// Returns `true` if a failed page request is worth another attempt.
///
/// Server errors and `429 Too Many Requests` are treated as transient;
/// every other non-success status is permanent.
pub fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(is_success(StatusCode::OK));
        assert!(is_success(StatusCode::NO_CONTENT));
        assert!(!is_success(StatusCode::FOUND));
        assert!(!is_success(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_is_retryable() {
        assert!(is_retryable(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));

        assert!(!is_retryable(StatusCode::UNAUTHORIZED)); // session rejected
        assert!(!is_retryable(StatusCode::FORBIDDEN));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
    }
}
