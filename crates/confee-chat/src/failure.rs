//! Classification of failed turns into user-facing categories.
//!
//! Every transport error lands in exactly one [`Failure`]. The `Display`
//! text of each variant is what gets appended to the history in place of an
//! assistant reply, so it has to tell the user whether retrying right away
//! is worth it.

use confee_api::Error as ApiError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status the endpoint uses for transient unavailability
pub const STATUS_SERVICE_UNAVAILABLE: u16 = 503;

/// Status the endpoint uses when the server-side session has expired
pub const STATUS_SESSION_EXPIRED: u16 = 408;

/// A failed turn, as the user sees it
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Failure {
    /// Endpoint unreachable
    #[error("サーバーに接続できませんでした。ネットワーク接続を確認して、もう一度お試しください。")]
    Connectivity,

    /// Client-side timeout abort
    #[error("応答がタイムアウトしました。しばらく待ってからもう一度お試しください。")]
    Timeout,

    /// 503
    #[error("サービスが一時的に利用できません。しばらく待ってからもう一度お試しください。")]
    ServiceUnavailable,

    /// 408: the next turn must use a new session
    #[error("セッションがタイムアウトしました。新しいセッションで再接続します。もう一度お試しください。")]
    SessionExpired,

    /// Any other non-2xx status
    #[error("エラーが発生しました: {detail}\n\nもう一度お試しください。")]
    RequestFailed { status: u16, detail: String },

    /// Anything that fits none of the above
    #[error("予期しないエラーが発生しました: {detail}\n\nもう一度お試しください。")]
    Unexpected { detail: String },
}

impl Failure {
    /// Classify a transport error
    pub fn classify(err: &ApiError) -> Self {
        match err {
            ApiError::Connect(_) => Failure::Connectivity,
            ApiError::Timeout(_) => Failure::Timeout,
            ApiError::Status { status, detail } => Self::from_status(*status, detail),
            other => Failure::Unexpected {
                detail: other.to_string(),
            },
        }
    }

    /// Map a non-2xx status onto a category
    pub fn from_status(status: u16, detail: &str) -> Self {
        match status {
            STATUS_SERVICE_UNAVAILABLE => Failure::ServiceUnavailable,
            STATUS_SESSION_EXPIRED => Failure::SessionExpired,
            _ => Failure::RequestFailed {
                status,
                detail: detail.to_string(),
            },
        }
    }

    /// Whether the live session id must be thrown away
    pub fn invalidates_session(&self) -> bool {
        matches!(self, Failure::SessionExpired)
    }

    /// Short stable name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Connectivity => "connectivity",
            Failure::Timeout => "timeout",
            Failure::ServiceUnavailable => "service_unavailable",
            Failure::SessionExpired => "session_expired",
            Failure::RequestFailed { .. } => "request_failed",
            Failure::Unexpected { .. } => "unexpected",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_connect_error_is_connectivity() {
        let f = Failure::classify(&ApiError::Connect("connection refused".into()));
        assert_eq!(f, Failure::Connectivity);
        assert!(f.to_string().contains("サーバーに接続できませんでした"));
    }

    #[test]
    fn test_timeout_error() {
        let f = Failure::classify(&ApiError::Timeout(Duration::from_secs(30)));
        assert_eq!(f, Failure::Timeout);
        assert!(f.to_string().contains("応答がタイムアウトしました"));
    }

    #[test]
    fn test_503_is_service_unavailable() {
        let f = Failure::classify(&ApiError::from_status(503, r#"{"error": "down"}"#));
        assert_eq!(f, Failure::ServiceUnavailable);
        assert!(f.to_string().contains("サービスが一時的に利用できません"));
        assert!(!f.invalidates_session());
    }

    #[test]
    fn test_408_is_session_expired() {
        let f = Failure::classify(&ApiError::from_status(408, ""));
        assert_eq!(f, Failure::SessionExpired);
        assert!(f.to_string().contains("セッションがタイムアウトしました"));
        assert!(f.invalidates_session());
    }

    #[test]
    fn test_other_status_carries_server_detail() {
        let f = Failure::classify(&ApiError::from_status(400, r#"{"error": "message is required"}"#));
        assert_eq!(
            f.to_string(),
            "エラーが発生しました: message is required\n\nもう一度お試しください。"
        );
    }

    #[test]
    fn test_other_status_without_body_uses_status_text() {
        let f = Failure::classify(&ApiError::from_status(500, "not json"));
        assert!(f.to_string().starts_with("エラーが発生しました: HTTP 500"));
    }

    #[test]
    fn test_decode_error_is_unexpected() {
        let f = Failure::classify(&ApiError::Decode("missing field `response`".into()));
        assert!(matches!(f, Failure::Unexpected { .. }));
        assert!(f.to_string().contains("予期しないエラーが発生しました"));
        assert!(f.to_string().contains("missing field"));
    }

    #[test]
    fn test_only_session_expiry_invalidates_session() {
        let all = [
            Failure::Connectivity,
            Failure::Timeout,
            Failure::ServiceUnavailable,
            Failure::RequestFailed {
                status: 500,
                detail: "x".into(),
            },
            Failure::Unexpected { detail: "x".into() },
        ];
        assert!(all.iter().all(|f| !f.invalidates_session()));
    }

    #[test]
    fn test_every_message_asks_to_retry() {
        let all = [
            Failure::Connectivity,
            Failure::Timeout,
            Failure::ServiceUnavailable,
            Failure::SessionExpired,
            Failure::RequestFailed {
                status: 500,
                detail: "x".into(),
            },
            Failure::Unexpected { detail: "x".into() },
        ];
        for f in all {
            assert!(f.to_string().contains("もう一度お試しください"), "{}", f.kind());
        }
    }
}
