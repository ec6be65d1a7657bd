// src/waitlist/intake.rs
use gloo_net::http::Request;
use serde::Deserialize;

use crate::error::IntakeError;

use super::model::WaitlistSubmission;

/// Third-party form handler that receives waitlist entries.
pub const WAITLIST_ENDPOINT: &str = "https://formspree.io/f/xeejdalw";

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const CONNECTION_FAILURE: &str =
    "Failed to submit. Please check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one JSON POST and hands back whatever the server said.
///
/// `Err` means no response arrived at all; any HTTP status is `Ok`.
#[allow(async_fn_in_trait)]
pub trait IntakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<IntakeResponse, IntakeError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl IntakeTransport for GlooTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<IntakeResponse, IntakeError> {
        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(|e| IntakeError::Encode(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| IntakeError::Network(e.to_string()))?;

        // Status alone decides success, so an unreadable body is just empty.
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(IntakeResponse { status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Server answered with a failure status; carries the message to show.
    Rejected(String),
    Unreachable,
}

impl SubmitOutcome {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected(msg) => Some(msg),
            Self::Unreachable => Some(CONNECTION_FAILURE),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

pub fn outcome_from_response(status: u16, body: &str) -> SubmitOutcome {
    if (200..300).contains(&status) {
        return SubmitOutcome::Accepted;
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| GENERIC_FAILURE.to_string());
    SubmitOutcome::Rejected(message)
}

async fn post_submission<T: IntakeTransport>(
    transport: &T,
    submission: &WaitlistSubmission,
) -> Result<IntakeResponse, IntakeError> {
    let body =
        serde_json::to_string(submission).map_err(|e| IntakeError::Encode(e.to_string()))?;
    transport.post_json(WAITLIST_ENDPOINT, body).await
}

/// Posts the submission exactly once. No retries.
pub async fn submit<T: IntakeTransport>(
    transport: &T,
    submission: &WaitlistSubmission,
) -> SubmitOutcome {
    match post_submission(transport, submission).await {
        Ok(resp) => outcome_from_response(resp.status, &resp.body),
        Err(IntakeError::Network(_)) => SubmitOutcome::Unreachable,
        Err(IntakeError::Encode(_)) => SubmitOutcome::Rejected(GENERIC_FAILURE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::waitlist::model::{ClassTag, MembershipPlan};
    use std::cell::RefCell;

    struct FakeTransport {
        reply: Result<IntakeResponse, IntakeError>,
        calls: RefCell<Vec<(String, String)>>,
    }

    impl FakeTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(IntakeResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                reply: Err(IntakeError::Network("TypeError: Failed to fetch".into())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl IntakeTransport for FakeTransport {
        async fn post_json(
            &self,
            url: &str,
            body: String,
        ) -> Result<IntakeResponse, IntakeError> {
            self.calls.borrow_mut().push((url.to_string(), body));
            self.reply.clone()
        }
    }

    fn entry() -> WaitlistSubmission {
        WaitlistSubmission {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
            phone: "555-0100".into(),
            age: 45,
            membership: MembershipPlan::Starter,
            interests: vec![ClassTag::Dance],
        }
    }

    #[tokio::test]
    async fn success_posts_once_to_endpoint() {
        let t = FakeTransport::replying(200, "");
        assert_eq!(submit(&t, &entry()).await, SubmitOutcome::Accepted);

        let calls = t.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, WAITLIST_ENDPOINT);
        let sent: serde_json::Value = serde_json::from_str(&calls[0].1).unwrap();
        assert_eq!(sent["email"], "grace@example.com");
        assert_eq!(sent["age"], 45);
        assert_eq!(sent["membership"], "starter");
        assert_eq!(sent["interests"], serde_json::json!(["dance"]));
    }

    #[tokio::test]
    async fn server_error_message_shown_verbatim() {
        let t = FakeTransport::replying(400, r#"{"error": "Email already registered"}"#);
        let outcome = submit(&t, &entry()).await;
        assert_eq!(outcome.error_message(), Some("Email already registered"));
    }

    #[tokio::test]
    async fn failure_without_error_field_is_generic() {
        let t = FakeTransport::replying(422, r#"{"ok": false}"#);
        assert_eq!(
            submit(&t, &entry()).await,
            SubmitOutcome::Rejected(GENERIC_FAILURE.into())
        );
    }

    #[tokio::test]
    async fn offline_is_unreachable() {
        let t = FakeTransport::offline();
        let outcome = submit(&t, &entry()).await;
        assert_eq!(outcome, SubmitOutcome::Unreachable);
        assert_eq!(outcome.error_message(), Some(CONNECTION_FAILURE));
        assert_eq!(t.calls.borrow().len(), 1);
    }

    #[test]
    fn any_2xx_is_success() {
        assert_eq!(outcome_from_response(204, ""), SubmitOutcome::Accepted);
        assert_eq!(outcome_from_response(299, "garbage"), SubmitOutcome::Accepted);
        assert_ne!(outcome_from_response(300, ""), SubmitOutcome::Accepted);
    }

    // A reply arrived, so an unreadable body is a server failure, not a
    // connectivity one: these get the generic message.
    #[test]
    fn unusable_error_bodies_fall_back() {
        for body in ["", "<html>502</html>", r#"{"error": ""}"#, r#"{"error": {"code": 1}}"#] {
            assert_eq!(
                outcome_from_response(500, body),
                SubmitOutcome::Rejected(GENERIC_FAILURE.into()),
                "{body}"
            );
        }
    }
}
