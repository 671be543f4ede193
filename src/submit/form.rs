//! Form controller: submitting state and the toast shown afterwards

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::error::{SubmitError, ValidationErrors};
use super::model::{FormKind, Submission};
use super::transport::Submitter;

/// Toast content returned after a submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub ok: bool,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(kind: FormKind) -> Self {
        let (title, description) = match kind {
            FormKind::Contact => (
                "Message Sent",
                "We've received your message and will get back to you soon.",
            ),
            FormKind::Newsletter => (
                "Subscribed",
                "Thanks for subscribing! Watch your inbox for the latest tech insights and tips.",
            ),
            FormKind::Comment => (
                "Comment Received",
                "Thanks for joining the discussion! Your comment will appear once it has been reviewed.",
            ),
        };
        Self {
            ok: true,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn failure(kind: FormKind) -> Self {
        let title = match kind {
            FormKind::Contact => "Message Not Sent",
            FormKind::Newsletter => "Subscription Failed",
            FormKind::Comment => "Comment Not Posted",
        };
        Self {
            ok: false,
            title: title.to_string(),
            description: "Something went wrong. Please try again later.".to_string(),
        }
    }
}

/// Counts one submission in flight until dropped, so a cancelled submission
/// never leaves the form stuck
struct SubmittingGuard<'a>(&'a AtomicUsize);

impl<'a> SubmittingGuard<'a> {
    fn enter(in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight)
    }
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Drives one form: validates, marks it as submitting while the transport
/// works, then reports the outcome.
///
/// The controller is shared by every client of the form, so the submitting
/// state holds while any submission is still in flight.
pub struct FormController {
    submitter: Arc<dyn Submitter>,
    in_flight: AtomicUsize,
}

impl FormController {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self {
            submitter,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    pub fn transport(&self) -> &'static str {
        self.submitter.name()
    }

    /// Submit the form.
    ///
    /// Invalid submissions are returned as errors without touching the
    /// transport. Transport failures become a failure notification.
    pub async fn submit(&self, submission: Submission) -> Result<Notification, ValidationErrors> {
        submission.validate()?;
        let kind = submission.kind();

        let result = {
            let _guard = SubmittingGuard::enter(&self.in_flight);
            self.submitter.submit(&submission).await
        };

        match result {
            Ok(receipt) => {
                tracing::info!(
                    "Accepted {} submission {} via {}",
                    kind,
                    receipt.id,
                    receipt.transport
                );
                Ok(Notification::success(kind))
            }
            Err(SubmitError::Validation(errors)) => Err(errors),
            Err(e) => {
                tracing::warn!("Failed to deliver {} submission: {}", kind, e);
                Ok(Notification::failure(kind))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::error::SubmitResult;
    use crate::submit::model::{ContactMessage, NewsletterSignup};
    use crate::submit::transport::{OutboxSubmitter, Receipt, SimulatedSubmitter};
    use async_trait::async_trait;
    use std::time::Duration;

    fn contact() -> Submission {
        Submission::Contact(ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Great blog!".to_string(),
        })
    }

    struct FailingSubmitter;

    #[async_trait]
    impl Submitter for FailingSubmitter {
        async fn submit(&self, _submission: &Submission) -> SubmitResult<Receipt> {
            Err(SubmitError::Rejected("offline".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitting_flag_spans_the_delay() {
        let controller = Arc::new(FormController::new(Arc::new(SimulatedSubmitter::new(
            Duration::from_millis(2000),
        ))));
        assert!(!controller.is_submitting());

        let start = tokio::time::Instant::now();
        let task = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit(contact()).await }
        });

        tokio::task::yield_now().await;
        assert!(controller.is_submitting());

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(controller.is_submitting());

        let notification = task.await.unwrap().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert!(!controller.is_submitting());
        assert_eq!(notification, Notification::success(FormKind::Contact));
        assert_eq!(notification.title, "Message Sent");
        assert_eq!(
            notification.description,
            "We've received your message and will get back to you soon."
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_keep_flag_set() {
        let controller = Arc::new(FormController::new(Arc::new(SimulatedSubmitter::new(
            Duration::from_millis(2000),
        ))));
        let spawn_submit = |controller: Arc<FormController>| {
            tokio::spawn(async move { controller.submit(contact()).await })
        };

        let first = spawn_submit(controller.clone());
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1000)).await;

        let second = spawn_submit(controller.clone());
        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1001)).await;

        assert!(first.await.unwrap().unwrap().ok);
        assert!(controller.is_submitting());

        assert!(second.await.unwrap().unwrap().ok);
        assert!(!controller.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_clears_flag() {
        let controller = Arc::new(FormController::new(Arc::new(SimulatedSubmitter::new(
            Duration::from_millis(2000),
        ))));
        let task = tokio::spawn({
            let controller = controller.clone();
            async move { controller.submit(contact()).await }
        });
        tokio::task::yield_now().await;
        assert!(controller.is_submitting());

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!controller.is_submitting());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_always_succeeds() {
        let controller = FormController::new(Arc::new(SimulatedSubmitter::new(
            Duration::from_millis(2000),
        )));
        for _ in 0..3 {
            let notification = controller.submit(contact()).await.unwrap();
            assert!(notification.ok);
        }
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_submission_skips_transport() {
        let controller = FormController::new(Arc::new(FailingSubmitter));
        let errors = controller
            .submit(Submission::Newsletter(NewsletterSignup {
                email: String::new(),
            }))
            .await
            .unwrap_err();
        assert!(errors.contains("email"));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_notification() {
        let controller = FormController::new(Arc::new(FailingSubmitter));
        let notification = controller.submit(contact()).await.unwrap();
        assert_eq!(notification, Notification::failure(FormKind::Contact));
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn test_outbox_controller() {
        let dir = tempfile::tempdir().unwrap();
        let outbox = dir.path().join("submissions.jsonl");
        let controller = FormController::new(Arc::new(OutboxSubmitter::new(&outbox)));
        assert_eq!(controller.transport(), "outbox");

        let notification = controller.submit(contact()).await.unwrap();
        assert!(notification.ok);
        assert_eq!(std::fs::read_to_string(outbox).unwrap().lines().count(), 1);
    }
}
