//! Submit module - contact, newsletter and comment form handling
//!
//! Forms have no backend of their own. A [`FormController`] validates each
//! [`Submission`], hands it to the configured [`Submitter`] and turns the
//! outcome into a [`Notification`] for the page toast.

mod error;
mod form;
mod model;
mod transport;

pub use error::{SubmitError, SubmitResult, ValidationError, ValidationErrors};
pub use form::{FormController, Notification};
pub use model::{
    is_valid_email, CommentDraft, ContactMessage, FormKind, NewsletterSignup, Submission,
};
pub use transport::{
    from_config, OutboxSubmitter, Receipt, SimulatedSubmitter, Submitter, MAX_RECORD_BYTES,
};
