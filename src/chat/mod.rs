//! The chat panel: message list, prompt composer and the submit flow.
//!
//! [`ChatPanel`] owns the visible [`MessageStore`] and the [`Composer`] and
//! runs the optimistic submit/reconcile protocol against the injected
//! session and notifier. Rendering lives in `crate::ui`.

mod composer;
mod panel;
mod store;

pub use composer::Composer;
pub use panel::{ChatPanel, PendingSubmission, SubmissionState, SubmitOutcome};
pub use store::MessageStore;
