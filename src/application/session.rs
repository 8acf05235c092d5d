use crate::domain::flow::{FlowState, Step};
use crate::domain::method::PaymentMethod;
use crate::domain::ports::ProofSenderBox;
use crate::domain::proof::{ProofSubmission, SubmissionDraft};
use crate::error::{ProofError, Result};
use tracing::{debug, error};

/// One user's pass through the confirmation flow.
///
/// Owns the `FlowState` and the proof sender. The views never touch the flow
/// directly; they call the transition methods here, which keeps every state
/// change (and its log line) in one place.
pub struct PaymentSession {
    flow: FlowState,
    sender: ProofSenderBox,
}

impl PaymentSession {
    pub fn new(sender: ProofSenderBox) -> Self {
        Self {
            flow: FlowState::new(),
            sender,
        }
    }

    pub fn step(&self) -> Step {
        self.flow.step()
    }

    pub fn selected_method(&self) -> Option<PaymentMethod> {
        self.flow.selected_method()
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        debug!(method = %method, "method selected");
        self.flow.select_method(method);
    }

    pub fn confirm_payment(&mut self) {
        debug!("payment confirmed");
        self.flow.confirm_payment();
    }

    pub fn back(&mut self) {
        self.flow.back();
        debug!(step = self.flow.step().ordinal(), "stepped back");
    }

    pub fn reset(&mut self) {
        debug!("flow reset");
        self.flow.reset();
    }

    /// Validates the draft and performs a single delivery attempt.
    ///
    /// A draft without a file never reaches the sender; that is the only
    /// validation the flow applies, everything else is sent as typed. On
    /// success the flow advances to the terminal step; on failure it stays
    /// on the upload step so the user can simply try again.
    pub async fn submit(&mut self, draft: SubmissionDraft) -> Result<()> {
        let file = draft.file.ok_or(ProofError::MissingFile)?;
        let method = self
            .flow
            .selected_method()
            .ok_or(ProofError::NoMethodSelected)?;

        let submission = ProofSubmission {
            file,
            sender_name: draft.sender_name,
            product_name: draft.product_name,
            nominal: draft.nominal,
            method,
        };

        if let Err(e) = self.sender.send(&submission).await {
            error!(error = %e, "proof submission failed");
            return Err(e);
        }

        debug!("proof submission acknowledged");
        self.flow.complete_upload();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ProofSender;
    use crate::domain::proof::ProofFile;
    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingSender {
        calls: Arc<AtomicUsize>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl ProofSender for RecordingSender {
        async fn send(&self, _submission: &ProofSubmission) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.fail_with {
                Some(message) => Err(ProofError::Rejected(message.clone())),
                None => Ok(()),
            }
        }
    }

    fn session_at_upload(fail_with: Option<String>) -> (PaymentSession, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let sender = Box::new(RecordingSender {
            calls: calls.clone(),
            fail_with,
        });
        let mut session = PaymentSession::new(sender);
        session.select_method(PaymentMethod::Dana);
        session.confirm_payment();
        (session, calls)
    }

    fn draft_with_file() -> SubmissionDraft {
        SubmissionDraft {
            file: Some(ProofFile {
                name: "proof.png".to_string(),
                size: 3,
                mime: "image/png".to_string(),
                bytes: vec![1, 2, 3],
            }),
            sender_name: "Alice".to_string(),
            product_name: "Widget".to_string(),
            nominal: "15000".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_without_file_never_calls_sender() {
        let (mut session, calls) = session_at_upload(None);

        let result = session.submit(SubmissionDraft::default()).await;

        assert!(matches!(result, Err(ProofError::MissingFile)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.step(), Step::Upload);
    }

    #[tokio::test]
    async fn test_submit_success_advances_to_done() {
        let (mut session, calls) = session_at_upload(None);

        session.submit(draft_with_file()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.step(), Step::Done);
    }

    #[tokio::test]
    async fn test_submit_failure_stays_on_upload_step() {
        let (mut session, calls) = session_at_upload(Some("boom".to_string()));

        let result = session.submit(draft_with_file()).await;

        assert!(matches!(result, Err(ProofError::Rejected(ref m)) if m == "boom"));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.step(), Step::Upload);
    }
}
