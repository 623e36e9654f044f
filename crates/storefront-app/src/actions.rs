//! Action handlers: UpdateAction dispatch and background task spawning

use storefront_client::OrderSubmitter;
use storefront_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task.
///
/// The task's outcome comes back to the loop as a [`Message`] on `msg_tx`.
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, submitter: &S)
where
    S: OrderSubmitter + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitOrder {
            submission_id,
            payload,
        } => {
            let submitter = submitter.clone();
            tokio::spawn(async move {
                debug!(submission_id, destination = %submitter.destination(), "Submitting order");

                let message = match submitter.submit(&payload).await {
                    Ok(receipt) => Message::OrderSubmitted {
                        submission_id,
                        receipt,
                    },
                    Err(error) => Message::OrderSubmissionFailed {
                        submission_id,
                        error,
                    },
                };

                if msg_tx.send(message).await.is_err() {
                    warn!(submission_id, "Message channel closed before order result arrived");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_client::test_utils::{sample_payload, RecordingSubmitter};
    use storefront_client::SubmitError;

    #[tokio::test]
    async fn test_submit_order_reports_success() {
        let (tx, mut rx) = mpsc::channel(4);
        let submitter = RecordingSubmitter::succeeding();

        handle_action(
            UpdateAction::SubmitOrder {
                submission_id: 7,
                payload: sample_payload(),
            },
            tx,
            &submitter,
        );

        match rx.recv().await {
            Some(Message::OrderSubmitted { submission_id, .. }) => assert_eq!(submission_id, 7),
            other => panic!("expected OrderSubmitted, got {other:?}"),
        }
        assert_eq!(submitter.calls(), vec![sample_payload()]);
    }

    #[tokio::test]
    async fn test_submit_order_reports_failure() {
        let (tx, mut rx) = mpsc::channel(4);
        let submitter = RecordingSubmitter::failing(SubmitError::network("refused"));

        handle_action(
            UpdateAction::SubmitOrder {
                submission_id: 1,
                payload: sample_payload(),
            },
            tx,
            &submitter,
        );

        match rx.recv().await {
            Some(Message::OrderSubmissionFailed { error, .. }) => {
                assert_eq!(error, SubmitError::network("refused"))
            }
            other => panic!("expected OrderSubmissionFailed, got {other:?}"),
        }
    }
}
