use color_eyre::eyre::Result;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
    core::{completion::CompletionHandler, raw_msg::RawMsg},
    domain::form::Submission,
};

/// Default completion handler: logs the record and posts the
/// `"<Add|Edit> <json>"` notification back into the event loop.
#[derive(Debug, Clone)]
pub struct NotifyingHandler {
    raw_tx: UnboundedSender<RawMsg>,
}

impl NotifyingHandler {
    pub fn new(raw_tx: UnboundedSender<RawMsg>) -> Self {
        Self { raw_tx }
    }
}

impl CompletionHandler for NotifyingHandler {
    fn complete(&self, submission: &Submission) -> Result<()> {
        match submission.cost_cents {
            Some(cents) => log::info!("Cost: {cents}"),
            None => log::info!("Cost: none"),
        }
        log::info!("{}", serde_json::to_string_pretty(&submission.values)?);

        let notification = submission.notification();
        if self
            .raw_tx
            .send(RawMsg::SystemMessage(notification))
            .is_err()
        {
            log::warn!("Notification dropped: event loop is gone");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::domain::form::{FormKind, FormValues};

    #[test]
    fn test_posts_notification() -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handler = NotifyingHandler::new(tx);
        let values = FormValues {
            cost: Some("12.50".into()),
            ..FormValues::example(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default())
        };

        handler.complete(&Submission::new(FormKind::Edit, values))?;

        assert_eq!(
            rx.try_recv()?,
            RawMsg::SystemMessage(
                r#"Edit {"rack":"Garage","cost":"12.50","country":"New Zealand","consume":"2024-06-01"}"#
                    .to_owned()
            )
        );
        Ok(())
    }

    #[test]
    fn test_closed_loop_is_not_an_error() -> Result<()> {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let handler = NotifyingHandler::new(tx);
        let values = FormValues::example(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default());
        handler.complete(&Submission::new(FormKind::Add, values))
    }
}
