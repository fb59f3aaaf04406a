use std::sync::{Arc, Mutex};

use color_eyre::eyre::{eyre, Result};

use crate::domain::form::Submission;

/// Receives every valid submission. This is the only boundary the form
/// has with the outside world.
pub trait CompletionHandler: Send + Sync {
    fn complete(&self, submission: &Submission) -> Result<()>;
}

/// Handler that keeps submissions in memory, for callers that inspect
/// them after the fact.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.submissions.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CompletionHandler for RecordingHandler {
    fn complete(&self, submission: &Submission) -> Result<()> {
        self.submissions
            .lock()
            .map_err(|e| eyre!("submission log poisoned: {e}"))?
            .push(submission.clone());
        Ok(())
    }
}
