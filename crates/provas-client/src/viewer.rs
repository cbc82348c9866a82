//! Host for the per-row view-count state machine.
//!
//! [`ExamViewer::open_exam`] performs the two network calls of an "open
//! exam" action and feeds their outcomes to
//! [`provas_core::views::transition`]. The link is opened only after the
//! increment and the refetch have both succeeded.

use provas_core::alert::{AlertKind, Notify};
use provas_core::entities::Exam;
use provas_core::views::{ViewCounter, ViewEvent};

use crate::{ApiClient, ClientError};

/// Opens an exam's PDF link in a new viewing context.
pub trait LinkOpener: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ClientError::Open`] if the link cannot be opened.
    fn open(&self, url: &str) -> Result<(), ClientError>;
}

pub struct ExamViewer<'a> {
    client: &'a ApiClient,
    notifier: &'a dyn Notify,
    opener: &'a dyn LinkOpener,
}

impl<'a> ExamViewer<'a> {
    #[must_use]
    pub fn new(client: &'a ApiClient, notifier: &'a dyn Notify, opener: &'a dyn LinkOpener) -> Self {
        Self {
            client,
            notifier,
            opener,
        }
    }

    /// Run one open-exam cycle for a row.
    ///
    /// On success `row` holds the server's count and the link has been
    /// opened once. On failure `row.count` is unchanged, the user has been
    /// notified once, and the link is not opened.
    ///
    /// # Errors
    ///
    /// Returns the failing call's [`ClientError`].
    pub async fn open_exam(&self, row: &mut ViewCounter, exam: &Exam) -> Result<(), ClientError> {
        *row = row.apply(ViewEvent::Open);

        if let Err(error) = self.increment_and_refetch(row, exam.id).await {
            tracing::warn!(exam_id = exam.id, %error, "view count update failed");
            *row = row.apply(ViewEvent::Failed);
            self.notifier.notify(AlertKind::Error, &error.user_message());
            *row = row.apply(ViewEvent::Dismiss);
            return Err(error);
        }

        if let Err(error) = self.opener.open(&exam.pdf_url) {
            self.notifier.notify(AlertKind::Error, &error.user_message());
            return Err(error);
        }
        Ok(())
    }

    async fn increment_and_refetch(
        &self,
        row: &mut ViewCounter,
        exam_id: u64,
    ) -> Result<(), ClientError> {
        self.client.increase_views(exam_id).await?;
        *row = row.apply(ViewEvent::Incremented);
        let views = self.client.views(exam_id).await?;
        *row = row.apply(ViewEvent::Refetched { views });
        Ok(())
    }
}
