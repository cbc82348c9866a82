use provas_client::ApiClient;
use provas_client::viewer::{ExamViewer, LinkOpener};
use provas_core::alert::{AlertBus, AlertKind, Notify};
use provas_core::index::find_exam;
use provas_core::views::ViewCounter;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::opener::{BrowserOpener, PrintOnlyOpener};
use crate::output::{RenderText, output};

#[derive(Debug, Serialize)]
struct OpenResponse {
    exam_id: u64,
    name: String,
    pdf_url: String,
    views: u64,
    opened: bool,
}

impl RenderText for OpenResponse {
    fn render_text(&self) -> String {
        format!("{} ({} views)\n{}", self.name, self.views, self.pdf_url)
    }
}

pub async fn handle(args: &OpenArgs, client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let notifier = AlertBus::global();
    let assignments = match client.tests_by_teacher(None).await {
        Ok(assignments) => assignments,
        Err(error) => {
            notifier.notify(AlertKind::Error, &error.user_message());
            return Err(error.into());
        }
    };
    let exam = find_exam(&assignments, args.exam_id)?.clone();

    let opener: &dyn LinkOpener = if args.print_only {
        &PrintOnlyOpener
    } else {
        &BrowserOpener
    };

    let mut row = ViewCounter::seed(&exam);
    ExamViewer::new(client, notifier, opener)
        .open_exam(&mut row, &exam)
        .await?;

    output(
        &OpenResponse {
            exam_id: exam.id,
            name: exam.name,
            pdf_url: exam.pdf_url,
            views: row.count,
            opened: !args.print_only,
        },
        flags.format,
    )
}
