use provas_client::ApiClient;
use provas_client::pages::{load_form_options, register_exam};
use provas_core::alert::AlertBus;
use provas_core::form::NewExam;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AddArgs, TeachersArgs};
use crate::output::{RenderText, output};

#[derive(Debug, Serialize)]
struct AddResponse {
    created: bool,
    exam: NewExam,
}

impl RenderText for AddResponse {
    fn render_text(&self) -> String {
        format!(
            "exam registered: {} ({}, {}, {})",
            self.exam.name, self.exam.category, self.exam.discipline, self.exam.teacher
        )
    }
}

pub async fn handle(args: AddArgs, client: &ApiClient, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = NewExam {
        name: args.name,
        pdf_url: args.pdf_url,
        category: args.category,
        discipline: args.discipline,
        teacher: args.teacher,
    };
    register_exam(client, &form, AlertBus::global()).await?;
    output(
        &AddResponse {
            created: true,
            exam: form,
        },
        flags.format,
    )
}

pub async fn teachers(
    args: &TeachersArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let options = load_form_options(client, Some(&args.discipline), AlertBus::global()).await?;
    output(&options, flags.format)
}
