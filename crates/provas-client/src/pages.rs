//! Page-level flows: load or search a browse view, load the registration
//! form options, and register an exam.
//!
//! Every flow reports its outcome to the injected [`Notify`] sink exactly
//! once, and returns the error as well so callers can decide what to render.

use provas_core::alert::{AlertKind, Notify};
use provas_core::entities::{Category, Discipline, TermView};
use provas_core::form::{NewExam, teachers_for_discipline};
use provas_core::projection::{TeacherView, project_by_discipline, project_by_teacher};
use serde::Serialize;

use crate::{ApiClient, ClientError};

pub const INCOMPLETE_FORM_MESSAGE: &str = "Por favor complete todos os dados";
pub const EXAM_CREATED_MESSAGE: &str = "Prova criada com sucesso";
pub const EXAM_REJECTED_MESSAGE: &str = "Link com estrutura incorreta";

/// Disciplines view: terms in server order plus the category taxonomy.
#[derive(Debug, Clone, Serialize)]
pub struct DisciplinesPage {
    pub terms: Vec<TermView>,
    pub categories: Vec<Category>,
}

/// Instructors view: one entry per distinct teacher name.
#[derive(Debug, Clone, Serialize)]
pub struct InstructorsPage {
    pub teachers: Vec<TeacherView>,
    pub categories: Vec<Category>,
}

/// Option lists for the registration form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormOptions {
    pub categories: Vec<Category>,
    pub disciplines: Vec<Discipline>,
    pub teachers: Vec<String>,
}

/// Fetch the Disciplines view, optionally filtered by `search`.
///
/// # Errors
///
/// Returns the first [`ClientError`] hit; the user has already been notified.
pub async fn load_disciplines_page(
    client: &ApiClient,
    search: Option<&str>,
    notifier: &dyn Notify,
) -> Result<DisciplinesPage, ClientError> {
    let result = async {
        let terms = client.tests_by_discipline(search).await?;
        let categories = client.categories().await?;
        Ok::<_, ClientError>(DisciplinesPage {
            terms: project_by_discipline(terms),
            categories,
        })
    }
    .await;
    report_load(result, search, notifier)
}

/// Fetch the Instructors view, optionally filtered by `search`.
///
/// # Errors
///
/// Returns the first [`ClientError`] hit; the user has already been notified.
pub async fn load_instructors_page(
    client: &ApiClient,
    search: Option<&str>,
    notifier: &dyn Notify,
) -> Result<InstructorsPage, ClientError> {
    let result = async {
        let assignments = client.tests_by_teacher(search).await?;
        let categories = client.categories().await?;
        Ok::<_, ClientError>(InstructorsPage {
            teachers: project_by_teacher(assignments),
            categories,
        })
    }
    .await;
    report_load(result, search, notifier)
}

fn report_load<T>(
    result: Result<T, ClientError>,
    search: Option<&str>,
    notifier: &dyn Notify,
) -> Result<T, ClientError> {
    match result {
        Ok(page) => {
            if let Some(query) = search.filter(|q| !q.is_empty()) {
                notifier.notify(AlertKind::Success, &format!("Pesquisa por {query} completa"));
            }
            Ok(page)
        }
        Err(error) => {
            tracing::warn!(%error, "failed to load exams");
            notifier.notify(AlertKind::Error, &error.user_message());
            Err(error)
        }
    }
}

/// Fetch the registration form options. Teachers are filled in only when a
/// discipline is chosen.
///
/// # Errors
///
/// Returns the first [`ClientError`] hit; the user has already been notified.
pub async fn load_form_options(
    client: &ApiClient,
    discipline: Option<&str>,
    notifier: &dyn Notify,
) -> Result<FormOptions, ClientError> {
    let result = async {
        let categories = client.categories().await?;
        let disciplines = client.disciplines().await?;
        let teachers = discipline
            .map(|name| teachers_for_discipline(&disciplines, name))
            .unwrap_or_default();
        Ok::<_, ClientError>(FormOptions {
            categories,
            disciplines,
            teachers,
        })
    }
    .await;
    report_load(result, None, notifier)
}

/// Validate and submit a new exam.
///
/// # Errors
///
/// Returns [`ClientError::Validation`] for an incomplete form (nothing is
/// sent), or the transport error from the API call.
pub async fn register_exam(
    client: &ApiClient,
    form: &NewExam,
    notifier: &dyn Notify,
) -> Result<(), ClientError> {
    if let Err(error) = form.validate() {
        notifier.notify(AlertKind::Error, INCOMPLETE_FORM_MESSAGE);
        return Err(error.into());
    }
    match client.create_exam(form).await {
        Ok(()) => {
            tracing::debug!(name = %form.name, "exam registered");
            notifier.notify(AlertKind::Success, EXAM_CREATED_MESSAGE);
            Ok(())
        }
        Err(error) => {
            tracing::warn!(%error, "exam registration failed");
            notifier.notify(AlertKind::Error, EXAM_REJECTED_MESSAGE);
            Err(error)
        }
    }
}
