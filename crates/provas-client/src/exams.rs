//! Exam endpoints: grouped listings, categories, disciplines, registration,
//! and view counters.

use provas_core::entities::{Category, Discipline, TeacherAssignment, TermView};
use provas_core::form::NewExam;
use provas_core::lenient;
use serde::Deserialize;

use crate::{
    ApiClient,
    error::ClientError,
    http::{check_response, decode_json},
};

#[derive(Deserialize)]
struct TestsResponse<T: serde::de::DeserializeOwned> {
    #[serde(deserialize_with = "lenient::records")]
    tests: Vec<T>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(deserialize_with = "lenient::records")]
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct ViewsResponse {
    views: u64,
}

/// `/tests?groupBy=<group>`, with `&search=` only for a non-empty query.
fn grouped_tests_path(group: &str, search: Option<&str>) -> String {
    match search.filter(|q| !q.is_empty()) {
        Some(query) => format!(
            "/tests?groupBy={group}&search={}",
            urlencoding::encode(query)
        ),
        None => format!("/tests?groupBy={group}"),
    }
}

impl ApiClient {
    /// Exams grouped term → discipline → teacher assignment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn tests_by_discipline(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<TermView>, ClientError> {
        let path = grouped_tests_path("disciplines", search);
        let data: TestsResponse<TermView> = decode_json(self.get(&path)?.send().await?).await?;
        Ok(data.tests)
    }

    /// Exams as a flat list of teacher assignments.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn tests_by_teacher(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<TeacherAssignment>, ClientError> {
        let path = grouped_tests_path("teachers", search);
        let data: TestsResponse<TeacherAssignment> =
            decode_json(self.get(&path)?.send().await?).await?;
        Ok(data.tests)
    }

    /// The category taxonomy, in server order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        let data: CategoriesResponse = decode_json(self.get("/categories")?.send().await?).await?;
        Ok(data.categories)
    }

    /// All disciplines with their teacher assignments (a bare JSON array).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn disciplines(&self) -> Result<Vec<Discipline>, ClientError> {
        let values: Vec<serde_json::Value> =
            decode_json(self.get("/disciplines")?.send().await?).await?;
        Ok(lenient::decode_records(values))
    }

    /// Register a new exam. The form is validated before anything is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for an incomplete form, otherwise
    /// [`ClientError`] if the request fails or the API rejects it.
    pub async fn create_exam(&self, exam: &NewExam) -> Result<(), ClientError> {
        exam.validate()?;
        check_response(self.post("/tests")?.json(exam).send().await?).await?;
        Ok(())
    }

    /// Record one view of an exam.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the API rejects it.
    pub async fn increase_views(&self, exam_id: u64) -> Result<(), ClientError> {
        let path = format!("/tests/views/{exam_id}");
        check_response(self.post(&path)?.body("").send().await?).await?;
        Ok(())
    }

    /// Current view count of an exam.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the API returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn views(&self, exam_id: u64) -> Result<u64, ClientError> {
        let path = format!("/tests/views/{exam_id}");
        let data: ViewsResponse = decode_json(self.get(&path)?.send().await?).await?;
        Ok(data.views)
    }
}
