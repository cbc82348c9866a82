//! Endpoint-level tests against the in-process mock API.

mod support;

use pretty_assertions::assert_eq;
use provas_client::ClientError;
use provas_client::auth::Credentials;
use provas_core::form::NewExam;
use support::{
    BY_DISCIPLINE, BY_TEACHER, CATEGORIES, DISCIPLINES, MockApi, Route, client_for,
    unreachable_base_url,
};

fn credentials() -> Credentials {
    Credentials {
        email: "ana@provas.dev".into(),
        password: "segredo".into(),
    }
}

#[tokio::test]
async fn sign_in_returns_token_without_bearer() {
    let api = MockApi::start(vec![Route::post("/sign-in", 200, r#"{"token": "jwt-123"}"#)]);

    let token = client_for(&api.base_url)
        .sign_in(&credentials())
        .await
        .unwrap();

    assert_eq!(token, "jwt-123");
    let requests = api.requests();
    assert_eq!(requests[0].authorization, None);
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["email"], "ana@provas.dev");
}

#[tokio::test]
async fn sign_up_surfaces_conflict_body() {
    let api = MockApi::start(vec![Route::post("/sign-up", 409, "Email já cadastrado")]);

    let err = client_for(&api.base_url)
        .sign_up(&credentials())
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Email já cadastrado");
}

#[tokio::test]
async fn grouped_listings_send_bearer_and_search() {
    let api = MockApi::start(vec![
        Route::get("/tests?groupBy=disciplines", 200, BY_DISCIPLINE),
        Route::get("/tests?groupBy=teachers&search=Diego", 200, BY_TEACHER),
    ]);
    let client = api.client();

    let terms = client.tests_by_discipline(Some("")).await.unwrap();
    let assignments = client.tests_by_teacher(Some("Diego")).await.unwrap();

    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].disciplines[0].name, "HTML e CSS");
    assert_eq!(assignments.len(), 3);
    assert_eq!(assignments[0].tests[0].view_count(), 3);

    for request in api.requests() {
        assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
    }
}

#[tokio::test]
async fn categories_and_disciplines_decode() {
    let api = MockApi::start(vec![
        Route::get("/categories", 200, CATEGORIES),
        Route::get("/disciplines", 200, DISCIPLINES),
    ]);
    let client = api.client();

    let categories = client.categories().await.unwrap();
    let disciplines = client.disciplines().await.unwrap();

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["P1", "P2", "P3"]);
    assert_eq!(disciplines.len(), 2);
    assert_eq!(disciplines[0].assignments[1].teacher.name, "Carla");
}

#[tokio::test]
async fn create_exam_posts_api_field_names() {
    let api = MockApi::start(vec![Route::post("/tests", 201, "")]);
    let exam = NewExam {
        name: "P1 2022.2".into(),
        pdf_url: "https://files/new.pdf".into(),
        category: "P1".into(),
        discipline: "React".into(),
        teacher: "Bruna Hamori".into(),
    };

    api.client().create_exam(&exam).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&api.requests()[0].body).unwrap();
    assert_eq!(body["pdfUrl"], "https://files/new.pdf");
    assert_eq!(body["teacher"], "Bruna Hamori");
}

#[tokio::test]
async fn incomplete_exam_is_never_sent() {
    let api = MockApi::start(vec![Route::post("/tests", 201, "")]);

    let err = api.client().create_exam(&NewExam::default()).await.unwrap_err();

    assert!(matches!(err, ClientError::Validation(_)));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn view_counter_endpoints() {
    let api = MockApi::start(vec![
        Route::post("/tests/views/11", 200, ""),
        Route::get("/tests/views/11", 200, r#"{"views": 4}"#),
    ]);
    let client = api.client();

    client.increase_views(11).await.unwrap();
    assert_eq!(client.views(11).await.unwrap(), 4);

    let methods: Vec<(String, String)> = api
        .requests()
        .into_iter()
        .map(|r| (r.method, r.url))
        .collect();
    assert_eq!(
        methods,
        vec![
            ("POST".to_string(), "/tests/views/11".to_string()),
            ("GET".to_string(), "/tests/views/11".to_string()),
        ]
    );
}

#[tokio::test]
async fn missing_token_fails_before_sending() {
    let api = MockApi::start(vec![Route::get("/categories", 200, CATEGORIES)]);

    let err = client_for(&api.base_url).categories().await.unwrap_err();

    assert!(matches!(err, ClientError::NotAuthenticated));
    assert!(api.requests().is_empty());
}

#[tokio::test]
async fn connection_failure_is_transport_error() {
    let client = client_for(&unreachable_base_url()).with_token("t");

    let err = client.categories().await.unwrap_err();

    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.is_transport());
    assert_eq!(err.user_message(), ClientError::GENERIC_MESSAGE);
}

#[tokio::test]
async fn malformed_envelope_is_parse_error() {
    let api = MockApi::start(vec![Route::get("/categories", 200, r#"{"items": []}"#)]);

    let err = api.client().categories().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}
