//! In-process mock of the exam API.
//!
//! A `tiny_http` server on a random local port answers from a fixed route
//! table and records every request it sees, in arrival order.

#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};

use provas_client::ApiClient;
use provas_config::ApiConfig;
use provas_core::alert::{AlertKind, AlertMessage, Notify};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub method: String,
    pub url: String,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct Route {
    method: &'static str,
    url: String,
    status: u16,
    body: String,
}

impl Route {
    pub fn get(url: &str, status: u16, body: &str) -> Self {
        Self {
            method: "GET",
            url: url.to_string(),
            status,
            body: body.to_string(),
        }
    }

    pub fn post(url: &str, status: u16, body: &str) -> Self {
        Self {
            method: "POST",
            url: url.to_string(),
            status,
            body: body.to_string(),
        }
    }
}

pub struct MockApi {
    pub base_url: String,
    log: Arc<Mutex<Vec<Recorded>>>,
}

impl MockApi {
    pub fn start(routes: Vec<Route>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock api");
        let port = server
            .server_addr()
            .to_ip()
            .expect("mock api listens on ip")
            .port();
        let log = Arc::new(Mutex::new(Vec::new()));
        let writer = Arc::clone(&log);

        std::thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let method = request.method().to_string();
                let url = request.url().to_string();
                let authorization = request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv("Authorization"))
                    .map(|h| h.value.as_str().to_string());

                let (status, payload) = routes
                    .iter()
                    .find(|r| r.method == method && r.url == url)
                    .map_or((404, String::from("not found")), |r| {
                        (r.status, r.body.clone())
                    });

                writer.lock().unwrap().push(Recorded {
                    method,
                    url,
                    authorization,
                    body,
                });

                let response = tiny_http::Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(
                        tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                            .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/"),
            log,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().unwrap().clone()
    }

    pub fn request_log(&self) -> Arc<Mutex<Vec<Recorded>>> {
        Arc::clone(&self.log)
    }

    pub fn client(&self) -> ApiClient {
        client_for(&self.base_url).with_token("test-token")
    }
}

pub fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: Some(5),
    })
    .expect("client builds")
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Notifier that keeps every message, not just the latest.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<AlertMessage>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<AlertMessage> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn notify(&self, kind: AlertKind, text: &str) {
        self.messages.lock().unwrap().push(AlertMessage {
            kind,
            text: text.to_string(),
        });
    }
}

pub const CATEGORIES: &str = r#"{"categories": [
    {"id": 1, "name": "P1"},
    {"id": 2, "name": "P2"},
    {"id": 3, "name": "P3"}
]}"#;

pub const BY_TEACHER: &str = r#"{"tests": [
    {
        "id": 1,
        "discipline": {"id": 1, "name": "HTML e CSS"},
        "teacher": {"id": 1, "name": "Diego Pinho"},
        "tests": [
            {"id": 11, "name": "Globo.com", "pdfUrl": "https://files/11.pdf",
             "category": {"id": 1, "name": "P1"}, "_count": {"View": 3}}
        ]
    },
    {
        "id": 2,
        "discipline": {"id": 2, "name": "React"},
        "teacher": {"id": 2, "name": "Bruna Hamori"},
        "tests": []
    },
    {
        "id": 3,
        "discipline": {"id": 3, "name": "JavaScript"},
        "teacher": {"id": 9, "name": "Diego Pinho"},
        "tests": [
            {"id": 12, "name": "Trivia", "pdfUrl": "https://files/12.pdf",
             "category": {"id": 2, "name": "P2"}, "_count": {"View": 0}}
        ]
    }
]}"#;

pub const BY_DISCIPLINE: &str = r#"{"tests": [
    {
        "id": 1,
        "number": 1,
        "disciplines": [
            {
                "id": 1,
                "name": "HTML e CSS",
                "teacherDisciplines": [
                    {
                        "id": 1,
                        "teacher": {"id": 1, "name": "Diego Pinho"},
                        "tests": [
                            {"id": 11, "name": "Globo.com", "pdfUrl": "https://files/11.pdf",
                             "category": {"id": 1, "name": "P1"}, "_count": {"View": 3}}
                        ]
                    }
                ]
            }
        ]
    },
    {"id": 2, "number": 2, "disciplines": []}
]}"#;

pub const DISCIPLINES: &str = r#"[
    {
        "id": 1,
        "name": "HTML e CSS",
        "termId": 1,
        "teacherDisciplines": [
            {"id": 1, "teacher": {"id": 1, "name": "Diego Pinho"}},
            {"id": 4, "teacher": {"id": 3, "name": "Carla"}}
        ]
    },
    {"id": 2, "name": "React", "termId": 2, "teacherDisciplines": []}
]"#;
