//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `campus_portal::adapters::mock` and adds
//! builders for sheet payloads.

pub use campus_portal::adapters::mock::{MockHttpClient, MockResponse, StaticDataSource};
pub use campus_portal::traits::{Headers, HttpClient, HttpError, Response};

use bytes::Bytes;
use serde_json::{json, Value};

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Serve `body` as JSON for `url`.
    pub fn with_json_response(self, url: &str, status: u16, body: &Value) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(body.to_string()))),
        );
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Schedule rows with Portuguese headers, as the sheet publishes them.
pub fn schedule_sheet_json() -> Value {
    json!([
        {
            "curso": "Direito",
            "turno": "Noturno",
            "periodo": 1,
            "dia": "Segunda",
            "disciplina": "Introdução ao Direito",
            "professor": "Ana Souza",
            "horario": "19:00 - 22:30",
            "sala": "B12"
        },
        {
            "curso": "Direito",
            "turno": "Noturno",
            "periodo": "2",
            "dia": "Quarta",
            "disciplina": "Direito Civil",
            "professor": "",
            "horario": "19:00 - 22:30",
            "sala": "B14"
        }
    ])
}

/// Events as a header-first `values` table.
pub fn events_sheet_json() -> Value {
    json!({
        "values": [
            ["titulo", "descricao", "data", "horario", "local"],
            ["Semana Acadêmica", "Palestras e oficinas", "10/03", "19h", "Auditório"],
            ["Feira", "", "22/04"]
        ]
    })
}

pub fn faq_sheet_json() -> Value {
    json!([
        {
            "categoria": "Secretaria",
            "pergunta": "Como pedir declaração?",
            "resposta": "Veja www.example.edu/secretaria."
        }
    ])
}
