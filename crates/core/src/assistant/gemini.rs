//! reqwest transport for a Gemini-style `generateContent` endpoint.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use super::{AssistantError, AssistantTransport, ChatTurn};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub struct GeminiTransport {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: api_key.into(),
        }
    }

    /// Point at a different base URL (self-hosted proxy, test server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }
}

impl AssistantTransport for GeminiTransport {
    fn send<'a>(
        &'a self,
        system_instruction: &'a str,
        history: &'a [ChatTurn],
        message: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AssistantError>> + Send + 'a>> {
        Box::pin(async move {
            let mut contents: Vec<Content> = history
                .iter()
                .map(|turn| Content {
                    role: turn.role.label(),
                    parts: vec![Part { text: &turn.text }],
                })
                .collect();
            contents.push(Content {
                role: "user",
                parts: vec![Part { text: message }],
            });

            let request = GenerateRequest {
                system_instruction: SystemInstruction {
                    parts: vec![Part {
                        text: system_instruction,
                    }],
                },
                contents,
            };

            let response = self
                .client
                .post(self.url())
                .json(&request)
                .send()
                .await?
                .error_for_status()?;

            let reply: GenerateResponse = response.json().await?;
            reply
                .first_text()
                .ok_or_else(|| AssistantError::MalformedReply("reply carried no text".to_owned()))
        })
    }
}

// ---- Wire format ----

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: SystemInstruction<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct SystemInstruction<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

impl GenerateResponse {
    fn first_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content
            .parts?
            .into_iter()
            .next()?
            .text
    }
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Option<Vec<CandidatePart>>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
