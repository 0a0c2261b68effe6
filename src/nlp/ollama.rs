//! Ollama client for prompt-based name extraction and synthetic generation.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Settings;

/// Instructional template filled with a segment's cleaned text.
pub const NAME_PROMPT: &str = r#"
    **IDENTITY and PURPOSE**
    You are a specialist in data engineering with advanced expertise in human names, including a degree in onomastics. Your task is to extract all human names from the following text.

    **OUTPUT INSTRUCTIONS**
    - Ensure to extract and print each human name on a separate line.
    - Include all names; do not stop after the first.
    - Return **only** the human names. Do not include any additional text, explanations, or formatting tags (e.g., `</span></text><br/>`).
    - If no human names are found, return absolutely nothing: no text, no spaces, no comments.
    - Ensure the output is clean and contains only human names.
    - Do not provide any explanations.

    **EXAMPLES**
    John Smith
    Emma Williams
    Liam Brown

    **INPUT**
    TEXT: {input_text}
"#;

/// Sampling options forwarded verbatim to `/api/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingOptions {
    pub num_ctx: u32,
    pub num_predict: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub repeat_penalty: f32,
    pub seed: u64,
    pub stop: Vec<String>,
}

impl SamplingOptions {
    /// Conservative profile for name extraction: low temperature, tight
    /// nucleus, heavy repeat penalty.
    pub fn name_extraction() -> Self {
        Self {
            num_ctx: 2048,
            num_predict: 512,
            temperature: 0.2,
            top_k: 5,
            top_p: 0.1,
            repeat_penalty: 2.0,
            seed: 17,
            stop: vec!["<|end_of_turn|>".to_string()],
        }
    }

    /// Looser profile for synthetic passage generation, stopping at the
    /// schema's closing `<end>` tag.
    pub fn synthetic_data() -> Self {
        Self {
            num_ctx: 2048,
            num_predict: 1000,
            temperature: 0.6,
            top_k: 100,
            top_p: 0.8,
            repeat_penalty: 1.1,
            seed: 17,
            stop: vec!["<end>".to_string()],
        }
    }
}

/// Thin HTTP wrapper around an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    options: SamplingOptions,
}

impl OllamaClient {
    pub fn new(settings: &Settings, options: SamplingOptions) -> Result<Self> {
        let client = Client::builder()
            .user_agent("onoma/0.1")
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.ollama_url.trim_end_matches('/').to_string(),
            model: settings.ollama_model.clone(),
            options,
        })
    }

    /// Run one non-streaming generation and return the trimmed response.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            keep_alive: "1h",
            options: &self.options,
        };
        let url = format!("{}/api/generate", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("request to {url}"))?
            .error_for_status()?;
        let payload: GenerateResponse = resp.json().await.context("decoding ollama response")?;
        debug!(model = %self.model, chars = payload.response.len(), "ollama generation done");
        Ok(payload.response.trim().to_string())
    }

    /// Fill the name-extraction template with a segment's cleaned text and
    /// return the model's free-form answer. The answer is not parsed or
    /// validated here; the prompt asks for one name per line.
    pub async fn extract_names(&self, input_text: &str) -> Result<String> {
        let prompt = NAME_PROMPT.replace("{input_text}", input_text);
        self.generate(&prompt).await
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    keep_alive: &'a str,
    options: &'a SamplingOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}
