//! Client for a GLiNER-style NER inference service.
//!
//! Inference stays out of process: the service receives a text, a label
//! set and a confidence threshold, and returns scored entity mentions.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{cli::NerModel, config::Settings};

/// Label set for human-name extraction.
pub const NAME_LABELS: &[&str] = &["first_name"];

/// One scored entity returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: String,
    pub score: f64,
}

/// Thin HTTP wrapper around the inference service's `/predict` endpoint.
#[derive(Debug, Clone)]
pub struct NerClient {
    client: Client,
    base_url: String,
    model: String,
    threshold: f64,
}

impl NerClient {
    pub fn new(settings: &Settings, kind: NerModel) -> Result<Self> {
        let client = Client::builder()
            .user_agent("onoma/0.1")
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            client,
            base_url: settings.ner_url.trim_end_matches('/').to_string(),
            model: kind.model_id(settings),
            threshold: settings.ner_threshold,
        })
    }

    /// Predict name entities in `text`, keeping the service's output order.
    pub async fn predict(&self, text: &str) -> Result<Vec<Entity>> {
        let body = PredictRequest {
            model: &self.model,
            text,
            labels: NAME_LABELS,
            threshold: self.threshold,
        };
        let url = format!("{}/predict", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("request to {url}"))?
            .error_for_status()?;
        let entities: Vec<Entity> = resp.json().await.context("decoding ner response")?;
        debug!(model = %self.model, count = entities.len(), "ner prediction done");
        Ok(entities)
    }
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    model: &'a str,
    text: &'a str,
    labels: &'a [&'a str],
    threshold: f64,
}
