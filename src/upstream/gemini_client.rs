//! Gemini-backed transcript cleaning.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::TextCleaner;
use crate::chunkers::count_words;
use crate::types::CleanedText;

/// Allowed relative change in word count before a warning is logged.
pub const WORD_COUNT_TOLERANCE: f64 = 0.15;

const CLEANING_TEMPERATURE: f32 = 0.3;

const CONNECTION_PROMPT: &str = "Responde solo con \"OK\"";

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiCleaner {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiCleaner {
    /// Create a new cleaner.
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn generate(&self, prompt: String) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: CLEANING_TEMPERATURE,
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(anyhow!("Gemini returned {}: {}", status, text));
        }

        let body: GenerateContentResponse = response.json().await?;
        extract_text(body).ok_or_else(|| anyhow!("Gemini returned no candidates"))
    }
}

#[async_trait]
impl TextCleaner for GeminiCleaner {
    async fn clean_text(&self, text: &str) -> Result<CleanedText> {
        let started = Instant::now();
        let original_word_count = count_words(text);

        let cleaned_text = self.generate(cleaning_prompt(text)).await?;
        let cleaned_word_count = count_words(&cleaned_text);
        let processing_time_ms = started.elapsed().as_millis() as u64;

        if let Some(ratio) = word_count_ratio(original_word_count, cleaned_word_count) {
            if !within_tolerance(ratio) {
                warn!(
                    original_word_count,
                    cleaned_word_count,
                    change_pct = ((ratio - 1.0) * 100.0).round(),
                    "Word count changed significantly during cleaning"
                );
            }
        }

        info!(
            original_word_count,
            cleaned_word_count,
            processing_time_ms,
            "Cleaned text"
        );

        Ok(CleanedText {
            cleaned_text,
            original_word_count,
            cleaned_word_count,
            processing_time_ms,
        })
    }

    async fn check_connection(&self) -> bool {
        match self.generate(CONNECTION_PROMPT.to_string()).await {
            Ok(reply) => reply.to_lowercase().contains("ok"),
            Err(e) => {
                warn!(error = %e, "Gemini connection check failed");
                false
            }
        }
    }
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();
    (!text.trim().is_empty()).then_some(text)
}

/// Ratio of cleaned to original word count; `None` when the original is empty.
pub fn word_count_ratio(original: usize, cleaned: usize) -> Option<f64> {
    (original > 0).then(|| cleaned as f64 / original as f64)
}

pub fn within_tolerance(ratio: f64) -> bool {
    (1.0 - WORD_COUNT_TOLERANCE..=1.0 + WORD_COUNT_TOLERANCE).contains(&ratio)
}

fn cleaning_prompt(text: &str) -> String {
    format!(
        "Eres un asistente que mejora transcripciones de video en español.\n\n\
         Mejora el texto agregando puntuación correcta, mayúsculas donde \
         corresponda, saltos de párrafo y corrigiendo errores ortográficos evidentes.\n\n\
         Reglas:\n\
         1. No resumas ni acortes el texto.\n\
         2. No agregues información.\n\
         3. No cambies el significado.\n\
         4. Conserva aproximadamente la misma cantidad de palabras (±10%).\n\
         5. Devuelve solo el texto mejorado.\n\n\
         Texto:\n{text}"
    )
}
