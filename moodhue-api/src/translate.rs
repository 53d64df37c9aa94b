//! Input translation to the analyzers' language
//!
//! The lexicon analyzers only know English. When enabled, input text is sent
//! to a LibreTranslate-compatible service first. Translation is best-effort:
//! any failure is logged and the original text is analyzed instead.

use moodhue_common::config::TranslatorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Translation failure (never surfaced to API clients)
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned an empty text")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for a LibreTranslate-style `/translate` endpoint
#[derive(Debug, Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    url: String,
    target_language: String,
}

impl HttpTranslator {
    pub fn new(endpoint: &str, target_language: &str, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: format!("{}/translate", endpoint.trim_end_matches('/')),
            target_language: target_language.to_string(),
        })
    }

    /// Translate `text`; `source` of `None` lets the service detect it
    pub async fn translate(&self, text: &str, source: Option<&str>) -> Result<String, TranslateError> {
        let request = TranslateRequest {
            q: text,
            source: source.unwrap_or("auto"),
            target: &self.target_language,
            format: "text",
        };

        let response: TranslateResponse = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let translated = response.translated_text.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyResponse);
        }
        Ok(translated.to_string())
    }
}

/// Translation strategy held in application state
#[derive(Debug, Clone)]
pub enum Translator {
    /// Analyze text as submitted
    Disabled,
    Http(HttpTranslator),
}

impl Translator {
    pub fn from_config(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        if !config.enabled {
            return Ok(Translator::Disabled);
        }
        let translator = HttpTranslator::new(
            &config.endpoint,
            &config.target_language,
            Duration::from_millis(config.timeout_ms),
        )?;
        Ok(Translator::Http(translator))
    }

    /// Translated text, or the input unchanged when disabled or failing
    ///
    /// `language` of `"auto"` (any case) or `None` requests detection.
    pub async fn translate_or_original(&self, text: &str, language: Option<&str>) -> String {
        let Translator::Http(translator) = self else {
            return text.to_string();
        };

        let source = language.filter(|lang| !lang.eq_ignore_ascii_case("auto"));
        match translator.translate(text, source).await {
            Ok(translated) => {
                debug!("Translated input ({} chars)", translated.chars().count());
                translated
            }
            Err(e) => {
                warn!("Translation failed, analyzing original text: {}", e);
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_returns_input() {
        let translator = Translator::Disabled;
        assert_eq!(translator.translate_or_original("hola", None).await, "hola");
    }

    #[test]
    fn test_from_config_disabled_by_default() {
        let translator = Translator::from_config(&TranslatorConfig::default()).unwrap();
        assert!(matches!(translator, Translator::Disabled));
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let translator =
            HttpTranslator::new("http://localhost:5000/", "en", Duration::from_millis(100)).unwrap();
        assert_eq!(translator.url, "http://localhost:5000/translate");
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_input() {
        // Port 9 (discard) is not expected to host a translation service
        let config = TranslatorConfig {
            enabled: true,
            endpoint: "http://127.0.0.1:9".to_string(),
            target_language: "en".to_string(),
            timeout_ms: 500,
        };
        let translator = Translator::from_config(&config).unwrap();
        assert_eq!(
            translator.translate_or_original("me siento feliz", Some("es")).await,
            "me siento feliz"
        );
    }
}
