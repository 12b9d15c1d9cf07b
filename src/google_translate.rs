use anyhow::{Context, Result};
use reqwest::{self, Client};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::translation::{TargetLanguage, Translator};

pub const DEFAULT_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";

#[derive(Serialize)]
struct TranslateRequestBody<'a> {
    q: Vec<&'a str>,
    target: &'static str,
    format: &'static str,
}

#[derive(Deserialize, Debug)]
struct TranslateResponseBody {
    data: TranslateResponseData,
}

#[derive(Deserialize, Debug)]
struct TranslateResponseData {
    translations: Vec<Translation>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Translation {
    translated_text: String,
    detected_source_language: Option<String>,
}

pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

// https://cloud.google.com/translate/docs/reference/rest/v2/translate
impl GoogleTranslateClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        let client = reqwest::Client::new();
        Self {
            client,
            endpoint,
            api_key,
        }
    }

    async fn translate_text(&self, text: &str, target: TargetLanguage) -> Result<String> {
        let request_body = TranslateRequestBody {
            q: vec![text],
            target: target.code(),
            // plain text in, plain text out; "html" would escape entities
            format: "text",
        };
        let response = self.client.post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-type", "application/json; charset=utf-8")
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let response = parse_response(&text)?;
        Ok(response)
    }
}

impl Translator for GoogleTranslateClient {
    async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String> {
        self.translate_text(text, target).await
    }
}

fn parse_response(text: &str) -> Result<String> {
    let response: TranslateResponseBody = serde_json::from_str(text)?;
    let translation = response.data.translations.into_iter()
        .next()
        .context("translation response is empty")?;
    info!("detected source language {:?}", translation.detected_source_language);
    Ok(translation.translated_text)
}
