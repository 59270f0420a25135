use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::RatingConfig;
use crate::ideas::types::{AiRating, Category};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

#[async_trait]
pub trait IdeaRater: Send + Sync {
    async fn rate(
        &self,
        title: &str,
        preview: &str,
        full_content: &str,
        categories: &[Category],
    ) -> anyhow::Result<AiRating>;
}

/// Rates ideas through an OpenAI-compatible chat completions endpoint.
#[derive(Clone)]
pub struct OpenAiRater {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiRater {
    pub fn new(cfg: &RatingConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build rating http client")?;
        Ok(Self {
            client,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl IdeaRater for OpenAiRater {
    #[instrument(skip_all, fields(model = %self.model))]
    async fn rate(
        &self,
        title: &str,
        preview: &str,
        full_content: &str,
        categories: &[Category],
    ) -> anyhow::Result<AiRating> {
        let body = json!({
            "model": self.model,
            "temperature": 0.3,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": build_prompt(title, preview, full_content, categories) },
            ],
        });

        let completion: ChatCompletion = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("rating request")?
            .error_for_status()
            .context("rating service returned an error status")?
            .json()
            .await
            .context("decode rating response")?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .context("rating response has no content")?;

        let rating = parse_rating(&content)?;
        debug!(?rating, "idea rated");
        Ok(rating)
    }
}

const SYSTEM_PROMPT: &str = "You are an expert analyst of business and product ideas. \
Respond only with a JSON object of the form \
{\"originality\": number, \"useCaseValue\": number, \"categoryMatch\": number}, \
each score between 1 and 10.";

pub(crate) fn build_prompt(
    title: &str,
    preview: &str,
    full_content: &str,
    categories: &[Category],
) -> String {
    let categories = categories
        .iter()
        .map(Category::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Rate the following idea.\n\n\
         Title: {title}\n\
         Categories: {categories}\n\n\
         Preview:\n{preview}\n\n\
         Full content:\n{full_content}\n\n\
         originality: how novel the idea is.\n\
         useCaseValue: how valuable and practical the idea is.\n\
         categoryMatch: how well the idea fits the listed categories."
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRating {
    originality: f64,
    use_case_value: f64,
    category_match: f64,
}

/// Parses the model's JSON answer, clamping each score into `[MIN_SCORE, MAX_SCORE]`.
pub(crate) fn parse_rating(content: &str) -> anyhow::Result<AiRating> {
    let raw: RawRating =
        serde_json::from_str(content.trim()).context("rating content is not the expected JSON")?;
    Ok(AiRating {
        originality: score(raw.originality, "originality")?,
        use_case_value: score(raw.use_case_value, "useCaseValue")?,
        category_match: score(raw.category_match, "categoryMatch")?,
    })
}

fn score(value: f64, name: &str) -> anyhow::Result<f64> {
    anyhow::ensure!(value.is_finite(), "{name} is not a finite number");
    Ok(value.clamp(MIN_SCORE, MAX_SCORE))
}
