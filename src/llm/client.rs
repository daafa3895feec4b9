use crate::error::{FinancialInsightError, Result};
use crate::llm::TextGenerator;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const HF_API_URL: &str = "https://api-inference.huggingface.co/models";
const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.2";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for the Hugging Face Inference API text-generation endpoint.
#[derive(Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl HuggingFaceClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.into(),
            base_url: HF_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Reads the API key from `HUGGINGFACE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("HUGGINGFACE_API_KEY")
            .map_err(|_| FinancialInsightError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, self.model);
        let payload = json!({
            "inputs": prompt,
            "parameters": {
                "max_new_tokens": 1000,
                "temperature": 0.7,
                "top_p": 0.95,
                "return_full_text": false,
            },
        });

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let err_text = res.text().await.unwrap_or_default();
            return Err(FinancialInsightError::GenerationFailed(format!(
                "Hugging Face API error (status {}): {}",
                status, err_text
            )));
        }

        let body: serde_json::Value = res.json().await?;

        // The endpoint replies either with an array of generations or a
        // single object; an in-band error field also surfaces here.
        if let Some(text) = body
            .as_array()
            .and_then(|arr| arr.first())
            .or(Some(&body))
            .and_then(|v| v.get("generated_text"))
            .and_then(|v| v.as_str())
        {
            return Ok(text.to_string());
        }

        if let Some(error) = body.get("error").and_then(|v| v.as_str()) {
            return Err(FinancialInsightError::GenerationFailed(format!(
                "Hugging Face API error: {}",
                error
            )));
        }

        Ok(String::new())
    }
}

impl TextGenerator for HuggingFaceClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_text(prompt).await
    }
}
