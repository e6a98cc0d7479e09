use async_trait::async_trait;
use log::warn;

use crate::clients::openai_client;

pub const GENERATION_FAILED_TEXT: &str =
    "Error: Could not generate a description at this time.";

#[async_trait]
pub trait DescriptionGenerator: Send + Sync {
    async fn generate(
        &self,
        keywords: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

pub struct OpenAIDescriptionService {
    api_key: String,
}

impl OpenAIDescriptionService {
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl DescriptionGenerator for OpenAIDescriptionService {
    async fn generate(
        &self,
        keywords: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        openai_client::generate_description(keywords, &self.api_key).await
    }
}

pub struct DescriptionService;

impl DescriptionService {
    /// String-only boundary for the form: blank keywords produce an
    /// empty string without calling the generator, and generator
    /// failures come back as a readable placeholder instead of an Err.
    pub async fn suggest<G: DescriptionGenerator + ?Sized>(generator: &G, keywords: &str) -> String {
        if keywords.trim().is_empty() {
            return String::new();
        }
        match generator.generate(keywords).await {
            Ok(text) => text.trim().to_string(),
            Err(err) => {
                warn!("description generation failed: {}", err);
                GENERATION_FAILED_TEXT.to_string()
            }
        }
    }
}
