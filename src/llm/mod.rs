pub mod analyst;
#[cfg(feature = "huggingface")]
pub mod client;

pub use analyst::*;
#[cfg(feature = "huggingface")]
pub use client::*;

use crate::error::Result;

/// The only capability the engine requires of a text-generation backend:
/// one prompt in, free text out. Callers should wrap the call in a timeout
/// and treat expiry as retryable; the engine itself never retries.
#[allow(async_fn_in_trait)]
pub trait TextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
