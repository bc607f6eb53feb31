pub mod extract;
mod gateway;
mod gemini;
mod groq;
pub mod prompts;
mod provider;

pub use gateway::{format_elapsed, Gateway, ProviderStatus};
pub use gemini::GeminiClient;
pub use groq::GroqClient;
pub use provider::{CompletionBackend, CompletionRequest, CompletionResult, ProviderId};
