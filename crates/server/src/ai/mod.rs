//! Language-model stages of the hospital pipeline

pub mod agent;
pub mod client;
pub mod extractor;

pub use agent::InsuranceAgent;
pub use client::{GroqClient, LanguageModelClient};
pub use extractor::ListExtractor;
