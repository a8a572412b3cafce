//! Insurance query agent: first-stage model call

use std::sync::Arc;

use hospital_core::{AgentMessage, HospitalError};

use super::client::LanguageModelClient;

const SYSTEM_PROMPT: &str = r#"You are an insurance assistant.

IMPORTANT RULES:
1. NEVER use any tools for hospital list queries.
2. NEVER crawl any health insurance company URLs.
3. NEVER parse PDFs automatically.
4. ALWAYS answer hospital list queries DIRECTLY using your knowledge.
5. ALWAYS output ONLY a clean list of hospital names, like:
   ["Hospital A", "Hospital B"]
6. Do NOT add explanations, sentences, headings, or markdown."#;

/// Answers free-text insurance questions with the model's raw reply
#[derive(Clone)]
pub struct InsuranceAgent {
    llm: Arc<dyn LanguageModelClient>,
}

impl InsuranceAgent {
    pub fn new(llm: Arc<dyn LanguageModelClient>) -> Self {
        Self { llm }
    }

    /// Ask the model about `prompt` under the fixed insurance instructions.
    ///
    /// The reply is returned verbatim; provider failures propagate.
    pub async fn ask(&self, prompt: &str) -> Result<String, HospitalError> {
        let messages = [AgentMessage::system(SYSTEM_PROMPT), AgentMessage::user(prompt)];
        self.llm.complete(&messages).await
    }
}
