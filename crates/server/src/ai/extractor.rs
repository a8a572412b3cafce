//! List extractor: second-stage model call that coerces free text into names

use std::sync::Arc;

use hospital_core::{AgentMessage, parse_name_list};

use super::client::LanguageModelClient;

/// Build the formatter instruction around the first-stage reply
fn formatter_prompt(text: &str) -> String {
    format!(
        r#"Extract ONLY the hospital names from the text below.

TEXT:
{text}

Return ONLY a valid list, like:
["Hospital A", "Hospital B"]

Do NOT add explanations.
Do NOT add markdown.
Do NOT wrap in code blocks.
Just output the list."#
    )
}

/// Turns arbitrary model output into a strict list of hospital names
#[derive(Clone)]
pub struct ListExtractor {
    llm: Arc<dyn LanguageModelClient>,
}

impl ListExtractor {
    pub fn new(llm: Arc<dyn LanguageModelClient>) -> Self {
        Self { llm }
    }

    /// Ask the model to reformat `raw_text` as a list and parse the result.
    ///
    /// Returns `None` when the model call fails or its reply is not a list of
    /// strings. An empty list is returned as `Some(vec![])`.
    pub async fn extract(&self, raw_text: &str) -> Option<Vec<String>> {
        let messages = [AgentMessage::user(formatter_prompt(raw_text))];

        let reply = match self.llm.complete(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error = %e, "List extraction call failed");
                return None;
            }
        };

        match parse_name_list(&reply) {
            Ok(names) => Some(names),
            Err(e) => {
                tracing::warn!(error = %e, reply = %reply, "Could not parse extracted list");
                None
            }
        }
    }
}
