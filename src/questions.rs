//! Technical interview question generation.
//!
//! Takes a completed candidate record and asks the LLM for 3-5 questions
//! per technology in the declared stack, scaled to the stated experience.
//! The generator is best-effort: every failure becomes a single diagnostic
//! line so the session stays usable with no credentials, no network, or a
//! broken upstream.

use std::sync::Arc;

use crate::intake::{CandidateRecord, Field};
use crate::llm::{ChatMessage, CompletionRequest, LlmProvider};

/// System role sent with the generation request.
pub const INTERVIEWER_SYSTEM_PROMPT: &str = "You are a helpful technical interviewer.";

/// Diagnostic shown when no provider is configured.
pub const MISSING_CREDENTIALS_LINE: &str =
    "[Unable to generate questions: OpenAI API key missing]";

/// Diagnostic shown when intake finished without a complete record.
pub const INCOMPLETE_RECORD_LINE: &str =
    "[Unable to generate questions: candidate information is incomplete]";

/// Build the user prompt for the generation call.
pub fn build_prompt(tech_stack: &str, years_experience: &str) -> String {
    format!(
        "You are a technical interviewer for a technology recruitment agency. \
         Generate 3-5 interview questions for EACH technology listed in this tech stack: {tech_stack}. \
         Questions should be concise, on-point, and appropriate for someone with {years_experience} years of experience. \
         Format the output as Bulleted lists, one per technology."
    )
}

/// Best-effort interview question generator.
///
/// Constructed with `None` when no credentials are available; `generate`
/// then returns the missing-credentials diagnostic instead of calling out.
pub struct QuestionGenerator {
    provider: Option<Arc<dyn LlmProvider>>,
}

impl QuestionGenerator {
    pub fn new(provider: Option<Arc<dyn LlmProvider>>) -> Self {
        Self { provider }
    }

    pub fn unavailable() -> Self {
        Self { provider: None }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Generate question lines for a completed record.
    ///
    /// Makes at most one provider call and never fails: any error is
    /// returned as a single diagnostic line. Empty lines in the model
    /// output are kept — filtering happens at render time.
    pub async fn generate(&self, record: &CandidateRecord) -> Vec<String> {
        if !record.is_complete() {
            tracing::warn!("Question generation requested with incomplete record");
            return vec![INCOMPLETE_RECORD_LINE.to_string()];
        }

        let Some(provider) = self.provider.as_ref() else {
            return vec![MISSING_CREDENTIALS_LINE.to_string()];
        };

        // is_complete() guarantees both fields are present.
        let tech_stack = record.get(Field::TechStack).unwrap_or_default();
        let years = record.get(Field::YearsOfExperience).unwrap_or_default();

        let request = CompletionRequest::new(vec![
            ChatMessage::system(INTERVIEWER_SYSTEM_PROMPT),
            ChatMessage::user(build_prompt(tech_stack, years)),
        ]);

        match provider.complete(request).await {
            Ok(response) => {
                tracing::info!(model = provider.model_name(), "Generated interview questions");
                response
                    .content
                    .trim()
                    .split('\n')
                    .map(str::to_string)
                    .collect()
            }
            Err(e) => {
                tracing::warn!("Question generation failed: {e}");
                vec![format!("[Error generating questions: {e}]")]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LlmError;
    use crate::llm::CompletionResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubProvider {
        calls: AtomicUsize,
        reply: Result<String, ()>,
    }

    impl StubProvider {
        fn replying(text: &str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Ok(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                reply: Err(()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmProvider for StubProvider {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(CompletionResponse {
                    content: text.clone(),
                    input_tokens: None,
                    output_tokens: None,
                }),
                Err(()) => Err(LlmError::RequestFailed {
                    provider: "stub".to_string(),
                    reason: "connection refused".to_string(),
                }),
            }
        }

        fn model_name(&self) -> &str {
            "stub-model"
        }
    }

    fn complete_record() -> CandidateRecord {
        let mut record = CandidateRecord::new();
        record.set(Field::FullName, "Jane Doe");
        record.set(Field::EmailAddress, "jane@example.com");
        record.set(Field::PhoneNumber, "+1 555-123-4567");
        record.set(Field::YearsOfExperience, "6");
        record.set(Field::DesiredPositions, "Backend Engineer");
        record.set(Field::CurrentLocation, "Berlin, Germany");
        record.set(Field::TechStack, "Rust, PostgreSQL");
        record
    }

    #[test]
    fn prompt_mentions_stack_and_experience() {
        let prompt = build_prompt("Rust, PostgreSQL", "6");
        assert!(prompt.contains("Rust, PostgreSQL"));
        assert!(prompt.contains("6 years of experience"));
        assert!(prompt.contains("3-5 interview questions"));
        assert!(prompt.contains("Bulleted lists"));
    }

    #[tokio::test]
    async fn missing_provider_yields_single_diagnostic() {
        let generator = QuestionGenerator::unavailable();
        let lines = generator.generate(&complete_record()).await;
        assert_eq!(lines, vec![MISSING_CREDENTIALS_LINE.to_string()]);
    }

    #[tokio::test]
    async fn incomplete_record_yields_single_diagnostic() {
        let stub = Arc::new(StubProvider::replying("- question"));
        let generator = QuestionGenerator::new(Some(stub.clone()));
        let lines = generator.generate(&CandidateRecord::new()).await;
        assert_eq!(lines, vec![INCOMPLETE_RECORD_LINE.to_string()]);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn success_splits_lines_verbatim() {
        let stub = Arc::new(StubProvider::replying(
            "Rust:\n- What is ownership?\n\n- Explain lifetimes.",
        ));
        let generator = QuestionGenerator::new(Some(stub.clone()));
        let lines = generator.generate(&complete_record()).await;
        // Interior empty lines are preserved; filtering is a render concern.
        assert_eq!(
            lines,
            vec!["Rust:", "- What is ownership?", "", "- Explain lifetimes."]
        );
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn provider_error_becomes_diagnostic_line() {
        let stub = Arc::new(StubProvider::failing());
        let generator = QuestionGenerator::new(Some(stub.clone()));
        let lines = generator.generate(&complete_record()).await;
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("[Error generating questions:"));
        assert!(lines[0].contains("connection refused"));
        assert_eq!(stub.call_count(), 1);
    }
}
