//! CLI presentation — stdin/stdout front end for the intake session.
//!
//! The session core is presentation-agnostic; this module owns everything
//! the user actually sees: rendering transcript entries, reading utterances,
//! offering the transcript export and showing generated questions.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::config::AppConfig;
use crate::credentials::{CredentialStore, OPENAI_API_KEY};
use crate::error::SubmitError;
use crate::intake::DialogueSession;
use crate::llm::{LlmProvider, OpenAiProvider};
use crate::questions::QuestionGenerator;
use crate::transcript::{Speaker, TranscriptEntry, EXPORT_FILE_NAME};

/// Runs one end-to-end candidate interaction on the terminal.
pub struct CliRunner {
    config: AppConfig,
    credentials: CredentialStore,
}

impl CliRunner {
    pub fn new(config: AppConfig, credentials: CredentialStore) -> Self {
        Self {
            config,
            credentials,
        }
    }

    pub async fn run(self) -> std::io::Result<()> {
        let mut session = DialogueSession::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        for entry in session.start() {
            render(&entry);
        }

        while !session.ended() {
            eprint!("> ");
            let Some(line) = lines.next_line().await? else {
                // EOF counts as walking away; treat like an early exit.
                tracing::info!("stdin closed before intake finished");
                break;
            };
            match session.submit(&line) {
                Ok(effects) => {
                    for entry in &effects {
                        render(entry);
                    }
                }
                Err(SubmitError::EmptyInput) => continue,
            }
        }

        if !session.transcript().is_empty() && session.ended() {
            self.offer_transcript_export(&session, &mut lines).await?;
        }

        if session.record().is_complete() {
            self.show_questions(&mut session, &mut lines).await?;
        }

        Ok(())
    }

    /// Ask whether to save the transcript to `talentscout_conversation.txt`.
    async fn offer_transcript_export(
        &self,
        session: &DialogueSession,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> std::io::Result<()> {
        eprint!("Save transcript to {EXPORT_FILE_NAME}? [y/N] ");
        let answer = lines.next_line().await?.unwrap_or_default();
        if answer.trim().eq_ignore_ascii_case("y") {
            tokio::fs::write(EXPORT_FILE_NAME, session.transcript().to_text()).await?;
            println!("Transcript saved to {EXPORT_FILE_NAME}");
            tracing::info!(file = EXPORT_FILE_NAME, "Transcript exported");
        }
        Ok(())
    }

    /// Generate and render the technical questions, requesting an API key
    /// from the user when none is configured.
    async fn show_questions(
        &self,
        session: &mut DialogueSession,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> std::io::Result<()> {
        let generator = match self.build_generator(lines).await? {
            Some(generator) => generator,
            None => QuestionGenerator::unavailable(),
        };

        println!("\n🤖 Here are the technical interview questions customized for your tech stack:");
        eprintln!("⏳ Generating technical questions...");
        for line in session.technical_questions(&generator).await {
            if !line.trim().is_empty() {
                println!("🤖 {line}");
            }
        }
        Ok(())
    }

    async fn build_generator(
        &self,
        lines: &mut Lines<BufReader<Stdin>>,
    ) -> std::io::Result<Option<QuestionGenerator>> {
        let api_key = match self.credentials.lookup(OPENAI_API_KEY) {
            Some(key) => Some(key),
            None => {
                eprint!("Enter your OpenAI API key to generate questions (blank to skip): ");
                match lines.next_line().await? {
                    Some(line) if !line.trim().is_empty() => {
                        Some(secrecy::SecretString::from(line.trim().to_string()))
                    }
                    _ => None,
                }
            }
        };

        Ok(api_key.map(|key| {
            let provider: Arc<dyn LlmProvider> = Arc::new(OpenAiProvider::with_base(
                key,
                &self.config.model,
                &self.config.api_base,
                self.config.request_timeout,
            ));
            QuestionGenerator::new(Some(provider))
        }))
    }
}

/// Render one transcript entry as a chat bubble with a clock time.
fn render(entry: &TranscriptEntry) {
    let time = entry.timestamp.format("%I:%M:%S %p");
    match entry.speaker {
        Speaker::Bot => println!("\n🤖 {}  [{time}]", entry.text),
        Speaker::User => println!("🙋 {}  [{time}]", entry.text),
    }
}
