//! Dialogue state machine — one linear intake conversation.
//!
//! A session owns the current step, the collected candidate record, the
//! transcript and the ended flag. Each user utterance goes through `submit`,
//! which validates, advances (or not) and returns the transcript entries it
//! appended so the presentation layer can render them. Nothing here renders
//! anything itself.

use uuid::Uuid;

use crate::error::SubmitError;
use crate::questions::QuestionGenerator;
use crate::transcript::{Transcript, TranscriptEntry};

use super::schema::Field;
use super::validate::Validator;

/// Opening message shown when a session starts.
pub const GREETING: &str = "Hello! 👋 Welcome to TalentScout's AI Hiring Assistant. \
     I'm here to help with your initial screening process. Let's get started!";

/// Fixed message appended when the user ends the conversation early.
pub const CLOSING_MESSAGE: &str =
    "Thank you for your time. The conversation has ended. We appreciate your interest!";

/// Message synthesized once all fields are answered.
pub const COMPLETION_MESSAGE: &str = "Thank you for providing your information! \
     Next, I'll ask you a few technical questions based on your tech stack.";

/// Keywords that terminate the conversation at any step (case-insensitive).
const EXIT_KEYWORDS: [&str; 5] = ["exit", "quit", "stop", "bye", "end"];

/// Answers collected so far, keyed by the closed field set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    answers: std::collections::BTreeMap<Field, String>,
}

impl CandidateRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.answers.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.answers.insert(field, value.into());
    }

    /// Complete iff every field has a non-empty, trimmed value.
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .iter()
            .all(|f| self.answers.get(f).is_some_and(|v| !v.trim().is_empty()))
    }
}

/// Observable state of the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    /// Waiting for an answer to the given field.
    WaitingForField(Field),
    /// All fields answered, completion message pending.
    IntakeComplete,
    /// Terminal — no further input is processed.
    Ended,
}

/// One end-to-end candidate interaction.
#[derive(Debug, Clone)]
pub struct DialogueSession {
    id: Uuid,
    step: usize,
    record: CandidateRecord,
    transcript: Transcript,
    ended: bool,
    cached_questions: Option<Vec<String>>,
}

impl Default for DialogueSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: 0,
            record: CandidateRecord::new(),
            transcript: Transcript::new(),
            ended: false,
            cached_questions: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn record(&self) -> &CandidateRecord {
        &self.record
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    /// The field currently awaiting an answer, if any.
    pub fn current_field(&self) -> Option<Field> {
        if self.ended {
            None
        } else {
            Field::at(self.step).ok()
        }
    }

    pub fn state(&self) -> DialogueState {
        if self.ended {
            DialogueState::Ended
        } else if self.step >= Field::COUNT {
            DialogueState::IntakeComplete
        } else {
            DialogueState::WaitingForField(Field::ALL[self.step])
        }
    }

    /// Open the conversation: greeting plus the first question.
    ///
    /// Idempotent — a second call returns nothing.
    pub fn start(&mut self) -> Vec<TranscriptEntry> {
        if !self.transcript.is_empty() || self.ended {
            return Vec::new();
        }
        let effects = vec![
            TranscriptEntry::bot(GREETING),
            TranscriptEntry::bot(Field::ALL[0].prompt()),
        ];
        for entry in &effects {
            self.transcript.append(entry.clone());
        }
        effects
    }

    /// Process one user utterance.
    ///
    /// Returns the transcript entries appended by this transition, in order,
    /// for the presentation layer to render. An ended session ignores all
    /// input and returns no effects.
    pub fn submit(&mut self, raw: &str) -> Result<Vec<TranscriptEntry>, SubmitError> {
        if self.ended {
            return Ok(Vec::new());
        }

        let input = raw.trim();
        if input.is_empty() {
            return Err(SubmitError::EmptyInput);
        }

        if is_exit_keyword(input) {
            tracing::info!(session = %self.id, "User ended the conversation");
            return Ok(self.end_early(input));
        }

        let Some(field) = self.current_field() else {
            // Intake already complete without the completion message having
            // been rendered — synthesize it now.
            return Ok(self.finish_intake());
        };

        let validator = Validator::for_field(field);
        if !validator.accepts(input) {
            tracing::debug!(session = %self.id, field = %field, "Answer rejected");
            let rejection = TranscriptEntry::bot(validator.rejection_message());
            self.transcript.append(rejection.clone());
            return Ok(vec![rejection]);
        }

        self.record.set(field, input);
        let mut effects = vec![TranscriptEntry::user(input)];
        self.step += 1;

        match Field::at(self.step) {
            Ok(next) => effects.push(TranscriptEntry::bot(next.prompt())),
            Err(_) => {
                for entry in &effects {
                    self.transcript.append(entry.clone());
                }
                let mut finish = self.finish_intake();
                effects.append(&mut finish);
                return Ok(effects);
            }
        }

        for entry in &effects {
            self.transcript.append(entry.clone());
        }
        Ok(effects)
    }

    /// Early termination: record the utterance and the fixed closing
    /// message, freeze the step at the end of the schema.
    fn end_early(&mut self, utterance: &str) -> Vec<TranscriptEntry> {
        let effects = vec![
            TranscriptEntry::user(utterance),
            TranscriptEntry::bot(CLOSING_MESSAGE),
        ];
        for entry in &effects {
            self.transcript.append(entry.clone());
        }
        self.ended = true;
        self.step = Field::COUNT;
        effects
    }

    /// Append the single completion message and end the session. Guarded so
    /// repeated calls never duplicate the message.
    fn finish_intake(&mut self) -> Vec<TranscriptEntry> {
        if self.ended {
            return Vec::new();
        }
        self.ended = true;
        let entry = TranscriptEntry::bot(COMPLETION_MESSAGE);
        self.transcript.append(entry.clone());
        vec![entry]
    }

    /// Generate (or return the cached) technical questions for this session.
    ///
    /// The generator is invoked at most once per session; every later call
    /// returns the cached lines without touching the external service.
    pub async fn technical_questions(&mut self, generator: &QuestionGenerator) -> &[String] {
        if self.cached_questions.is_none() {
            let lines = generator.generate(&self.record).await;
            self.cached_questions = Some(lines);
        }
        self.cached_questions.as_deref().unwrap_or(&[])
    }

    /// Whether questions have already been generated for this session.
    pub fn has_cached_questions(&self) -> bool {
        self.cached_questions.is_some()
    }
}

fn is_exit_keyword(input: &str) -> bool {
    let lowered = input.to_lowercase();
    EXIT_KEYWORDS.iter().any(|k| *k == lowered)
}
