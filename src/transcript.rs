//! Append-only conversation transcript.
//!
//! Every message shown during a session — bot prompts, accepted user
//! answers, rejection notices, the closing message — is recorded here in
//! display order. Entries are never mutated or reordered after insertion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File name offered for the transcript download once a session has ended.
pub const EXPORT_FILE_NAME: &str = "talentscout_conversation.txt";

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Bot,
    User,
}

impl Speaker {
    /// The label used in the exported transcript text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Bot => "AI",
            Self::User => "You",
        }
    }
}

/// One line of conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub text: String,
    pub speaker: Speaker,
    pub timestamp: DateTime<Utc>,
}

impl TranscriptEntry {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::Bot,
            timestamp: Utc::now(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            speaker: Speaker::User,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered, append-only record of the conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. Append order is conversation order.
    pub fn append(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the transcript in the exported file format: one entry per
    /// line, `[AI]: <text>` or `[You]: <text>`, joined by newlines.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("[{}]: {}", e.speaker.label(), e.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
