//! TalentScout — conversational candidate intake assistant.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod intake;
pub mod llm;
pub mod questions;
pub mod transcript;
