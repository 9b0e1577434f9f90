//! Candidate intake — the linear screening conversation.
//!
//! The intake is a fixed sequence of questions the assistant asks a
//! candidate. Each answer is validated before the conversation advances;
//! the whole exchange is recorded in an append-only transcript. Once every
//! field is answered the session transitions into technical question
//! generation.

pub mod schema;
pub mod session;
pub mod validate;

pub use schema::Field;
pub use session::{
    CandidateRecord, DialogueSession, DialogueState, CLOSING_MESSAGE, COMPLETION_MESSAGE, GREETING,
};
pub use validate::Validator;
