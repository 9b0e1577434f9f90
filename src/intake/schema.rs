//! The fixed intake field schema.
//!
//! Seven fields, asked in a fixed order that never changes. The field set is
//! a closed enum rather than string keys so every field has a validator and
//! a prompt at compile time.

use serde::{Deserialize, Serialize};

use crate::error::OutOfRangeError;

/// The candidate fields collected during intake, in question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    EmailAddress,
    PhoneNumber,
    YearsOfExperience,
    DesiredPositions,
    CurrentLocation,
    TechStack,
}

impl Field {
    /// All fields in question order.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::EmailAddress,
        Field::PhoneNumber,
        Field::YearsOfExperience,
        Field::DesiredPositions,
        Field::CurrentLocation,
        Field::TechStack,
    ];

    /// Number of intake steps.
    pub const COUNT: usize = Self::ALL.len();

    /// The field asked at `index`, failing past the end of the schema.
    pub fn at(index: usize) -> Result<Field, OutOfRangeError> {
        Self::ALL.get(index).copied().ok_or(OutOfRangeError {
            index,
            count: Self::COUNT,
        })
    }

    /// Position of this field in the question order.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Human-readable field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::EmailAddress => "Email Address",
            Self::PhoneNumber => "Phone Number",
            Self::YearsOfExperience => "Years of Experience",
            Self::DesiredPositions => "Desired Position(s)",
            Self::CurrentLocation => "Current Location",
            Self::TechStack => "Tech Stack",
        }
    }

    /// The question the assistant asks for this field.
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::FullName => "May I have your full name please?",
            Self::EmailAddress => "What is your email address?",
            Self::PhoneNumber => "What is your phone number?",
            Self::YearsOfExperience => {
                "How many years of experience do you have in tech roles?"
            }
            Self::DesiredPositions => "What position(s) are you applying for?",
            Self::CurrentLocation => "Where are you currently located? (City, Country)",
            Self::TechStack => {
                "List your programming languages, frameworks, databases, and tools you are proficient in."
            }
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
