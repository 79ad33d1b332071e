//! Core types, configuration and errors

pub mod config;
pub mod error;
pub mod types;

pub use config::RestSettings;
pub use error::{RestgainError, Result};
pub use types::{SkillId, FIRST_SKILL_RAW, LAST_SKILL_RAW, SKILL_COUNT};
