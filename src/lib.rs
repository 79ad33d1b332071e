//! Restgain - banked skill progression released on rest
//!
//! Experience a character earns is split: part applies immediately,
//! the rest is banked in a per-skill buffer and only released into the
//! host simulation when the character rests. How much of the bank a
//! rest releases depends on how long the rest was and whether it was
//! interrupted; that policy lives in configuration, not in the buffer.

pub mod buffer;
pub mod core;
pub mod curve;
pub mod hook;
pub mod host;
pub mod persist;
pub mod session;

pub use buffer::policy::{FlushPolicy, LevelCapped, Uncapped};
pub use buffer::ExperienceBuffer;
pub use crate::core::config::RestSettings;
pub use crate::core::error::{RestgainError, Result};
pub use crate::core::types::{SkillId, FIRST_SKILL_RAW, LAST_SKILL_RAW, SKILL_COUNT};
pub use curve::{experience_for_level, CurveParams, LevelAllowance, SkillCurves};
pub use hook::{InterceptOutcome, ProgressionHook};
pub use host::{RecordingHost, SkillHost};
pub use persist::{read_snapshot, write_snapshot, SnapshotOutcome, SNAPSHOT_VERSION};
pub use session::Session;
