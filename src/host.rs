//! Host simulation interface
//!
//! The buffer never touches live skill state directly; everything goes
//! through this trait. The two flag words are pass-through values the
//! host's advancement routine interprets; the buffer forwards them
//! unchanged.

use crate::core::types::SkillId;

/// The host simulation's view of the player character.
pub trait SkillHost {
    /// Apply a point delta directly to live skill state, bypassing the
    /// buffer. Fire-and-forget; the buffer deducts only after this
    /// returns.
    fn advance_skill(&mut self, skill: SkillId, points: f32, flag_a: u32, flag_b: u32);

    /// Current base level of a skill.
    fn skill_level(&self, skill: SkillId) -> u16;

    /// Current character level.
    fn character_level(&self) -> u16;
}

/// In-memory host used by tests and the demo binary. Tracks every
/// forwarded delta per skill.
#[derive(Debug, Clone)]
pub struct RecordingHost {
    pub applied: [f32; crate::core::types::SKILL_COUNT],
    pub calls: Vec<(SkillId, f32)>,
    pub skill_levels: [u16; crate::core::types::SKILL_COUNT],
    pub character_level: u16,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            applied: [0.0; crate::core::types::SKILL_COUNT],
            calls: Vec::new(),
            skill_levels: [1; crate::core::types::SKILL_COUNT],
            character_level: 1,
        }
    }
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total points applied to one skill across all calls.
    pub fn applied_to(&self, skill: SkillId) -> f32 {
        self.applied[skill.index()]
    }
}

impl SkillHost for RecordingHost {
    fn advance_skill(&mut self, skill: SkillId, points: f32, _flag_a: u32, _flag_b: u32) {
        self.applied[skill.index()] += points;
        self.calls.push((skill, points));
    }

    fn skill_level(&self, skill: SkillId) -> u16 {
        self.skill_levels[skill.index()]
    }

    fn character_level(&self) -> u16 {
        self.character_level
    }
}
