//! Flush policies
//!
//! A policy gets the last word on how much of a computed flush amount
//! actually reaches the host. `Uncapped` is the stable behavior;
//! `LevelCapped` is the experimental variant that refuses to release
//! more in one rest than the skill's next level-up would require.

use tracing::warn;

use crate::core::types::{SkillId, SKILL_COUNT};
use crate::curve::{LevelAllowance, SkillCurves};
use crate::host::SkillHost;

/// Clamps per-skill flush amounts. Selected once when the buffer is
/// constructed; both variants live in the same build so both are
/// testable.
pub trait FlushPolicy {
    /// Given the amount about to be forwarded for `skill`, return the
    /// amount that should actually be forwarded. Called only for
    /// strictly positive amounts. The returned value is also what the
    /// buffer deducts, so conservation holds under any clamp.
    fn clamp_flush(&mut self, skill: SkillId, to_add: f32, host: &dyn SkillHost) -> f32;

    /// Discard per-play-through tracking on a revert event. Stateless
    /// policies keep the default no-op.
    fn reset(&mut self) {}
}

/// Stable behavior: forward exactly what the percentage computes.
#[derive(Debug, Default)]
pub struct Uncapped;

impl FlushPolicy for Uncapped {
    fn clamp_flush(&mut self, _skill: SkillId, to_add: f32, _host: &dyn SkillHost) -> f32 {
        to_add
    }
}

/// Experimental: cap cumulative released experience at the total the
/// skill's improvement curve requires for the tracked character level,
/// so one big flush cannot blow a skill straight past its level-up
/// threshold.
pub struct LevelCapped {
    /// None when the host never supplied curve configuration. In that
    /// state the cap is skipped entirely rather than silently zeroing
    /// every flush with an empty allowance.
    curves: Option<SkillCurves>,
    flushed: [f32; SKILL_COUNT],
    allowance: [LevelAllowance; SKILL_COUNT],
    warned_unavailable: bool,
}

impl LevelCapped {
    pub fn new(curves: SkillCurves) -> Self {
        Self {
            curves: Some(curves),
            flushed: [0.0; SKILL_COUNT],
            allowance: [LevelAllowance::default(); SKILL_COUNT],
            warned_unavailable: false,
        }
    }

    /// Construct without curve configuration. Every flush passes
    /// through uncapped until curves become available.
    pub fn without_curves() -> Self {
        Self {
            curves: None,
            flushed: [0.0; SKILL_COUNT],
            allowance: [LevelAllowance::default(); SKILL_COUNT],
            warned_unavailable: false,
        }
    }

    pub fn allowance_available(&self) -> bool {
        self.curves.is_some()
    }

    /// Cumulative experience released for `skill` at the current cap.
    pub fn flushed(&self, skill: SkillId) -> f32 {
        self.flushed[skill.index()]
    }

    /// Current cumulative allowance for `skill`.
    pub fn allowance(&self, skill: SkillId) -> f32 {
        self.allowance[skill.index()].points
    }
}

impl FlushPolicy for LevelCapped {
    fn clamp_flush(&mut self, skill: SkillId, to_add: f32, host: &dyn SkillHost) -> f32 {
        let Some(curves) = self.curves.as_ref() else {
            if !self.warned_unavailable {
                warn!("skill curve configuration unavailable; level cap disabled");
                self.warned_unavailable = true;
            }
            return to_add;
        };

        let idx = skill.index();
        let character_level = host.character_level();
        if self.allowance[idx].level < character_level {
            if self.allowance[idx].level == 0 {
                // Start counting from the skill's current level, not 1;
                // experience below it was never buffered.
                self.allowance[idx].level = host.skill_level(skill);
            }
            self.allowance[idx].advance(curves, skill, character_level);
        }

        let mut to_add = to_add;
        self.flushed[idx] += to_add;
        let allowance = self.allowance[idx].points;
        if self.flushed[idx] > allowance {
            to_add -= self.flushed[idx] - allowance;
            self.flushed[idx] = allowance;
        }
        to_add
    }

    /// A revert ends the play-through, so released totals and the
    /// allowance baseline (seeded from that play-through's levels) are
    /// both discarded; the allowance rebuilds lazily on the next flush.
    fn reset(&mut self) {
        self.flushed = [0.0; SKILL_COUNT];
        self.allowance = [LevelAllowance::default(); SKILL_COUNT];
    }
}
