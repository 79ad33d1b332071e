//! Per-skill experience accumulation and flushing
//!
//! The buffer holds experience earned but not yet applied to the host's
//! live skill state. It only ever releases points through a flush, and
//! it deducts exactly what it forwarded, so nothing is created or lost
//! between "earned" and "applied".

pub mod policy;

use std::fmt;

use tracing::debug;

use crate::core::types::{SkillId, SKILL_COUNT};
use crate::host::SkillHost;
use policy::{FlushPolicy, Uncapped};

/// Fixed-size store of banked experience, one f32 accumulator per skill.
pub struct ExperienceBuffer {
    points: [f32; SKILL_COUNT],
    policy: Box<dyn FlushPolicy + Send>,
}

impl Default for ExperienceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ExperienceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExperienceBuffer")
            .field("points", &self.points)
            .finish_non_exhaustive()
    }
}

impl ExperienceBuffer {
    /// Zero-initialized buffer with the stable uncapped flush policy.
    pub fn new() -> Self {
        Self::with_policy(Box::new(Uncapped))
    }

    /// Zero-initialized buffer with an explicit flush policy. The policy
    /// is fixed for the buffer's lifetime.
    pub fn with_policy(policy: Box<dyn FlushPolicy + Send>) -> Self {
        Self {
            points: [0.0; SKILL_COUNT],
            policy,
        }
    }

    /// Banked experience for one skill. No side effects.
    pub fn experience(&self, skill: SkillId) -> f32 {
        self.points[skill.index()]
    }

    /// Bank a point delta. Negative amounts are accepted unguarded; the
    /// hook layer never produces them but scripts may.
    pub fn add_experience(&mut self, skill: SkillId, amount: f32) {
        self.points[skill.index()] += amount;
    }

    /// Release `percent` of every skill's banked experience into the
    /// host, in ascending skill id order.
    pub fn flush_experience(&mut self, percent: f32, host: &mut dyn SkillHost) {
        for skill in SkillId::ALL {
            self.flush_experience_by_skill(skill, percent, host);
        }
    }

    /// Release `percent` of one skill's banked experience into the host.
    ///
    /// Zero and negative computed amounts are a no-op: no host call, no
    /// mutation. Otherwise the policy may clamp the amount, the clamped
    /// amount is forwarded, and the accumulator drops by exactly what
    /// was forwarded; the deduction happens only after the host call
    /// returns.
    pub fn flush_experience_by_skill(
        &mut self,
        skill: SkillId,
        percent: f32,
        host: &mut dyn SkillHost,
    ) {
        let idx = skill.index();
        let mut to_add = self.points[idx] * percent;

        if to_add <= 0.0 {
            return;
        }

        to_add = self.policy.clamp_flush(skill, to_add, &*host);

        host.advance_skill(skill, to_add, 0, 0);
        debug!(skill = skill.name(), points = to_add, "flushed experience");
        self.points[idx] -= to_add;
    }

    /// Scale every accumulator. Unguarded; external difficulty tweaks
    /// use this.
    pub fn mult_experience(&mut self, mult: f32) {
        for skill in SkillId::ALL {
            self.mult_experience_by_skill(skill, mult);
        }
    }

    /// Scale one accumulator. Unguarded.
    pub fn mult_experience_by_skill(&mut self, skill: SkillId, mult: f32) {
        self.points[skill.index()] *= mult;
    }

    /// Zero every accumulator.
    pub fn clear(&mut self) {
        self.points = [0.0; SKILL_COUNT];
    }

    /// Zero one accumulator.
    pub fn clear_by_skill(&mut self, skill: SkillId) {
        self.points[skill.index()] = 0.0;
    }

    /// Full reset on a revert event: wipes the accumulators and the
    /// policy's per-play-through tracking. `clear()` deliberately does
    /// neither of the latter; scripts clearing the bank mid-session
    /// must not erase flushed-total bookkeeping.
    pub fn revert(&mut self) {
        self.clear();
        self.policy.reset();
    }

    pub(crate) fn raw_points(&self) -> &[f32; SKILL_COUNT] {
        &self.points
    }

    pub(crate) fn set_raw_points(&mut self, points: [f32; SKILL_COUNT]) {
        self.points = points;
    }
}
