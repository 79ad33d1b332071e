//! Progression interception
//!
//! The host calls its skill-advancement routine whenever the player
//! earns experience. The hook sits in front of that routine: it banks
//! the configured share of each delta and forwards only the remainder,
//! so the banked part waits for a rest event.

use tracing::debug;

use crate::buffer::ExperienceBuffer;
use crate::core::types::SkillId;
use crate::host::SkillHost;

/// What the hook did with an intercepted delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterceptOutcome {
    /// Banked the deferred share and forwarded the remainder.
    Split,
    /// Suppressed call: the full delta was forwarded untouched.
    PassedThrough,
    /// `raw_id` is not a trainable skill. Nothing was banked or
    /// forwarded; the caller must route the delta to the original
    /// advancement entry point itself.
    Unhandled,
}

/// Splits raw progression deltas between the buffer and the host.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionHook {
    /// Share of each delta that is banked, in [0, 1].
    pub deferred_share: f32,
}

impl ProgressionHook {
    pub fn new(deferred_share: f32) -> Self {
        Self {
            deferred_share: deferred_share.clamp(0.0, 1.0),
        }
    }

    /// Intercept one advancement call.
    ///
    /// `raw_id` is the host's actor-value id. Calls the caller marks as
    /// suppressed (console commands, other actors) pass through to the
    /// host untouched. Non-skill ids come back `Unhandled` and must be
    /// routed by the caller; dropping them would lose the delta. The
    /// two flag words are forwarded as received.
    #[must_use]
    pub fn intercept(
        &self,
        buffer: &mut ExperienceBuffer,
        host: &mut dyn SkillHost,
        raw_id: u32,
        points: f32,
        suppressed: bool,
        flag_a: u32,
        flag_b: u32,
    ) -> InterceptOutcome {
        match SkillId::from_raw(raw_id) {
            Some(skill) if !suppressed => {
                let banked = self.deferred_share * points;
                buffer.add_experience(skill, banked);
                debug!(skill = skill.name(), banked, "banked experience share");

                // Forward the rest immediately, even when it is zero;
                // skipping the call entirely changes host-side
                // bookkeeping.
                host.advance_skill(skill, (1.0 - self.deferred_share) * points, flag_a, flag_b);
                InterceptOutcome::Split
            }
            Some(skill) => {
                host.advance_skill(skill, points, flag_a, flag_b);
                InterceptOutcome::PassedThrough
            }
            // There is no SkillId to forward through the trait, so the
            // delta stays the caller's responsibility.
            None => InterceptOutcome::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_split_partitions_delta() {
        let hook = ProgressionHook::new(0.75);
        let mut buf = ExperienceBuffer::new();
        let mut host = RecordingHost::new();

        let outcome = hook.intercept(&mut buf, &mut host, SkillId::Melee.raw(), 40.0, false, 0, 0);

        assert_eq!(outcome, InterceptOutcome::Split);
        assert!((buf.experience(SkillId::Melee) - 30.0).abs() < 1e-6);
        assert!((host.applied_to(SkillId::Melee) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_full_share_forwards_zero() {
        let hook = ProgressionHook::new(1.0);
        let mut buf = ExperienceBuffer::new();
        let mut host = RecordingHost::new();

        let outcome = hook.intercept(&mut buf, &mut host, SkillId::Sneak.raw(), 12.0, false, 0, 0);

        assert_eq!(outcome, InterceptOutcome::Split);
        assert!((buf.experience(SkillId::Sneak) - 12.0).abs() < 1e-6);
        assert_eq!(host.calls.len(), 1);
        assert_eq!(host.calls[0].1, 0.0);
    }

    #[test]
    fn test_suppressed_call_passes_through() {
        let hook = ProgressionHook::new(1.0);
        let mut buf = ExperienceBuffer::new();
        let mut host = RecordingHost::new();

        let outcome = hook.intercept(&mut buf, &mut host, SkillId::Melee.raw(), 25.0, true, 0, 0);

        assert_eq!(outcome, InterceptOutcome::PassedThrough);
        assert_eq!(buf.experience(SkillId::Melee), 0.0);
        assert!((host.applied_to(SkillId::Melee) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_id_reported_unhandled() {
        let hook = ProgressionHook::new(1.0);
        let mut buf = ExperienceBuffer::new();
        let mut host = RecordingHost::new();

        // Id 3 is a host attribute, not a skill. The hook must not
        // swallow the delta: it touches nothing and tells the caller
        // routing is still theirs.
        let outcome = hook.intercept(&mut buf, &mut host, 3, 25.0, false, 0, 0);

        assert_eq!(outcome, InterceptOutcome::Unhandled);
        for skill in SkillId::ALL {
            assert_eq!(buf.experience(skill), 0.0);
        }
        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_share_is_clamped() {
        let hook = ProgressionHook::new(1.7);
        assert_eq!(hook.deferred_share, 1.0);
        let hook = ProgressionHook::new(-0.3);
        assert_eq!(hook.deferred_share, 0.0);
    }
}
