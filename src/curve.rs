//! Skill improvement curve arithmetic
//!
//! The host levels a skill when accumulated use crosses
//! `improve_mult * level^use_curve_exponent + improve_offset`. The
//! level-capped flush policy uses the same formula to bound how much
//! banked experience one flush may release.

use serde::{Deserialize, Serialize};

use crate::core::types::{SkillId, SKILL_COUNT};

/// Per-skill improvement curve coefficients, as configured by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveParams {
    pub improve_mult: f32,
    pub improve_offset: f32,
}

/// Full curve configuration: one coefficient pair per skill (absent for
/// skills the host never configured) and a single global exponent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCurves {
    params: [Option<CurveParams>; SKILL_COUNT],
    pub use_curve_exponent: f32,
}

impl SkillCurves {
    pub fn new(use_curve_exponent: f32) -> Self {
        Self {
            params: [None; SKILL_COUNT],
            use_curve_exponent,
        }
    }

    /// Uniform curves across all skills. Convenient for tests and the
    /// demo binary.
    pub fn uniform(params: CurveParams, use_curve_exponent: f32) -> Self {
        Self {
            params: [Some(params); SKILL_COUNT],
            use_curve_exponent,
        }
    }

    pub fn set(&mut self, skill: SkillId, params: CurveParams) {
        self.params[skill.index()] = Some(params);
    }

    pub fn get(&self, skill: SkillId) -> Option<&CurveParams> {
        self.params[skill.index()].as_ref()
    }

    /// Experience required to go from `level` to `level + 1` for one
    /// skill. Zero when the skill has no configured curve.
    pub fn experience_for_level(&self, skill: SkillId, level: u32) -> f32 {
        experience_for_level(self.get(skill), self.use_curve_exponent, level)
    }
}

/// Points needed to clear one level of a skill's improvement curve.
///
/// Pure; returns 0 when curve parameters are unavailable.
pub fn experience_for_level(params: Option<&CurveParams>, exponent: f32, level: u32) -> f32 {
    let Some(params) = params else {
        return 0.0;
    };
    params.improve_mult * (level as f32).powf(exponent) + params.improve_offset
}

/// Running cumulative experience-to-level total for one skill.
///
/// Advanced incrementally as the tracked character level rises, so a
/// flush never recomputes the full sum from scratch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LevelAllowance {
    pub level: u16,
    pub points: f32,
}

impl LevelAllowance {
    /// Fold in every level between the last tracked one and
    /// `new_level_cap`, adding the per-level requirement for each.
    pub fn advance(&mut self, curves: &SkillCurves, skill: SkillId, new_level_cap: u16) {
        while self.level < new_level_cap {
            self.level += 1;
            self.points += curves.experience_for_level(skill, self.level as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curves() -> SkillCurves {
        SkillCurves::uniform(
            CurveParams {
                improve_mult: 2.0,
                improve_offset: 10.0,
            },
            1.5,
        )
    }

    #[test]
    fn test_experience_for_level_formula() {
        let c = curves();
        // 2 * 4^1.5 + 10 = 2 * 8 + 10 = 26
        let exp = c.experience_for_level(SkillId::Melee, 4);
        assert!((exp - 26.0).abs() < 1e-4);
    }

    #[test]
    fn test_missing_params_yield_zero() {
        let c = SkillCurves::new(1.5);
        assert_eq!(c.experience_for_level(SkillId::Melee, 10), 0.0);
        assert_eq!(experience_for_level(None, 1.5, 10), 0.0);
    }

    #[test]
    fn test_allowance_advances_incrementally() {
        let c = curves();
        let mut allowance = LevelAllowance::default();

        allowance.advance(&c, SkillId::Melee, 3);
        let after_three = allowance.points;
        assert_eq!(allowance.level, 3);
        let expected: f32 = (1..=3)
            .map(|l| c.experience_for_level(SkillId::Melee, l))
            .sum();
        assert!((after_three - expected).abs() < 1e-4);

        // Advancing to the same cap adds nothing
        allowance.advance(&c, SkillId::Melee, 3);
        assert_eq!(allowance.points, after_three);

        // Advancing past it adds only the new levels
        allowance.advance(&c, SkillId::Melee, 5);
        let expected: f32 = (1..=5)
            .map(|l| c.experience_for_level(SkillId::Melee, l))
            .sum();
        assert!((allowance.points - expected).abs() < 1e-4);
    }
}
