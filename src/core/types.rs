//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Raw actor-value id of the first trainable skill.
///
/// The host actor-value table reserves ids 0..=5 for attributes
/// (health, stamina, and so on); skills start at 6.
pub const FIRST_SKILL_RAW: u32 = 6;

/// Raw actor-value id of the last trainable skill.
pub const LAST_SKILL_RAW: u32 = 23;

/// Number of trainable skills.
pub const SKILL_COUNT: usize = (LAST_SKILL_RAW - FIRST_SKILL_RAW + 1) as usize;

/// Identifier for a trainable skill.
///
/// Discriminants are raw actor-value ids in the host's shared id space,
/// contiguous from `FIRST_SKILL_RAW` to `LAST_SKILL_RAW`. Buffer storage
/// is indexed by `index()`, which subtracts the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum SkillId {
    Melee = 6,
    Ranged = 7,
    Block = 8,
    Smithing = 9,
    LightArmor = 10,
    HeavyArmor = 11,
    Sneak = 12,
    Lockpicking = 13,
    Haggling = 14,
    Speech = 15,
    Alchemy = 16,
    Medicine = 17,
    Leadership = 18,
    Tactics = 19,
    Riding = 20,
    Athletics = 21,
    Lore = 22,
    Enchanting = 23,
}

impl SkillId {
    /// All skills in ascending id order. Flush iteration follows this
    /// order so runs are reproducible.
    pub const ALL: [SkillId; SKILL_COUNT] = [
        Self::Melee,
        Self::Ranged,
        Self::Block,
        Self::Smithing,
        Self::LightArmor,
        Self::HeavyArmor,
        Self::Sneak,
        Self::Lockpicking,
        Self::Haggling,
        Self::Speech,
        Self::Alchemy,
        Self::Medicine,
        Self::Leadership,
        Self::Tactics,
        Self::Riding,
        Self::Athletics,
        Self::Lore,
        Self::Enchanting,
    ];

    /// Resolve a raw actor-value id. Returns None for ids outside the
    /// trainable range.
    pub const fn from_raw(raw: u32) -> Option<SkillId> {
        if raw >= FIRST_SKILL_RAW && raw <= LAST_SKILL_RAW {
            Some(Self::ALL[(raw - FIRST_SKILL_RAW) as usize])
        } else {
            None
        }
    }

    /// Resolve a skill by its display name (what scripts pass in).
    pub fn from_name(name: &str) -> Option<SkillId> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Raw actor-value id in the host's id space.
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Zero-based buffer index.
    pub const fn index(self) -> usize {
        (self as u32 - FIRST_SKILL_RAW) as usize
    }

    /// Get human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Melee => "Melee",
            Self::Ranged => "Ranged",
            Self::Block => "Block",
            Self::Smithing => "Smithing",
            Self::LightArmor => "Light Armor",
            Self::HeavyArmor => "Heavy Armor",
            Self::Sneak => "Sneak",
            Self::Lockpicking => "Lockpicking",
            Self::Haggling => "Haggling",
            Self::Speech => "Speech",
            Self::Alchemy => "Alchemy",
            Self::Medicine => "Medicine",
            Self::Leadership => "Leadership",
            Self::Tactics => "Tactics",
            Self::Riding => "Riding",
            Self::Athletics => "Athletics",
            Self::Lore => "Lore",
            Self::Enchanting => "Enchanting",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending_and_contiguous() {
        for (i, skill) in SkillId::ALL.iter().enumerate() {
            assert_eq!(skill.raw(), FIRST_SKILL_RAW + i as u32);
            assert_eq!(skill.index(), i);
        }
    }

    #[test]
    fn test_from_raw_in_range() {
        assert_eq!(SkillId::from_raw(6), Some(SkillId::Melee));
        assert_eq!(SkillId::from_raw(23), Some(SkillId::Enchanting));
        assert_eq!(SkillId::from_raw(12), Some(SkillId::Sneak));
    }

    #[test]
    fn test_from_raw_out_of_range() {
        assert_eq!(SkillId::from_raw(0), None);
        assert_eq!(SkillId::from_raw(5), None);
        assert_eq!(SkillId::from_raw(24), None);
        assert_eq!(SkillId::from_raw(u32::MAX), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(SkillId::from_name("Smithing"), Some(SkillId::Smithing));
        assert_eq!(SkillId::from_name("Light Armor"), Some(SkillId::LightArmor));
        assert_eq!(SkillId::from_name("NotASkill"), None);
    }

    #[test]
    fn test_skill_count_matches_range() {
        assert_eq!(SKILL_COUNT, 18);
        assert_eq!(SkillId::ALL.len(), SKILL_COUNT);
    }
}
