//! The enchantment universe
//!
//! Every vanilla enchantment with its stable key and intrinsic max level.
//! Keys are the identifiers used in data files and the tie-break order for
//! equally ranked candidates, so they must never change.

use crate::core::types::Level;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enchantment {
    // Armor
    Protection,
    FireProtection,
    FeatherFalling,
    BlastProtection,
    ProjectileProtection,
    Respiration,
    AquaAffinity,
    Thorns,
    DepthStrider,
    FrostWalker,
    BindingCurse,
    SoulSpeed,
    SwiftSneak,
    // Melee
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    SweepingEdge,
    // Tools
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    // Bow
    Power,
    Punch,
    Flame,
    Infinity,
    // Fishing rod
    LuckOfTheSea,
    Lure,
    // Trident
    Loyalty,
    Impaling,
    Riptide,
    Channeling,
    // Crossbow
    Multishot,
    QuickCharge,
    Piercing,
    // Mace
    Density,
    Breach,
    WindBurst,
    // Any
    Mending,
    VanishingCurse,
}

impl Enchantment {
    pub const ALL: [Enchantment; 42] = [
        Enchantment::Protection,
        Enchantment::FireProtection,
        Enchantment::FeatherFalling,
        Enchantment::BlastProtection,
        Enchantment::ProjectileProtection,
        Enchantment::Respiration,
        Enchantment::AquaAffinity,
        Enchantment::Thorns,
        Enchantment::DepthStrider,
        Enchantment::FrostWalker,
        Enchantment::BindingCurse,
        Enchantment::SoulSpeed,
        Enchantment::SwiftSneak,
        Enchantment::Sharpness,
        Enchantment::Smite,
        Enchantment::BaneOfArthropods,
        Enchantment::Knockback,
        Enchantment::FireAspect,
        Enchantment::Looting,
        Enchantment::SweepingEdge,
        Enchantment::Efficiency,
        Enchantment::SilkTouch,
        Enchantment::Unbreaking,
        Enchantment::Fortune,
        Enchantment::Power,
        Enchantment::Punch,
        Enchantment::Flame,
        Enchantment::Infinity,
        Enchantment::LuckOfTheSea,
        Enchantment::Lure,
        Enchantment::Loyalty,
        Enchantment::Impaling,
        Enchantment::Riptide,
        Enchantment::Channeling,
        Enchantment::Multishot,
        Enchantment::QuickCharge,
        Enchantment::Piercing,
        Enchantment::Density,
        Enchantment::Breach,
        Enchantment::WindBurst,
        Enchantment::Mending,
        Enchantment::VanishingCurse,
    ];

    /// Stable snake_case identifier
    pub fn key(self) -> &'static str {
        match self {
            Enchantment::Protection => "protection",
            Enchantment::FireProtection => "fire_protection",
            Enchantment::FeatherFalling => "feather_falling",
            Enchantment::BlastProtection => "blast_protection",
            Enchantment::ProjectileProtection => "projectile_protection",
            Enchantment::Respiration => "respiration",
            Enchantment::AquaAffinity => "aqua_affinity",
            Enchantment::Thorns => "thorns",
            Enchantment::DepthStrider => "depth_strider",
            Enchantment::FrostWalker => "frost_walker",
            Enchantment::BindingCurse => "binding_curse",
            Enchantment::SoulSpeed => "soul_speed",
            Enchantment::SwiftSneak => "swift_sneak",
            Enchantment::Sharpness => "sharpness",
            Enchantment::Smite => "smite",
            Enchantment::BaneOfArthropods => "bane_of_arthropods",
            Enchantment::Knockback => "knockback",
            Enchantment::FireAspect => "fire_aspect",
            Enchantment::Looting => "looting",
            Enchantment::SweepingEdge => "sweeping_edge",
            Enchantment::Efficiency => "efficiency",
            Enchantment::SilkTouch => "silk_touch",
            Enchantment::Unbreaking => "unbreaking",
            Enchantment::Fortune => "fortune",
            Enchantment::Power => "power",
            Enchantment::Punch => "punch",
            Enchantment::Flame => "flame",
            Enchantment::Infinity => "infinity",
            Enchantment::LuckOfTheSea => "luck_of_the_sea",
            Enchantment::Lure => "lure",
            Enchantment::Loyalty => "loyalty",
            Enchantment::Impaling => "impaling",
            Enchantment::Riptide => "riptide",
            Enchantment::Channeling => "channeling",
            Enchantment::Multishot => "multishot",
            Enchantment::QuickCharge => "quick_charge",
            Enchantment::Piercing => "piercing",
            Enchantment::Density => "density",
            Enchantment::Breach => "breach",
            Enchantment::WindBurst => "wind_burst",
            Enchantment::Mending => "mending",
            Enchantment::VanishingCurse => "vanishing_curse",
        }
    }

    /// Human-readable name as shown in game
    pub fn display_name(self) -> &'static str {
        match self {
            Enchantment::Protection => "Protection",
            Enchantment::FireProtection => "Fire Protection",
            Enchantment::FeatherFalling => "Feather Falling",
            Enchantment::BlastProtection => "Blast Protection",
            Enchantment::ProjectileProtection => "Projectile Protection",
            Enchantment::Respiration => "Respiration",
            Enchantment::AquaAffinity => "Aqua Affinity",
            Enchantment::Thorns => "Thorns",
            Enchantment::DepthStrider => "Depth Strider",
            Enchantment::FrostWalker => "Frost Walker",
            Enchantment::BindingCurse => "Curse of Binding",
            Enchantment::SoulSpeed => "Soul Speed",
            Enchantment::SwiftSneak => "Swift Sneak",
            Enchantment::Sharpness => "Sharpness",
            Enchantment::Smite => "Smite",
            Enchantment::BaneOfArthropods => "Bane of Arthropods",
            Enchantment::Knockback => "Knockback",
            Enchantment::FireAspect => "Fire Aspect",
            Enchantment::Looting => "Looting",
            Enchantment::SweepingEdge => "Sweeping Edge",
            Enchantment::Efficiency => "Efficiency",
            Enchantment::SilkTouch => "Silk Touch",
            Enchantment::Unbreaking => "Unbreaking",
            Enchantment::Fortune => "Fortune",
            Enchantment::Power => "Power",
            Enchantment::Punch => "Punch",
            Enchantment::Flame => "Flame",
            Enchantment::Infinity => "Infinity",
            Enchantment::LuckOfTheSea => "Luck of the Sea",
            Enchantment::Lure => "Lure",
            Enchantment::Loyalty => "Loyalty",
            Enchantment::Impaling => "Impaling",
            Enchantment::Riptide => "Riptide",
            Enchantment::Channeling => "Channeling",
            Enchantment::Multishot => "Multishot",
            Enchantment::QuickCharge => "Quick Charge",
            Enchantment::Piercing => "Piercing",
            Enchantment::Density => "Density",
            Enchantment::Breach => "Breach",
            Enchantment::WindBurst => "Wind Burst",
            Enchantment::Mending => "Mending",
            Enchantment::VanishingCurse => "Curse of Vanishing",
        }
    }

    /// Vanilla maximum level
    pub fn max_level(self) -> Level {
        match self {
            Enchantment::Sharpness
            | Enchantment::Smite
            | Enchantment::BaneOfArthropods
            | Enchantment::Efficiency
            | Enchantment::Power
            | Enchantment::Impaling
            | Enchantment::Density => 5,

            Enchantment::Protection
            | Enchantment::FireProtection
            | Enchantment::FeatherFalling
            | Enchantment::BlastProtection
            | Enchantment::ProjectileProtection
            | Enchantment::Piercing
            | Enchantment::Breach => 4,

            Enchantment::Respiration
            | Enchantment::Thorns
            | Enchantment::DepthStrider
            | Enchantment::SoulSpeed
            | Enchantment::SwiftSneak
            | Enchantment::Looting
            | Enchantment::SweepingEdge
            | Enchantment::Unbreaking
            | Enchantment::Fortune
            | Enchantment::LuckOfTheSea
            | Enchantment::Lure
            | Enchantment::Loyalty
            | Enchantment::Riptide
            | Enchantment::QuickCharge
            | Enchantment::WindBurst => 3,

            Enchantment::FrostWalker
            | Enchantment::Knockback
            | Enchantment::FireAspect
            | Enchantment::Punch => 2,

            Enchantment::AquaAffinity
            | Enchantment::BindingCurse
            | Enchantment::SilkTouch
            | Enchantment::Flame
            | Enchantment::Infinity
            | Enchantment::Channeling
            | Enchantment::Multishot
            | Enchantment::Mending
            | Enchantment::VanishingCurse => 1,
        }
    }
}

impl std::fmt::Display for Enchantment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error for an unrecognized enchantment key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEnchantment(pub String);

impl std::fmt::Display for UnknownEnchantment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown enchantment '{}'", self.0)
    }
}

impl std::error::Error for UnknownEnchantment {}

impl FromStr for Enchantment {
    type Err = UnknownEnchantment;

    /// Accepts the stable key, case-insensitive, with `-` or ` ` in place of `_`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Enchantment::ALL
            .iter()
            .copied()
            .find(|e| e.key() == normalized)
            .ok_or_else(|| UnknownEnchantment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_is_complete_and_ordered() {
        let unique: HashSet<_> = Enchantment::ALL.iter().collect();
        assert_eq!(unique.len(), Enchantment::ALL.len());
        assert!(Enchantment::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_keys_are_unique_and_round_trip() {
        let keys: HashSet<_> = Enchantment::ALL.iter().map(|e| e.key()).collect();
        assert_eq!(keys.len(), Enchantment::ALL.len());
        for e in Enchantment::ALL {
            assert_eq!(e.key().parse::<Enchantment>(), Ok(e));
        }
    }

    #[test]
    fn test_keys_match_serde_names() {
        for e in Enchantment::ALL {
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, format!("\"{}\"", e.key()));
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(
            "Fire Protection".parse::<Enchantment>(),
            Ok(Enchantment::FireProtection)
        );
        assert_eq!(
            "BANE-OF-ARTHROPODS".parse::<Enchantment>(),
            Ok(Enchantment::BaneOfArthropods)
        );
        assert!("sharpnes".parse::<Enchantment>().is_err());
    }

    #[test]
    fn test_vanilla_max_levels() {
        assert_eq!(Enchantment::Protection.max_level(), 4);
        assert_eq!(Enchantment::Sharpness.max_level(), 5);
        assert_eq!(Enchantment::Mending.max_level(), 1);
        assert_eq!(Enchantment::FrostWalker.max_level(), 2);
        assert!(Enchantment::ALL.iter().all(|e| e.max_level() >= 1));
    }
}
