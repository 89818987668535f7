//! Vanilla item kinds and which enchantments they accept
//!
//! A real server answers "can this enchantment go on this item" itself. This
//! table mirrors the vanilla answer so the command can run without one.

use crate::command::host::EnchantableItem;
use crate::core::types::EnchantmentSet;
use crate::enchant::catalog::Enchantment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Helmet,
    Chestplate,
    Leggings,
    Boots,
    Elytra,
    Sword,
    Axe,
    Pickaxe,
    Shovel,
    Hoe,
    Shears,
    Bow,
    Crossbow,
    Trident,
    Mace,
    FishingRod,
    Shield,
    FlintAndSteel,
    Book,
    /// Anything without enchantment targets (blocks, food, ...)
    Other,
}

impl ItemKind {
    /// Classify a material name such as `diamond_sword` or `TURTLE_HELMET`
    pub fn from_material(material: &str) -> Self {
        let m = material.trim().to_ascii_lowercase();
        let exact = match m.as_str() {
            "elytra" => Some(ItemKind::Elytra),
            "shears" => Some(ItemKind::Shears),
            "bow" => Some(ItemKind::Bow),
            "crossbow" => Some(ItemKind::Crossbow),
            "trident" => Some(ItemKind::Trident),
            "mace" => Some(ItemKind::Mace),
            "fishing_rod" => Some(ItemKind::FishingRod),
            "shield" => Some(ItemKind::Shield),
            "flint_and_steel" => Some(ItemKind::FlintAndSteel),
            "book" | "enchanted_book" => Some(ItemKind::Book),
            _ => None,
        };
        if let Some(kind) = exact {
            return kind;
        }

        // Suffix order matters: "pickaxe" ends with "axe"
        let suffixes = [
            ("_helmet", ItemKind::Helmet),
            ("_chestplate", ItemKind::Chestplate),
            ("_leggings", ItemKind::Leggings),
            ("_boots", ItemKind::Boots),
            ("_sword", ItemKind::Sword),
            ("_pickaxe", ItemKind::Pickaxe),
            ("_axe", ItemKind::Axe),
            ("_shovel", ItemKind::Shovel),
            ("_hoe", ItemKind::Hoe),
        ];
        suffixes
            .iter()
            .find(|(suffix, _)| m.ends_with(suffix))
            .map(|(_, kind)| *kind)
            .unwrap_or(ItemKind::Other)
    }

    fn is_armor(self) -> bool {
        matches!(
            self,
            ItemKind::Helmet | ItemKind::Chestplate | ItemKind::Leggings | ItemKind::Boots
        )
    }

    fn is_digger(self) -> bool {
        matches!(
            self,
            ItemKind::Axe | ItemKind::Pickaxe | ItemKind::Shovel | ItemKind::Hoe
        )
    }

    fn is_breakable(self) -> bool {
        !matches!(self, ItemKind::Book | ItemKind::Other)
    }

    /// Whether vanilla lets `enchantment` be applied to this kind of item
    pub fn accepts(self, enchantment: Enchantment) -> bool {
        use Enchantment as E;

        if self == ItemKind::Book {
            return true;
        }

        match enchantment {
            E::Unbreaking | E::Mending | E::VanishingCurse => self.is_breakable(),
            E::BindingCurse => self.is_armor() || self == ItemKind::Elytra,

            E::Protection
            | E::FireProtection
            | E::BlastProtection
            | E::ProjectileProtection
            | E::Thorns => self.is_armor(),
            E::Respiration | E::AquaAffinity => self == ItemKind::Helmet,
            E::SwiftSneak => self == ItemKind::Leggings,
            E::FeatherFalling | E::DepthStrider | E::FrostWalker | E::SoulSpeed => {
                self == ItemKind::Boots
            }

            E::Sharpness => matches!(self, ItemKind::Sword | ItemKind::Axe),
            E::Smite | E::BaneOfArthropods => {
                matches!(self, ItemKind::Sword | ItemKind::Axe | ItemKind::Mace)
            }
            E::FireAspect => matches!(self, ItemKind::Sword | ItemKind::Mace),
            E::Knockback | E::Looting | E::SweepingEdge => self == ItemKind::Sword,

            E::Efficiency => self.is_digger() || self == ItemKind::Shears,
            E::SilkTouch | E::Fortune => self.is_digger(),

            E::Power | E::Punch | E::Flame | E::Infinity => self == ItemKind::Bow,
            E::LuckOfTheSea | E::Lure => self == ItemKind::FishingRod,
            E::Loyalty | E::Impaling | E::Riptide | E::Channeling => self == ItemKind::Trident,
            E::Multishot | E::QuickCharge | E::Piercing => self == ItemKind::Crossbow,
            E::Density | E::Breach | E::WindBurst => self == ItemKind::Mace,
        }
    }

    /// Every enchantment this kind accepts, in catalog order
    pub fn eligible(self) -> Vec<Enchantment> {
        Enchantment::ALL
            .iter()
            .copied()
            .filter(|e| self.accepts(*e))
            .collect()
    }
}

/// In-memory item used by the CLI and tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VanillaItem {
    pub material: String,
    pub kind: ItemKind,
    /// `None` models an item that carries no metadata at all
    pub enchantments: Option<EnchantmentSet>,
}

impl VanillaItem {
    pub fn new(material: &str) -> Self {
        Self {
            material: material.to_ascii_lowercase(),
            kind: ItemKind::from_material(material),
            enchantments: Some(EnchantmentSet::new()),
        }
    }

    /// Builder: start with existing enchantments
    pub fn with_enchantments(mut self, enchantments: EnchantmentSet) -> Self {
        self.enchantments = Some(enchantments);
        self
    }

    /// Builder: drop the item's metadata
    pub fn without_meta(mut self) -> Self {
        self.enchantments = None;
        self
    }
}

impl EnchantableItem for VanillaItem {
    fn material(&self) -> &str {
        &self.material
    }

    fn can_enchant(&self, enchantment: Enchantment) -> bool {
        self.kind.accepts(enchantment)
    }

    fn enchantments(&self) -> Option<EnchantmentSet> {
        self.enchantments.clone()
    }

    fn set_enchantments(&mut self, enchantments: EnchantmentSet) {
        self.enchantments = Some(enchantments);
    }
}
