//! Reply messages and chat color translation

use crate::command::executor::CommandOutcome;
use crate::core::config::MaxEnchantConfig;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Section sign used by the chat format for color and style codes
pub const SECTION: char = '§';

fn alt_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"&([0-9a-fk-orxA-FK-ORX])").expect("alt code regex is valid")
    })
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"#[a-fA-F0-9]{6}").expect("hex regex is valid"))
}

fn section_code_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"§.").expect("section code regex is valid"))
}

/// Translate `&c`-style codes and `#RRGGBB` colors into section codes
///
/// `#A72BFF` becomes `§x§A§7§2§B§F§F`.
pub fn colorize(message: &str) -> String {
    let translated = alt_code_pattern().replace_all(message, |caps: &Captures| {
        format!("{}{}", SECTION, caps[1].to_ascii_lowercase())
    });

    hex_pattern()
        .replace_all(&translated, |caps: &Captures| {
            let mut out = format!("{}x", SECTION);
            for c in caps[0][1..].chars() {
                out.push(SECTION);
                out.push(c);
            }
            out
        })
        .into_owned()
}

/// Remove all section codes, for plain text output
pub fn strip_colors(message: &str) -> String {
    section_code_pattern().replace_all(message, "").into_owned()
}

/// Turn `DIAMOND_SWORD` into `diamond sword`
pub fn item_display_name(material: &str) -> String {
    material.to_lowercase().replace('_', " ")
}

/// Message templates colored from the plugin config
#[derive(Debug, Clone)]
pub struct Messages {
    primary: String,
    secondary: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self::from_config(&MaxEnchantConfig::default())
    }
}

impl Messages {
    pub fn from_config(config: &MaxEnchantConfig) -> Self {
        Self {
            primary: config.primary_color.clone(),
            secondary: config.secondary_color.clone(),
        }
    }

    /// Uncolored template text for an outcome
    pub fn template(&self, outcome: &CommandOutcome) -> String {
        let p = &self.primary;
        let s = &self.secondary;
        match outcome {
            CommandOutcome::PlayersOnly => {
                "&cThis command can only be used by players!".to_string()
            }
            CommandOutcome::NoItem => {
                format!("{p}You must be holding an item to use this command!")
            }
            CommandOutcome::NoPermission => {
                format!("{p}You don't have permission to use this command!")
            }
            CommandOutcome::Applied { added, material } => format!(
                "{p}Added {s}{count}{p} enchantments to your {s}{item}{p}!",
                count = added.len(),
                item = item_display_name(material),
            ),
            CommandOutcome::NothingApplied { .. } => {
                format!("{p}No new enchantments could be applied to this item!")
            }
        }
    }

    /// Final chat text for an outcome
    pub fn render(&self, outcome: &CommandOutcome) -> String {
        colorize(&self.template(outcome))
    }
}
