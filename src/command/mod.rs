//! The `/maxenchant` command
//!
//! Host traits -> permission and item checks -> selection -> reply:
//! CommandSender -> MaxEnchantCommand -> EnchantmentSelector -> Messages

pub mod executor;
pub mod host;
pub mod messages;

pub use executor::{apply_max_enchantments, CommandOutcome, MaxEnchantCommand};
pub use host::{CommandSender, EnchantableItem, Player};
pub use messages::{colorize, strip_colors, Messages};
