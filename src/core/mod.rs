pub mod config;
pub mod error;
pub mod types;

pub use config::MaxEnchantConfig;
pub use error::{ConfigError, MaxEnchantError, Result};
pub use types::{EnchantmentSet, Level, Rank};
