use thiserror::Error;

/// Integrity errors in enchantment tables or plugin configuration.
///
/// Raised once at load time. A table that passes validation can never make
/// the selector fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown enchantment '{name}' in [{section}]")]
    UnknownEnchantment { section: String, name: String },

    #[error("Conflict group '{group}' needs at least two distinct enchantments")]
    DegenerateGroup { group: String },

    #[error("Enchantment '{0}' cannot conflict with itself")]
    SelfConflict(String),

    #[error("Asymmetric conflict: '{from}' lists '{to}' but '{to}' does not list '{from}'")]
    AsymmetricConflict { from: String, to: String },

    #[error("Enchantment '{name}' is listed more than once in [{section}]")]
    DuplicateEntry { section: String, name: String },

    #[error("Max level for '{0}' must be at least 1")]
    ZeroMaxLevel(String),

    #[error("Invalid color '{0}': expected #RRGGBB")]
    InvalidColor(String),

    #[error("Permission node must not be empty")]
    EmptyPermission,
}

#[derive(Error, Debug)]
pub enum MaxEnchantError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, MaxEnchantError>;
