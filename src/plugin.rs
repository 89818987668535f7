//! Plugin lifecycle: enable loads tables once, commands borrow them

use crate::command::executor::{CommandOutcome, MaxEnchantCommand};
use crate::command::host::CommandSender;
use crate::core::config::MaxEnchantConfig;
use crate::core::error::Result;
use crate::rules::{default_tables, load_tables, EnchantmentTables};

/// Label the plugin registers
pub const COMMAND_LABEL: &str = "maxenchant";

pub struct MaxEnchantPlugin {
    config: MaxEnchantConfig,
    tables: EnchantmentTables,
    enabled: bool,
}

impl MaxEnchantPlugin {
    /// Validate config and load tables (configured file or built-in)
    pub fn enable(config: MaxEnchantConfig) -> Result<Self> {
        config.validate()?;
        let tables = match &config.rules {
            Some(path) => load_tables(path)?,
            None => default_tables()?,
        };
        tracing::info!("MaxEnchant plugin has been enabled!");
        Ok(Self {
            config,
            tables,
            enabled: true,
        })
    }

    /// Enable with caller-supplied tables
    pub fn with_tables(config: MaxEnchantConfig, tables: EnchantmentTables) -> Result<Self> {
        config.validate()?;
        tracing::info!("MaxEnchant plugin has been enabled!");
        Ok(Self {
            config,
            tables,
            enabled: true,
        })
    }

    pub fn disable(&mut self) {
        if self.enabled {
            self.enabled = false;
            tracing::info!("MaxEnchant plugin has been disabled!");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn config(&self) -> &MaxEnchantConfig {
        &self.config
    }

    pub fn tables(&self) -> &EnchantmentTables {
        &self.tables
    }

    pub fn command(&self) -> MaxEnchantCommand<'_> {
        MaxEnchantCommand::new(&self.tables, &self.config)
    }

    /// Dispatch a command label; `None` if it is not ours or we are disabled
    pub fn on_command(
        &self,
        label: &str,
        sender: &mut dyn CommandSender,
    ) -> Option<CommandOutcome> {
        if !self.enabled || !label.eq_ignore_ascii_case(COMMAND_LABEL) {
            return None;
        }
        Some(self.command().execute(sender))
    }
}
