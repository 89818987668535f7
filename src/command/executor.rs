//! `/maxenchant` execution - checks the sender, enchants the held item

use crate::command::host::{CommandSender, EnchantableItem};
use crate::command::messages::Messages;
use crate::core::config::MaxEnchantConfig;
use crate::core::types::Level;
use crate::enchant::catalog::Enchantment;
use crate::enchant::selector::{EnchantmentSelector, Selection};
use crate::rules::tables::EnchantmentTables;
use serde::Serialize;

/// Result of running the command once
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// Sender is not a player
    PlayersOnly,
    /// Main hand is empty
    NoItem,
    /// Lacks the permission node and is not op
    NoPermission,
    /// At least one enchantment was added to the item
    Applied {
        added: Vec<(Enchantment, Level)>,
        material: String,
    },
    /// Item left as it was
    NothingApplied { material: String },
}

impl CommandOutcome {
    pub fn added_count(&self) -> usize {
        match self {
            CommandOutcome::Applied { added, .. } => added.len(),
            _ => 0,
        }
    }
}

/// Executes `/maxenchant` against a fixed set of tables
pub struct MaxEnchantCommand<'a> {
    tables: &'a EnchantmentTables,
    permission: String,
    messages: Messages,
}

impl<'a> MaxEnchantCommand<'a> {
    pub fn new(tables: &'a EnchantmentTables, config: &MaxEnchantConfig) -> Self {
        Self {
            tables,
            permission: config.permission.clone(),
            messages: Messages::from_config(config),
        }
    }

    /// Run the command and send exactly one reply to the sender
    pub fn execute(&self, sender: &mut dyn CommandSender) -> CommandOutcome {
        let outcome = self.run(sender);
        sender.send_message(&self.messages.render(&outcome));
        outcome
    }

    fn run(&self, sender: &mut dyn CommandSender) -> CommandOutcome {
        let Some(player) = sender.as_player() else {
            return CommandOutcome::PlayersOnly;
        };
        let allowed = player.has_permission(&self.permission) || player.is_op();

        let Some(item) = player.main_hand() else {
            return CommandOutcome::NoItem;
        };
        if is_air(item.material()) {
            return CommandOutcome::NoItem;
        }

        if !allowed {
            tracing::debug!("Denied /maxenchant: missing {}", self.permission);
            return CommandOutcome::NoPermission;
        }

        let material = item.material().to_string();
        match apply_max_enchantments(self.tables, item) {
            Some(selection) if !selection.is_unchanged() => {
                tracing::info!(
                    "Added {} enchantments to {}",
                    selection.added_count(),
                    material
                );
                CommandOutcome::Applied {
                    added: selection.added,
                    material,
                }
            }
            _ => CommandOutcome::NothingApplied { material },
        }
    }
}

fn is_air(material: &str) -> bool {
    material.is_empty() || material.eq_ignore_ascii_case("air")
}

/// Select over every enchantment the item accepts and write the result back
///
/// Returns `None` without touching the item when it has no metadata.
pub fn apply_max_enchantments(
    tables: &EnchantmentTables,
    item: &mut dyn EnchantableItem,
) -> Option<Selection> {
    let current = item.enchantments()?;
    let eligible: Vec<Enchantment> = Enchantment::ALL
        .iter()
        .copied()
        .filter(|e| item.can_enchant(*e))
        .collect();

    let selection = EnchantmentSelector::new(tables).select(eligible, &current);
    if !selection.is_unchanged() {
        item.set_enchantments(selection.updated.clone());
    }
    Some(selection)
}
