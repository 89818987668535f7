//! MaxEnchant - command line entry point
//!
//! Runs `/maxenchant` against an in-memory item, as if a player holding it
//! had typed the command, and prints the reply and resulting enchantments.

use clap::Parser;
use max_enchant::command::host::{CommandSender, EnchantableItem, Player};
use max_enchant::command::messages::strip_colors;
use max_enchant::core::config::MaxEnchantConfig;
use max_enchant::core::error::{MaxEnchantError, Result};
use max_enchant::core::types::{EnchantmentSet, Level};
use max_enchant::enchant::{Enchantment, VanillaItem};
use max_enchant::plugin::{MaxEnchantPlugin, COMMAND_LABEL};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Apply every compatible enchantment at max level to an item
#[derive(Parser, Debug)]
#[command(name = "max-enchant")]
#[command(about = "Apply every compatible enchantment at its maximum level")]
struct Args {
    /// Material held in the main hand, e.g. diamond_sword
    #[arg(long)]
    item: String,

    /// Enchantment already on the item, as key=level (repeatable)
    #[arg(long = "enchant", value_name = "KEY=LEVEL")]
    enchantments: Vec<String>,

    /// Plugin config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enchantment tables file (TOML); overrides the config's `rules`
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Run as a player without the permission node
    #[arg(long)]
    no_permission: bool,

    /// Print the outcome and final enchantments as JSON
    #[arg(long)]
    json: bool,
}

/// A player at the terminal holding one item
struct TerminalPlayer {
    item: VanillaItem,
    permitted: bool,
    replies: Vec<String>,
}

impl CommandSender for TerminalPlayer {
    fn send_message(&mut self, message: &str) {
        self.replies.push(strip_colors(message));
    }

    fn as_player(&mut self) -> Option<&mut dyn Player> {
        Some(self)
    }
}

impl Player for TerminalPlayer {
    fn has_permission(&self, _node: &str) -> bool {
        self.permitted
    }

    fn is_op(&self) -> bool {
        false
    }

    fn main_hand(&mut self) -> Option<&mut dyn EnchantableItem> {
        Some(&mut self.item)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    outcome: &'a max_enchant::command::CommandOutcome,
    enchantments: Option<EnchantmentSet>,
    replies: &'a [String],
}

fn parse_enchant_arg(arg: &str) -> Result<(Enchantment, Level)> {
    let (key, level) = arg.split_once('=').ok_or_else(|| {
        MaxEnchantError::InvalidArgument(format!("expected KEY=LEVEL, got '{}'", arg))
    })?;
    let enchantment: Enchantment = key
        .parse()
        .map_err(|e| MaxEnchantError::InvalidArgument(format!("{}", e)))?;
    let level: Level = level
        .trim()
        .parse()
        .map_err(|_| MaxEnchantError::InvalidArgument(format!("invalid level in '{}'", arg)))?;
    if level == 0 {
        return Err(MaxEnchantError::InvalidArgument(format!(
            "level must be at least 1 in '{}'",
            arg
        )));
    }
    Ok((enchantment, level))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("max_enchant=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MaxEnchantConfig::load(path)?,
        None => MaxEnchantConfig::default(),
    };
    if args.rules.is_some() {
        config.rules = args.rules.clone();
    }

    let existing = args
        .enchantments
        .iter()
        .map(|arg| parse_enchant_arg(arg))
        .collect::<Result<EnchantmentSet>>()?;

    let plugin = MaxEnchantPlugin::enable(config)?;

    let mut player = TerminalPlayer {
        item: VanillaItem::new(&args.item).with_enchantments(existing),
        permitted: !args.no_permission,
        replies: Vec::new(),
    };

    let Some(outcome) = plugin.on_command(COMMAND_LABEL, &mut player) else {
        return Ok(());
    };

    if args.json {
        let report = JsonReport {
            outcome: &outcome,
            enchantments: player.item.enchantments(),
            replies: &player.replies,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for reply in &player.replies {
            println!("{}", reply);
        }
        if let Some(enchantments) = player.item.enchantments() {
            println!("Enchantments: {}", enchantments);
        }
    }

    Ok(())
}
