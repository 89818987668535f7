//! What the command needs from the host server
//!
//! The server owns players, permissions and items. These traits are the
//! whole surface the command touches.

use crate::core::types::EnchantmentSet;
use crate::enchant::catalog::Enchantment;

/// Whoever issued the command (player, console, command block, ...)
pub trait CommandSender {
    fn send_message(&mut self, message: &str);

    /// `None` for non-player senders
    fn as_player(&mut self) -> Option<&mut dyn Player>;
}

pub trait Player {
    fn has_permission(&self, node: &str) -> bool;

    fn is_op(&self) -> bool;

    /// The item in the main hand; `None` when the hand is empty
    fn main_hand(&mut self) -> Option<&mut dyn EnchantableItem>;
}

pub trait EnchantableItem {
    /// Material name, e.g. `diamond_sword`
    fn material(&self) -> &str;

    /// Host predicate: can `enchantment` be applied to this item at all
    fn can_enchant(&self, enchantment: Enchantment) -> bool;

    /// Current enchantments, or `None` if the item has no metadata
    fn enchantments(&self) -> Option<EnchantmentSet>;

    fn set_enchantments(&mut self, enchantments: EnchantmentSet);
}
