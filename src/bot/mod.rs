//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `update`: Inbound webhook payload types
//! - `command`: The fixed menu commands
//! - `ui_builder`: Composes canned replies in the active markup dialect
//! - `router`: Chooses between a canned reply and a completion
//! - `message_handler`: Ties an update to the router and the messenger

pub mod command;
pub mod message_handler;
pub mod router;
pub mod ui_builder;
pub mod update;

// Re-export the pieces used by the server and main.rs
pub use command::Command;
pub use message_handler::{message_handler, parse_update};
pub use router::CommandRouter;
pub use update::WebhookUpdate;
