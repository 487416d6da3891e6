use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChatCommands, GroupCommands, MarketCommands};

/// Chats and a second-hand marketplace in the terminal
///
/// Souk shows your conversations, lets you browse and filter products page
/// by page, and walks you through listing an item or starting a group chat.
/// Running it without a command shows the chat list.
#[derive(Parser)]
#[command(version, about, name = "souk")]
pub struct Args {
    /// Path to a catalog JSON file. Defaults to
    /// $XDG_DATA_HOME/souk/catalog.json, then to the bundled catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands, one per tab of the app plus the tab bar itself
#[derive(Subcommand)]
pub enum Commands {
    /// Browse conversations
    #[command(alias = "c")]
    Chat {
        #[command(subcommand)]
        command: ChatCommands,
    },
    /// Browse products and list your own
    #[command(alias = "m")]
    Market {
        #[command(subcommand)]
        command: MarketCommands,
    },
    /// Start group chats
    #[command(alias = "g")]
    Group {
        #[command(subcommand)]
        command: GroupCommands,
    },
    /// Show your seller profile
    #[command(alias = "p")]
    Profile,
    /// Show the navigation bar with the unread badge
    Tabs,
}
