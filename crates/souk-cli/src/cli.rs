//! Command-line argument wrappers.
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! interface-agnostic parameter struct from `souk_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Marketplace handlers
//! ```
//!
//! Help text, aliases and value delimiters live here; validation that
//! depends on the catalog (known categories, direct contacts) stays in the
//! core.

use clap::{Args, Subcommand, ValueEnum};
use souk_core::{
    models::{Condition, ALL_CATEGORY_ID},
    params::{BrowseProducts, CreateGroup, Id, ListChats, SellProduct},
    DEFAULT_PAGE_SIZE,
};

/// List chats
#[derive(Args)]
pub struct ListChatsArgs {
    #[arg(short, long, help = "Only chats whose name contains this text")]
    pub search: Option<String>,
}

impl From<ListChatsArgs> for ListChats {
    fn from(val: ListChatsArgs) -> Self {
        ListChats {
            search: val.search.unwrap_or_default(),
        }
    }
}

/// Open a conversation
#[derive(Args)]
pub struct ShowChatArgs {
    #[arg(help = "Identifier of the chat to open")]
    pub id: String,
}

impl From<ShowChatArgs> for Id {
    fn from(val: ShowChatArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ChatCommands {
    /// List chats, optionally filtered by name
    #[command(alias = "l")]
    List(ListChatsArgs),
    /// Open a conversation
    #[command(alias = "s")]
    Show(ShowChatArgs),
}

/// Browse the product grid
///
/// Products are filtered by title and category and shown one page at a
/// time. `--pages` loads that many pages, the way scrolling to the end of
/// the grid loads the next one.
#[derive(Args)]
pub struct BrowseArgs {
    #[arg(short, long, help = "Only products whose title contains this text")]
    pub search: Option<String>,
    #[arg(
        short,
        long,
        default_value = ALL_CATEGORY_ID,
        help = "Category id, see `souk market categories`"
    )]
    pub category: String,
    #[arg(long, default_value_t = 1, help = "Number of pages to load")]
    pub pages: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE.get(), help = "Products per page")]
    pub page_size: usize,
}

impl From<BrowseArgs> for BrowseProducts {
    fn from(val: BrowseArgs) -> Self {
        BrowseProducts {
            search: val.search.unwrap_or_default(),
            category: val.category,
            pages: val.pages,
            page_size: val.page_size,
        }
    }
}

/// List a product for sale
///
/// Runs the listing wizard in one go: photos, then details, then review.
/// The command fails naming the first step whose requirements are not met.
#[derive(Args)]
pub struct SellArgs {
    #[arg(
        long = "photo",
        value_delimiter = ',',
        help = "Photo URL; repeat or comma-separate, the first is the cover"
    )]
    pub photos: Vec<String>,
    #[arg(short, long, help = "Title shown on the product card")]
    pub title: String,
    #[arg(short, long, help = "Asking price in USD")]
    pub price: String,
    #[arg(short, long, help = "Category id to list under")]
    pub category: String,
    #[arg(long, value_enum, default_value_t = ConditionArg::New)]
    pub condition: ConditionArg,
    #[arg(short, long, help = "Optional description of the item")]
    pub description: Option<String>,
}

impl From<SellArgs> for SellProduct {
    fn from(val: SellArgs) -> Self {
        SellProduct {
            photos: val.photos,
            title: val.title,
            price: val.price,
            category: val.category,
            condition: val.condition.into(),
            description: val.description,
        }
    }
}

#[derive(Subcommand)]
pub enum MarketCommands {
    /// Browse products page by page
    #[command(alias = "b")]
    Browse(BrowseArgs),
    /// List the categories
    #[command(alias = "c")]
    Categories,
    /// List a product for sale
    Sell(SellArgs),
}

/// Start a group chat
#[derive(Args)]
pub struct CreateGroupArgs {
    #[arg(
        short,
        long = "member",
        value_delimiter = ',',
        help = "Chat id of a direct contact; repeat or comma-separate"
    )]
    pub members: Vec<String>,
    #[arg(short, long, help = "Name of the group")]
    pub name: String,
}

impl From<CreateGroupArgs> for CreateGroup {
    fn from(val: CreateGroupArgs) -> Self {
        CreateGroup {
            members: val.members,
            name: val.name,
        }
    }
}

#[derive(Subcommand)]
pub enum GroupCommands {
    /// Start a group chat with some of your contacts
    #[command(alias = "c")]
    Create(CreateGroupArgs),
    /// List contacts that can be added to a group
    Contacts,
}

/// Item condition as accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum ConditionArg {
    New,
    LikeNew,
    Good,
    Fair,
}

impl From<ConditionArg> for Condition {
    fn from(val: ConditionArg) -> Self {
        match val {
            ConditionArg::New => Condition::New,
            ConditionArg::LikeNew => Condition::LikeNew,
            ConditionArg::Good => Condition::Good,
            ConditionArg::Fair => Condition::Fair,
        }
    }
}
