//! Command handlers: call the marketplace and render what it returns.

use anyhow::{Context, Result};
use log::info;
use souk_core::{
    display::{CreateResult, OperationStatus},
    params::{BrowseProducts, ListChats},
    Marketplace, TabId,
};

use crate::{
    cli::{ChatCommands, GroupCommands, MarketCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    marketplace: Marketplace,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(marketplace: Marketplace, renderer: TerminalRenderer) -> Self {
        Self {
            marketplace,
            renderer,
        }
    }

    pub fn handle_chat_command(&self, command: ChatCommands) -> Result<()> {
        match command {
            ChatCommands::List(args) => self.list_chats(&args.into()),
            ChatCommands::Show(args) => {
                let conversation = self
                    .marketplace
                    .show_chat(&args.into())
                    .context("Failed to open chat")?;
                self.renderer.render(&conversation.to_string())
            }
        }
    }

    pub fn handle_market_command(&self, command: MarketCommands) -> Result<()> {
        match command {
            MarketCommands::Browse(args) => self.browse(&args.into()),
            MarketCommands::Categories => {
                let categories = self
                    .marketplace
                    .categories(souk_core::models::ALL_CATEGORY_ID)
                    .context("Failed to list categories")?;
                self.renderer.render(&categories.to_string())
            }
            MarketCommands::Sell(args) => {
                let listing = self
                    .marketplace
                    .sell_product(&args.into())
                    .context("Failed to list product")?;
                info!("Listing {} created", listing.product.id);
                let output = format!(
                    "{}\n{}",
                    OperationStatus::success("Your item is listed"),
                    CreateResult::new(listing)
                );
                self.renderer.render(&output)
            }
        }
    }

    pub fn handle_group_command(&self, command: GroupCommands) -> Result<()> {
        match command {
            GroupCommands::Create(args) => {
                let group = self
                    .marketplace
                    .create_group(&args.into())
                    .context("Failed to create group")?;
                let output = format!(
                    "{}\n{}",
                    OperationStatus::success("Group chat started"),
                    CreateResult::new(group)
                );
                self.renderer.render(&output)
            }
            GroupCommands::Contacts => {
                let output = format!("# Add members\n\n{}", self.marketplace.contacts());
                self.renderer.render(&output)
            }
        }
    }

    /// The chat list, the app's default screen.
    pub fn list_chats(&self, params: &ListChats) -> Result<()> {
        let chats = self.marketplace.list_chats(params);
        let output = format!(
            "# Chats\n\n{}\n{}",
            chats,
            self.marketplace.tab_bar(TabId::Chats)
        );
        self.renderer.render(&output)
    }

    fn browse(&self, params: &BrowseProducts) -> Result<()> {
        let page = self
            .marketplace
            .browse_products(params)
            .context("Failed to browse products")?;
        let output = format!("# Marketplace\n\n{page}");
        self.renderer.render(&output)
    }

    pub fn show_profile(&self) -> Result<()> {
        let output = format!(
            "{}\n{}",
            self.marketplace.profile(),
            self.marketplace.tab_bar(TabId::Profile)
        );
        self.renderer.render(&output)
    }

    pub fn show_tabs(&self) -> Result<()> {
        self.renderer
            .render(&self.marketplace.tab_bar(TabId::default()).to_string())
    }
}
