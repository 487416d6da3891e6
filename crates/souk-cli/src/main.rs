//! Souk CLI Application
//!
//! Command-line front end for the souk chat marketplace.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use souk_core::{params::ListChats, MarketplaceBuilder};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let marketplace = MarketplaceBuilder::new()
        .with_catalog_path(catalog_file)
        .build()
        .context("Failed to load catalog")?;

    info!("Souk started with {}", marketplace.source());

    let cli = Cli::new(marketplace, TerminalRenderer::new(!no_color));
    match command {
        Some(Chat { command }) => cli.handle_chat_command(command),
        Some(Market { command }) => cli.handle_market_command(command),
        Some(Group { command }) => cli.handle_group_command(command),
        Some(Profile) => cli.show_profile(),
        Some(Tabs) => cli.show_tabs(),
        None => cli.list_chats(&ListChats::default()),
    }
}
