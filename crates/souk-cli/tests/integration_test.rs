//! Integration tests comparing CLI output with the core Display implementations
//!
//! In `--no-color` mode the CLI writes the markdown produced by the core
//! display types unchanged, so the two must agree byte for byte.

use std::{path::Path, process::Command};

use souk_core::{params::BrowseProducts, Marketplace, MarketplaceBuilder, TabId};
use tempfile::TempDir;

/// Copy of the bundled catalog in a temp dir, plus a marketplace over it
fn create_test_marketplace() -> (Marketplace, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let path = temp_dir.path().join("catalog.json");
    std::fs::write(&path, souk_core::catalog::BUNDLED_CATALOG).expect("Failed to write catalog");

    let marketplace = MarketplaceBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create marketplace");

    (marketplace, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(catalog: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_souk"));
    cmd.arg("--no-color").arg("--catalog-file").arg(catalog);
    cmd.args(args);

    let output = cmd.output().expect("Failed to run CLI command");
    assert!(output.status.success(), "CLI failed: {output:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_browse_output_matches_product_page() {
    let (marketplace, temp_dir) = create_test_marketplace();
    let catalog = temp_dir.path().join("catalog.json");

    let cli_output = run_cli_command(
        &catalog,
        &["market", "browse", "--category", "electronics", "--page-size", "4"],
    );

    let page = marketplace
        .browse_products(&BrowseProducts {
            category: "electronics".to_string(),
            page_size: 4,
            ..Default::default()
        })
        .expect("Failed to browse");
    assert_eq!(cli_output, format!("# Marketplace\n\n{page}"));
}

#[test]
fn test_profile_output_matches_profile_display() {
    let (marketplace, temp_dir) = create_test_marketplace();
    let cli_output = run_cli_command(&temp_dir.path().join("catalog.json"), &["profile"]);

    let direct_output = format!(
        "{}\n{}",
        marketplace.profile(),
        marketplace.tab_bar(TabId::Profile)
    );
    assert_eq!(cli_output, direct_output);
}

#[test]
fn test_categories_output_matches_core() {
    let (marketplace, temp_dir) = create_test_marketplace();
    let cli_output = run_cli_command(
        &temp_dir.path().join("catalog.json"),
        &["market", "categories"],
    );

    let categories = marketplace.categories("all").expect("Failed to list categories");
    assert_eq!(cli_output, categories.to_string());
}
