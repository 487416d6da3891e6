//! Builder for creating and configuring Marketplace instances.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{CatalogSource, Marketplace};
use crate::{
    catalog::Catalog,
    error::{Result, ResultExt},
};

/// File name looked up in the XDG data directories.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Builder for creating and configuring Marketplace instances.
#[derive(Debug, Clone)]
pub struct MarketplaceBuilder {
    catalog_path: Option<PathBuf>,
    use_xdg: bool,
}

impl MarketplaceBuilder {
    /// Creates a new builder that falls back to the XDG data directory and
    /// then to the bundled catalog.
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            use_xdg: true,
        }
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses `$XDG_DATA_HOME/souk/catalog.json` (or
    /// `~/.local/share/souk/catalog.json`) when it exists, otherwise the
    /// catalog bundled into the library.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Skips the XDG lookup, so only an explicit path or the bundled catalog
    /// is used.
    pub fn without_xdg(mut self) -> Self {
        self.use_xdg = false;
        self
    }

    /// Loads the catalog and builds the marketplace.
    ///
    /// # Errors
    ///
    /// Returns `SoukError::FileSystem` if the catalog file cannot be read,
    /// `SoukError::Serialization` or `SoukError::InvalidInput` if it is not a
    /// valid catalog, and `SoukError::Configuration` if a relative path
    /// cannot be resolved.
    pub fn build(self) -> Result<Marketplace> {
        let path = match self.catalog_path {
            Some(path) => Some(absolute(path)?),
            None if self.use_xdg => Self::default_catalog_path(),
            None => None,
        };

        let (catalog, source) = match path {
            Some(path) => (Catalog::from_path(&path)?, CatalogSource::File(path)),
            None => {
                debug!("No catalog file found, using the bundled catalog");
                (Catalog::bundled()?, CatalogSource::Bundled)
            }
        };

        info!("Marketplace ready with {source}");
        Ok(Marketplace::new(catalog, source))
    }

    /// Returns the catalog in the XDG data directories, if one exists.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("souk").find_data_file(CATALOG_FILE_NAME)
    }
}

impl Default for MarketplaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().with_context("Failed to resolve current directory")?;
    Ok(cwd.join(path))
}
