//! Page set configuration for pager-cli.
//!
//! Stored as `pager.toml` in the data directory.

use anyhow::{Context, Result};
use pager_core::SyncConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the page set inside the data directory.
pub const PAGER_FILE: &str = "pager.toml";

/// Root of `pager.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerFile {
    /// Relay behavior.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Menu strip layout.
    #[serde(default)]
    pub menu: MenuConfig,
    /// Content pager layout.
    #[serde(default)]
    pub content: ContentConfig,
    /// Pages, in display order.
    #[serde(default)]
    pub pages: Vec<PageEntry>,
}

/// Menu strip layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Width of every menu item without its own width.
    /// Defaults to half the viewport width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_width: Option<f64>,
}

/// Content pager layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Width of one page (default: 390).
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f64,
    /// Scroll samples produced by one animated move (default: 4).
    #[serde(default = "default_animation_frames")]
    pub animation_frames: u32,
}

/// One page of the set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Menu title, also shown as the page body.
    pub title: String,
    /// Menu item width override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

impl PageEntry {
    /// Create a page with the default menu width.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: None,
        }
    }
}

fn default_viewport_width() -> f64 {
    390.0
}

fn default_animation_frames() -> u32 {
    4
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            animation_frames: default_animation_frames(),
        }
    }
}

impl Default for PagerFile {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            menu: MenuConfig::default(),
            content: ContentConfig::default(),
            pages: vec![PageEntry::new("ACTIVE"), PageEntry::new("NEW")],
        }
    }
}

impl PagerFile {
    /// Parse and validate a page set.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a width is unusable.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: PagerFile = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        file.validate()?;
        Ok(file)
    }

    /// Load the page set from a data directory.
    pub async fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(PAGER_FILE);
        let content = tokio::fs::read_to_string(&path)
            .await
            .context("Page set not initialized. Run 'pager-cli init' first.")?;
        Ok(Self::parse(&content, &path)?)
    }

    /// Save the page set to a data directory.
    pub async fn save(&self, data_dir: &Path) -> Result<()> {
        let path = data_dir.join(PAGER_FILE);
        let content = toml::to_string_pretty(self).context("Failed to encode page set")?;
        tokio::fs::write(&path, content)
            .await
            .context("Failed to save page set")?;
        Ok(())
    }

    /// Check if a page set exists.
    pub async fn exists(data_dir: &Path) -> bool {
        tokio::fs::try_exists(data_dir.join(PAGER_FILE))
            .await
            .unwrap_or(false)
    }

    /// Width of menu items without an override.
    pub fn default_item_width(&self) -> f64 {
        self.menu
            .item_width
            .unwrap_or(self.content.viewport_width / 2.0)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let width = self.content.viewport_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "content.viewport_width must be positive, got {width}"
            )));
        }
        if self.content.animation_frames == 0 {
            return Err(ConfigError::Invalid(
                "content.animation_frames must be at least 1".to_string(),
            ));
        }
        let widths = self
            .menu
            .item_width
            .iter()
            .chain(self.pages.iter().filter_map(|p| p.width.as_ref()));
        for w in widths {
            if !w.is_finite() || *w < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "menu widths must be non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to parse the page set.
    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: toml::de::Error,
    },
    /// The page set parsed but is not usable.
    #[error("invalid page set: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> Result<PagerFile, ConfigError> {
        PagerFile::parse(content, Path::new("pager.toml"))
    }

    #[test]
    fn default_page_set() {
        let file = PagerFile::default();
        assert_eq!(file.pages.len(), 2);
        assert_eq!(file.pages[0].title, "ACTIVE");
        assert_eq!(file.content.viewport_width, 390.0);
        assert_eq!(file.default_item_width(), 195.0);
        assert!(file.sync.animate_content);
    }

    #[test]
    fn page_set_from_toml_string() {
        let toml = r#"
[sync]
animate_menu = false

[menu]
item_width = 120.0

[content]
viewport_width = 300.0

[[pages]]
title = "Inbox"

[[pages]]
title = "Archive"
width = 90.0
"#;

        let file = parse(toml).unwrap();
        assert!(!file.sync.animate_menu);
        assert!(file.sync.animate_content);
        assert_eq!(file.default_item_width(), 120.0);
        assert_eq!(file.content.viewport_width, 300.0);
        assert_eq!(file.content.animation_frames, 4);
        assert_eq!(file.pages[1].width, Some(90.0));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let file = parse("").unwrap();
        assert!(file.pages.is_empty());
        assert_eq!(file.content.viewport_width, 390.0);
    }

    #[test]
    fn rejects_unusable_viewport() {
        let err = parse("[content]\nviewport_width = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_negative_page_width() {
        let err = parse("[[pages]]\ntitle = \"A\"\nwidth = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse("[[pages]\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = tempdir().unwrap();
        assert!(!PagerFile::exists(dir.path()).await);

        let mut file = PagerFile::default();
        file.pages.push(PageEntry {
            title: "LATER".to_string(),
            width: Some(80.0),
        });
        file.save(dir.path()).await.unwrap();

        assert!(PagerFile::exists(dir.path()).await);
        let loaded = PagerFile::load(dir.path()).await.unwrap();
        assert_eq!(loaded, file);
    }

    #[tokio::test]
    async fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(PagerFile::load(dir.path()).await.is_err());
    }
}
