//! Write a starter page set.

use anyhow::Result;
use std::path::Path;

use crate::config::{PagerFile, PAGER_FILE};

/// Run the init command.
pub async fn run(data_dir: &Path, force: bool) -> Result<()> {
    if PagerFile::exists(data_dir).await && !force {
        anyhow::bail!(
            "Page set already exists. Use --force or delete {} to reinitialize.",
            data_dir.join(PAGER_FILE).display()
        );
    }

    let file = PagerFile::default();
    file.save(data_dir).await?;

    println!("Page set initialized!");
    println!();
    println!("  Pages:     {}", file.pages.len());
    println!("  Viewport:  {}", file.content.viewport_width);
    println!("  File:      {}", data_dir.join(PAGER_FILE).display());
    println!();
    println!("Next steps:");
    println!("  1. Inspect the menu layout: pager-cli layout");
    println!("  2. Replay some input: pager-cli simulate tap:1 swipe:0");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn init_creates_page_set() {
        let dir = tempdir().unwrap();
        run(dir.path(), false).await.unwrap();

        let file = PagerFile::load(dir.path()).await.unwrap();
        assert_eq!(file, PagerFile::default());
    }

    #[tokio::test]
    async fn init_fails_if_already_initialized() {
        let dir = tempdir().unwrap();
        run(dir.path(), false).await.unwrap();

        assert!(run(dir.path(), false).await.is_err());
    }

    #[tokio::test]
    async fn init_force_overwrites() {
        let dir = tempdir().unwrap();
        let mut custom = PagerFile::default();
        custom.pages.clear();
        custom.save(dir.path()).await.unwrap();

        run(dir.path(), true).await.unwrap();

        let file = PagerFile::load(dir.path()).await.unwrap();
        assert_eq!(file.pages.len(), 2);
    }
}
