//! Show where each page sits on the menu strip and in the pager.

use anyhow::Result;
use std::path::Path;

use pager_types::PageIndex;

use crate::config::PagerFile;
use crate::simulator::Simulator;

/// Run the layout command.
pub async fn run(data_dir: &Path) -> Result<()> {
    let file = PagerFile::load(data_dir).await?;
    for line in render(&file)? {
        println!("{line}");
    }
    Ok(())
}

/// Format the layout table for a page set.
pub fn render(file: &PagerFile) -> Result<Vec<String>> {
    let sim = Simulator::new(file)?;
    let engine = sim.engine();

    let mut lines = vec![format!(
        "{:>3}  {:<16} {:>10} {:>10} {:>12}",
        "#", "title", "menu x", "menu w", "page offset"
    )];
    for i in 0..engine.count() {
        let index = PageIndex::new(i);
        let title = engine.menu_cell(index).unwrap_or_default();
        let Some(frame) = engine.menu_item_frame(index) else {
            continue;
        };
        lines.push(format!(
            "{:>3}  {:<16} {:>10.1} {:>10.1} {:>12.1}",
            i,
            title,
            frame.start,
            frame.width,
            i as f64 * file.content.viewport_width
        ));
    }
    if engine.count() == 0 {
        lines.push("(no pages)".to_string());
    }
    Ok(lines)
}
