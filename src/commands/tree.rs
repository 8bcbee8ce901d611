use std::path::Path;

use anyhow::{Context, Result};

use doe_builder::domain::services::folder_tree;
use doe_builder::LocalFs;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_tree(dir: &Path, ui: UiContext) -> Result<()> {
    let tree = folder_tree(&LocalFs::new(), dir)
        .with_context(|| format!("failed to list {}", dir.display()))?;

    if ui.json {
        println!(
            "{}",
            serde_json::json!({
                "event": "tree",
                "command": "tree",
                "root": dir.display().to_string(),
                "tree": tree,
            })
        );
        return Ok(());
    }

    let mut header = CommandHeader::new(Icon::Tree, "Folder Tree");
    header.add("Root", dir.display().to_string());
    print!("{}", header.render(ui.color, ui.unicode));
    println!();
    print!("{tree}");
    Ok(())
}
