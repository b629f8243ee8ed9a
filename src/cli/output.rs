use crate::environments::java::JdkInstallation;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_HORIZONTAL_ONLY;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use std::path::Path;

/// 当前 JDK 的标记
pub const CURRENT_MARKER: &str = "✓";

/// 生成 JDK 列表表格
pub fn render_installations(installations: &[JdkInstallation], current: Option<&Path>) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_HORIZONTAL_ONLY)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("ID").add_attribute(Attribute::Bold),
            Cell::new("Version").add_attribute(Attribute::Bold),
            Cell::new("Path").add_attribute(Attribute::Bold),
        ]);

    for (i, jdk) in installations.iter().enumerate() {
        let is_current = current.is_some_and(|home| jdk.matches_home(home));
        let name = if is_current {
            format!("{} {}", jdk.name, CURRENT_MARKER)
        } else {
            jdk.name.clone()
        };
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Center),
            Cell::new(name).fg(if is_current { Color::Green } else { Color::Cyan }),
            Cell::new(jdk.path.display()).fg(Color::Magenta),
        ]);
    }

    table.to_string()
}

pub fn success(message: &str) -> String {
    style(format!("✓ {}", message)).green().bold().to_string()
}

pub fn warning(message: &str) -> String {
    style(message).yellow().to_string()
}

pub fn failure(message: &str) -> String {
    style(message).red().bold().to_string()
}

pub fn label(label: &str, value: &str) -> String {
    format!("{} {}", style(label).green().bold(), style(value).cyan().bold())
}
