use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, HEADER_TEXT, LABEL_TEXT};

use super::state::LayerItemState;

const LABEL_WIDTH: usize = 9;

/// Lines for one item view. Empty until a record has loaded, so loading,
/// failed and unknown layers all look the same.
pub fn layer_lines(state: &LayerItemState) -> Vec<Line<'static>> {
    let Some(layer) = state.layer() else {
        return Vec::new();
    };

    let mut lines = vec![Line::from(Span::styled(
        layer.id.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))];
    lines.push(field("command", layer.command.clone()));
    lines.push(field("size", layer.size.to_string()));
    lines.push(field("tree", layer.tree_id.clone()));
    if let Some(names) = layer.joined_names() {
        lines.push(field("names", names));
    }
    lines.push(field("digest", layer.digest.clone()));
    lines.push(Line::from(""));
    lines
}

fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(LABEL_TEXT),
        ),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}
