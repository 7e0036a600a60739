//! Plain-text output for rendered tables.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use super::cell::Cell;
use super::column::Alignment;
use super::column::ColumnWidth;
use super::paginate::PaginationControls;
use super::render::HeaderCell;
use super::render::RenderedTable;

/// Writes a [`RenderedTable`] as aligned plain text.
///
/// Fixed-width columns truncate with `…`; other columns size to their
/// widest cell, up to `max_auto_width`.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    /// Spaces between columns.
    pub column_gap: usize,
    /// Upper bound for content-sized columns.
    pub max_auto_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            column_gap: 2,
            max_auto_width: 40,
        }
    }
}

impl TextRenderer {
    /// Creates a renderer with default spacing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the table to a string, one line per row.
    pub fn render(&self, table: &RenderedTable) -> String {
        match table {
            RenderedTable::Loading { message } => format!("{message}\n"),
            RenderedTable::Empty { header, message } => {
                let widths = self.column_widths(header, &[]);
                let mut out = self.header_lines(header, &widths);
                out.push_str(message);
                out.push('\n');
                out
            }
            RenderedTable::Grid {
                header,
                rows,
                controls,
            } => {
                let body: Vec<Vec<String>> = rows
                    .iter()
                    .map(|row| row.cells.iter().map(cell_text).collect())
                    .collect();
                let widths = self.column_widths(header, &body);

                let mut out = self.header_lines(header, &widths);
                for cells in &body {
                    let line = header
                        .iter()
                        .zip(&widths)
                        .zip(cells)
                        .map(|((col, &width), text)| pad(&truncate_to_width(text, width), width, col.align))
                        .collect::<Vec<_>>();
                    out.push_str(self.join(line).trim_end());
                    out.push('\n');
                }
                if let Some(controls) = controls {
                    out.push_str(&pagination_line(controls));
                    out.push('\n');
                }
                out
            }
        }
    }

    fn column_widths(&self, header: &[HeaderCell], body: &[Vec<String>]) -> Vec<usize> {
        header
            .iter()
            .enumerate()
            .map(|(i, col)| match col.width {
                ColumnWidth::Fixed(width) => usize::from(width),
                ColumnWidth::Flex(_) | ColumnWidth::Auto => body
                    .iter()
                    .filter_map(|cells| cells.get(i))
                    .map(|text| text.width())
                    .chain(std::iter::once(col.label().width()))
                    .max()
                    .unwrap_or(0)
                    .min(self.max_auto_width),
            })
            .collect()
    }

    fn header_lines(&self, header: &[HeaderCell], widths: &[usize]) -> String {
        let titles = header
            .iter()
            .zip(widths)
            .map(|(col, &width)| pad(&truncate_to_width(&col.label(), width), width, col.align))
            .collect::<Vec<_>>();
        let rule_width = widths.iter().sum::<usize>()
            + self.column_gap * widths.len().saturating_sub(1);

        let mut out = self.join(titles).trim_end().to_string();
        out.push('\n');
        out.push_str(&"-".repeat(rule_width));
        out.push('\n');
        out
    }

    fn join(&self, parts: Vec<String>) -> String {
        parts.join(&" ".repeat(self.column_gap))
    }
}

fn cell_text(cell: &Cell) -> String {
    match cell {
        Cell::Text(text) => text.clone(),
        Cell::Status { active, label } => {
            let dot = if *active { "●" } else { "○" };
            format!("{dot} {label}")
        }
        Cell::Composite(parts) => parts
            .iter()
            .map(cell_text)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn pagination_line(controls: &PaginationControls) -> String {
    let mut parts = Vec::with_capacity(controls.pages.len() + 2);
    if controls.previous.is_some() {
        parts.push("«".to_string());
    }
    for link in &controls.pages {
        if controls.is_current(*link) {
            parts.push(format!("[{}]", link.number()));
        } else {
            parts.push(link.number().to_string());
        }
    }
    if controls.next.is_some() {
        parts.push("»".to_string());
    }
    format!("{}  {}", controls.summary(), parts.join(" "))
}

fn pad(text: &str, width: usize, align: Alignment) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Alignment::Left => format!("{text}{}", " ".repeat(fill)),
        Alignment::Right => format!("{}{text}", " ".repeat(fill)),
        Alignment::Center => {
            let left = fill / 2;
            format!("{}{text}{}", " ".repeat(left), " ".repeat(fill - left))
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1; // room for the ellipsis
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_to_width("Riverside", 20), "Riverside");
        assert_eq!(truncate_to_width("Riverside", 5), "Rive…");
        assert_eq!(truncate_to_width("Riverside", 0), "");
    }

    #[test]
    fn test_pad_alignment() {
        assert_eq!(pad("ab", 5, Alignment::Left), "ab   ");
        assert_eq!(pad("ab", 5, Alignment::Right), "   ab");
        assert_eq!(pad("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_status_text() {
        let cell = Cell::Status {
            active: true,
            label: "Active".into(),
        };
        assert_eq!(cell_text(&cell), "● Active");
    }

    #[test]
    fn test_loading() {
        let table = RenderedTable::Loading {
            message: "Loading...".into(),
        };
        assert_eq!(TextRenderer::new().render(&table), "Loading...\n");
    }
}
