use nu_ansi_term::Style;
use std::io::IsTerminal;

// Decide whether styling should be applied to standard output.
// NO_COLOR wins over TTY detection; non-terminal streams get plain text.
#[must_use]
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

// Apply a style to a single line of text
#[must_use]
pub fn styled_line(text: &str, style: Style, colors: bool) -> String {
    if colors {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

// Column header plus the style applied to its cells
pub struct Column {
    pub header: String,
    pub style: Style,
}

impl Column {
    // Constructor for creating a new column
    #[must_use]
    pub fn new(header: &str, style: Style) -> Self {
        Self {
            header: header.to_string(),
            style,
        }
    }
}

// Titled grid with per-column cell styling
pub struct Table {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    // Constructor for creating a new table
    #[must_use]
    pub fn new(title: &str, columns: Vec<Column>) -> Self {
        Self {
            title: title.to_string(),
            columns,
            rows: Vec::new(),
        }
    }

    // Append a row; cells beyond the column count are ignored at render time
    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    // Render the grid: underlined title, bold header row, a dashed rule,
    // then all rows in insertion order. Widths are computed from unstyled
    // text so styling never changes alignment.
    #[must_use]
    pub fn render(&self, colors: bool) -> String {
        // Find the widest cell per column for alignment
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.len()).collect();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate().take(widths.len()) {
                if cell.len() > widths[index] {
                    widths[index] = cell.len();
                }
            }
        }

        let mut lines = Vec::with_capacity(self.rows.len() + 3);
        lines.push(styled_line(&self.title, Style::new().underline(), colors));

        let headers: Vec<(&str, Style)> = self
            .columns
            .iter()
            .map(|column| (column.header.as_str(), Style::new().bold()))
            .collect();
        lines.push(format_row(&headers, &widths, colors));

        let rules: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        let rule_cells: Vec<(&str, Style)> = rules
            .iter()
            .map(|rule| (rule.as_str(), Style::new()))
            .collect();
        lines.push(format_row(&rule_cells, &widths, false));

        for row in &self.rows {
            let cells: Vec<(&str, Style)> = row
                .iter()
                .zip(&self.columns)
                .map(|(cell, column)| (cell.as_str(), column.style))
                .collect();
            lines.push(format_row(&cells, &widths, colors));
        }

        lines.join("\n")
    }
}

// Helper function to pad each cell to its column width and join with a
// two-space gutter. The last cell stays unpadded to avoid trailing spaces.
fn format_row(cells: &[(&str, Style)], widths: &[usize], colors: bool) -> String {
    let mut line = String::new();
    let last = cells.len().saturating_sub(1);

    for (index, (text, style)) in cells.iter().enumerate() {
        let padded = if index == last {
            (*text).to_string()
        } else {
            format!("{text:<width$}", width = widths[index])
        };

        if colors {
            line.push_str(&style.paint(padded.as_str()).to_string());
        } else {
            line.push_str(&padded);
        }

        if index != last {
            line.push_str("  ");
        }
    }

    line
}
