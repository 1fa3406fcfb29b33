use crate::domain::Record;

/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    fn new(header: &str, min_width: usize, max_width: Option<usize>, alignment: Alignment) -> Self {
        Self {
            header: header.to_string(),
            min_width,
            max_width,
            alignment,
        }
    }
}

/// Represents a table with column metadata and rows of data to render.
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    /// Computes the content widths for each column based on headers, rows, and
    /// column constraints.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    /// Renders a single row using the provided column widths.
    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    /// Renders the header, a rule, and every row.
    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

/// Table view of the ledger: one row per record in entry order.
pub fn expense_table(records: &[Record]) -> Table {
    Table {
        columns: vec![
            TableColumn::new("Amount", 6, None, Alignment::Right),
            TableColumn::new("Category", 8, Some(24), Alignment::Left),
            TableColumn::new("Description", 11, Some(40), Alignment::Left),
        ],
        rows: records
            .iter()
            .map(|record| {
                vec![
                    format_amount(record.amount()),
                    record.category().to_string(),
                    record.description().to_string(),
                ]
            })
            .collect(),
        padding: 1,
    }
}

/// Whole amounts keep one decimal place so `40.0` does not print as `40`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

fn visible_width(text: &str) -> usize {
    text.chars().count()
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut result: String = text.chars().take(width - 1).collect();
    result.push('…');
    result
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
    };

    let mut cell = String::new();
    cell.push_str(&" ".repeat(padding + left_spaces));
    cell.push_str(&fitted);
    cell.push_str(&" ".repeat(right_spaces + padding));
    cell
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len().saturating_sub(1);
    "-".repeat(total_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_records_in_entry_order() {
        let records = vec![
            Record::new(12.5, "Food", "Lunch"),
            Record::new(40.0, "Transit", ""),
        ];
        let rendered = expense_table(&records).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Amount"));
        assert!(lines[0].contains("Category"));
        assert!(lines[0].contains("Description"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("12.5") && lines[2].contains("Lunch"));
        assert!(lines[3].contains("40.0") && lines[3].contains("Transit"));
    }

    #[test]
    fn amounts_are_right_aligned() {
        let records = vec![Record::new(5.0, "A", ""), Record::new(1234.25, "B", "")];
        let table = expense_table(&records);
        let widths = table.compute_widths();
        let row = table.render_row(&table.rows[0], &widths);
        assert!(row.starts_with("     5.0 "));
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let long = "x".repeat(60);
        let table = expense_table(&[Record::new(1.0, "Misc", long)]);
        let widths = table.compute_widths();
        assert_eq!(widths[2], 40);
        let row = table.render_row(&table.rows[0], &widths);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn format_amount_keeps_fractional_digits() {
        assert_eq!(format_amount(40.0), "40.0");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.125), "0.125");
    }
}
