//! Tabular rendering of search results.
//!
//! Rows keep the order the service returned them in and are addressed by
//! position. The table can be written as an HTML fragment or as a plain
//! text grid.

use std::fmt;

use crate::product::Product;

const COLUMN_COUNT: usize = 9;

/// Column headers, in display order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "ID",
    "Name",
    "Category",
    "Available",
    "Like",
    "Color",
    "Size",
    "Create Date",
    "Last Modify Date",
];

/// One rendered row: the cell text of a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub cells: [String; COLUMN_COUNT],
}

impl From<&Product> for ResultRow {
    fn from(product: &Product) -> Self {
        Self {
            cells: [
                product.id.map(|id| id.to_string()).unwrap_or_default(),
                product.name.clone(),
                product.category.clone(),
                product.available.to_string(),
                product.like.clone(),
                product.color.clone(),
                product.size.clone(),
                product.create_date.clone(),
                product.last_modify_date.clone(),
            ],
        }
    }
}

/// Search results laid out as a fixed-column table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub fn from_records(products: &[Product]) -> Self {
        Self {
            rows: products.iter().map(ResultRow::from).collect(),
        }
    }

    pub fn row(&self, index: usize) -> Option<&ResultRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as an HTML `<table>` fragment. Row `i` carries `id="row_{i}"`.
    pub fn render_html(&self) -> String {
        let mut html = String::from(r#"<table class="table table-striped" cellpadding="10">"#);

        html.push_str("<thead><tr>");
        for header in COLUMNS {
            html.push_str(r#"<th class="col-md-2">"#);
            html.push_str(header);
            html.push_str("</th>");
        }
        html.push_str("</tr></thead><tbody>");

        for (index, row) in self.rows.iter().enumerate() {
            html.push_str(&format!(r#"<tr id="row_{index}">"#));
            for cell in &row.cells {
                html.push_str("<td>");
                html.push_str(&html_escape::encode_text(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }

    fn column_widths(&self) -> [usize; COLUMN_COUNT] {
        let mut widths = COLUMNS.map(|header| header.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_line(f, &widths, COLUMNS.into_iter())?;
        let rule = widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;

        for row in &self.rows {
            write_line(f, &widths, row.cells.iter().map(String::as_str))?;
        }
        Ok(())
    }
}

fn write_line<'a>(
    f: &mut fmt::Formatter<'_>,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> fmt::Result {
    let line = cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}
