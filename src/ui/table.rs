//! Bordered table rendering

use crate::ui::RenderConfig;
use colored::{Color, Colorize};

/// Colours and header visibility for a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStyle {
    pub border: Color,
    pub header: Color,
    pub row: Color,
    pub show_headers: bool,
}

impl Default for TableStyle {
    fn default() -> Self {
        TableStyle {
            border: Color::Magenta,
            header: Color::Magenta,
            row: Color::White,
            show_headers: true,
        }
    }
}

/// A table of string cells
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub style: TableStyle,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            style: TableStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a row. Missing cells render empty, extra cells are dropped.
    pub fn push_row<S: Into<String>>(&mut self, cells: impl IntoIterator<Item = S>) {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }
}

/// Render a table to lines (without trailing newlines)
pub fn render_lines(table: &Table, config: &RenderConfig) -> Vec<String> {
    let columns: Vec<String> = table.columns.iter().map(|c| config.display(c)).collect();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            (0..columns.len())
                .map(|i| config.display(row.get(i).map(String::as_str).unwrap_or("")))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = columns.iter().map(|c| config.width(c)).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(config.width(cell));
        }
    }

    let style = &table.style;
    let paint = |text: &str, color: Color, bold: bool| -> String {
        if !config.color {
            return text.to_string();
        }
        let colored = text.color(color);
        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    };

    let separator = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let format_row = |cells: &[String], color: Color, bold: bool| -> String {
        let inner = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let padding = " ".repeat(width - config.width(cell));
                paint(&format!("{}{}", cell, padding), color, bold)
            })
            .collect::<Vec<_>>()
            .join(&paint(" | ", style.border, false));

        format!(
            "{}{}{}",
            paint("| ", style.border, false),
            inner,
            paint(" |", style.border, false)
        )
    };

    let mut lines = vec![paint(&separator, style.border, false)];
    if style.show_headers {
        lines.push(format_row(&columns, style.header, true));
        lines.push(paint(&separator, style.border, false));
    }
    for row in &rows {
        lines.push(format_row(row, style.row, false));
    }
    lines.push(paint(&separator, style.border, false));

    lines
}
