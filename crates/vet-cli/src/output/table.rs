/// ANSI color for a row's status cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Yellow,
    Green,
    Red,
    Blue,
    Magenta,
}

impl Tone {
    const fn code(self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Yellow => Some("33"),
            Self::Green => Some("32"),
            Self::Red => Some("31"),
            Self::Blue => Some("34"),
            Self::Magenta => Some("35"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Row {
    pub cells: Vec<String>,
    pub tone: Tone,
}

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
    /// Column whose cells take the row tone.
    pub tone_column: Option<usize>,
}

/// Render a simple aligned table.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Row], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.cells.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
                .max(4)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(&header_line));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.cells.get(index).map_or("-", String::as_str);
                let cell = pad(&truncate_text(value, *width), *width);
                if options.color && options.tone_column == Some(index) {
                    colorize(&cell, row.tone)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider.trim_end().to_string());
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{value}{}", " ".repeat(fill))
}

fn colorize(value: &str, tone: Tone) -> String {
    match tone.code() {
        Some(code) => format!("\u{1b}[{code}m{value}\u{1b}[0m"),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str], tone: Tone) -> Row {
        Row {
            cells: cells.iter().map(|c| (*c).to_string()).collect(),
            tone,
        }
    }

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
        tone_column: Some(1),
    };

    #[test]
    fn aligns_accented_text_by_chars() {
        let rows = vec![
            row(&["1", "Approuvée", "Pâtes"], Tone::Green),
            row(&["12", "En attente", "Yoga"], Tone::Yellow),
        ];
        let table = render_entity_table(&["id", "status", "title"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let title_col = lines[0].find("title").unwrap();
        assert_eq!(lines[3].find("Yoga").unwrap(), title_col);
    }

    #[test]
    fn colors_only_the_tone_column() {
        let rows = vec![row(&["1", "pending", "x"], Tone::Yellow)];
        let options = TableOptions {
            color: true,
            ..PLAIN
        };
        let table = render_entity_table(&["id", "status", "title"], &rows, options);
        let last = table.lines().last().unwrap();
        assert!(last.contains("\u{1b}[33mpending"));
        assert!(!last.starts_with('\u{1b}'));
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let rows = vec![row(&["1", "ok", "a very long video title indeed"], Tone::Plain)];
        let options = TableOptions {
            max_width: Some(30),
            ..PLAIN
        };
        let table = render_entity_table(&["id", "status", "title"], &rows, options);
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(display_width(last) <= 30);
    }
}
