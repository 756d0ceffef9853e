//! Table rendering options, resolved once from flags and the terminal.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::output::table::TableOptions;

/// Status column of the panel table; its cells take the status tone.
const STATUS_COLUMN: usize = 1;

/// Narrower `COLUMNS` values are ignored.
const MIN_TABLE_WIDTH: usize = 40;

static TABLE_OPTIONS: OnceLock<TableOptions> = OnceLock::new();

#[derive(Clone, Copy, Debug, Default)]
struct Terminal {
    is_tty: bool,
    no_color: bool,
    columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

pub fn init(flags: &GlobalFlags) {
    let _ = TABLE_OPTIONS.set(resolve(flags, Terminal::detect()));
}

/// Options for panel tables; plain and unbounded before [`init`].
#[must_use]
pub fn table_options() -> TableOptions {
    TABLE_OPTIONS
        .get()
        .copied()
        .unwrap_or_else(|| resolve_plain(None))
}

fn resolve(flags: &GlobalFlags, terminal: Terminal) -> TableOptions {
    let color = flags.format == OutputFormat::Table
        && match flags.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal.is_tty && !terminal.no_color && !flags.quiet,
        };
    TableOptions {
        color,
        ..resolve_plain(terminal.columns)
    }
}

fn resolve_plain(columns: Option<usize>) -> TableOptions {
    TableOptions {
        max_width: columns.filter(|width| *width >= MIN_TABLE_WIDTH),
        color: false,
        tone_column: Some(STATUS_COLUMN),
    }
}
