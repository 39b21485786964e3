use crate::checks::CheckKind;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// The label of the leading url column.
pub const URL_COLUMN: &str = "URL";

/// The outcome carried by a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Verdict {
    /// The signal is healthy.
    Pass,
    /// The signal needs attention but is not fatal.
    Warn,
    /// The signal is failing.
    Fail,
    /// The check could not reach a conclusion.
    Error,
}

impl Verdict {
    /// The glyph appended to human readable text.
    pub fn glyph(&self) -> &'static str {
        match self {
            Verdict::Pass => "✅",
            Verdict::Warn => "⚠️",
            Verdict::Fail => "❌",
            Verdict::Error => "🚫",
        }
    }
}

/// A single column value produced by a check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// The column label.
    pub column: String,
    /// The typed outcome.
    pub verdict: Verdict,
    /// The human readable verdict.
    pub text: String,
}

impl Cell {
    /// A new cell.
    pub fn new(column: impl Into<String>, verdict: Verdict, text: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            verdict,
            text: text.into(),
        }
    }

    /// A cell recording a check that could not complete.
    pub fn error(column: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(column, Verdict::Error, text)
    }
}

/// The cells recorded for one url, grouped by check.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    /// The audited url.
    pub url: String,
    /// Cells per check, in the order the checks ran.
    pub checks: IndexMap<CheckKind, Vec<Cell>>,
}

impl Row {
    /// All cells of the row in column order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.checks.values().flatten()
    }

    /// Look up a cell by column label.
    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells().find(|c| c.column == column)
    }
}

/// Results keyed by (url, check). Recording the same pair twice replaces the earlier cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    rows: IndexMap<String, Row>,
}

impl ResultTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the cells of a check for a url.
    pub fn record(&mut self, url: &str, check: CheckKind, cells: Vec<Cell>) {
        let row = self.rows.entry(url.to_string()).or_insert_with(|| Row {
            url: url.to_string(),
            checks: IndexMap::new(),
        });

        row.checks.insert(check, cells);
    }

    /// The rows of the table.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.values()
    }

    /// The row of a url.
    pub fn row(&self, url: &str) -> Option<&Row> {
        self.rows.get(url)
    }

    /// Every cell of every row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.values().flat_map(|r| r.cells())
    }

    /// Column labels, `URL` first, then in first-seen order.
    pub fn columns(&self) -> Vec<&str> {
        let mut columns: IndexSet<&str> = IndexSet::new();
        columns.insert(URL_COLUMN);

        for cell in self.cells() {
            columns.insert(cell.column.as_str());
        }

        columns.into_iter().collect()
    }

    /// The rows as plain text records aligned with [`ResultTable::columns`].
    pub fn records(&self) -> Vec<Vec<&str>> {
        let columns = self.columns();

        self.rows
            .values()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| {
                        if *column == URL_COLUMN {
                            row.url.as_str()
                        } else {
                            row.get(column).map(|c| c.text.as_str()).unwrap_or_default()
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
