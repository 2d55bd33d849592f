//! Truth tables of formulas and all their sub-expressions.
//!
//! Columns follow the pre-order traversal of the formula tree (root first),
//! labelled with the canonical rendering of each sub-expression. Rows follow
//! the assignment index `i` in `0..2^n`, where bit `j` of `i` is the value of
//! the `j`-th variable in order of first occurrence.
//!
//! ```
//! use truth_table::formula::parse;
//! use truth_table::truth_table::TruthTable;
//!
//! let f = parse("a&b").unwrap();
//! let table = TruthTable::generate(&f).unwrap();
//! assert_eq!(table.header(), ["(a&b)", "a", "b"]);
//! assert_eq!(table.row_tokens(1), ["F", "T", "F"]); // a=1, b=0
//! assert_eq!(table.row_tokens(3), ["T", "T", "T"]);
//! ```

use std::fmt::{Display, Formatter};

use log::debug;

use crate::error::EvalError;
use crate::eval::Assignment;
use crate::formula::Formula;

/// Token for a boolean cell.
pub const fn token(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

/// Overall character of a formula, read off its root column.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// True under every assignment.
    Tautology,
    /// False under every assignment.
    Contradiction,
    /// True under some assignments and false under others.
    Contingency,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Classification::Tautology => "tautology",
            Classification::Contradiction => "contradiction",
            Classification::Contingency => "contingency",
        };
        write!(f, "{}", s)
    }
}

/// Options for [`TruthTable::render`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Written after every cell (default: a single space).
    pub delimiter: String,
    /// Token for true cells (default: "T").
    pub true_token: &'static str,
    /// Token for false cells (default: "F").
    pub false_token: &'static str,
    /// Whether to print the header line (default: true).
    pub header: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            delimiter: " ".to_string(),
            true_token: token(true),
            false_token: token(false),
            header: true,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    variables: Vec<char>,
    header: Vec<String>,
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Evaluate `formula` and every sub-expression under all `2^n` assignments.
    pub fn generate(formula: &Formula) -> Result<Self, EvalError> {
        let columns = formula.preorder();
        let labels = formula.labels();
        let header: Vec<String> = columns.iter().map(|idx| labels[idx.index()].clone()).collect();

        let n = formula.num_vars();
        let num_rows = 1u64 << n;
        debug!(
            "truth table for {}: {} variables, {} columns, {} rows",
            formula,
            n,
            columns.len(),
            num_rows
        );

        let mut rows: Vec<Vec<bool>> = Vec::with_capacity(num_rows as usize);
        let mut assignment = formula.assignment();
        for i in 0..num_rows {
            // All variables are set before any column is evaluated.
            assignment.load_index(i);
            let values = formula.eval_all(&assignment)?;
            rows.push(columns.iter().map(|idx| values[idx.index()]).collect());
        }

        Ok(Self {
            variables: formula.registry().names().to_vec(),
            header,
            rows,
        })
    }

    /// Variables in enumeration order (variable `j` is bit `j` of the row index).
    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    /// Column labels, root first.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.header.len()
    }

    /// Row `i` as `"T"`/`"F"` tokens.
    pub fn row_tokens(&self, i: usize) -> Vec<&'static str> {
        self.rows[i].iter().map(|&v| token(v)).collect()
    }

    /// Values of column `j` from top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(move |row| row[j])
    }

    /// Values of the whole formula.
    pub fn root_column(&self) -> impl Iterator<Item = bool> + '_ {
        self.column(0)
    }

    /// The assignment that produced row `i`.
    pub fn assignment(&self, i: usize) -> Assignment {
        Assignment::from_index(self.variables.len(), i as u64)
    }

    pub fn classify(&self) -> Classification {
        let (mut any_true, mut any_false) = (false, false);
        for value in self.root_column() {
            if value {
                any_true = true;
            } else {
                any_false = true;
            }
        }
        match (any_true, any_false) {
            (true, false) => Classification::Tautology,
            (false, true) => Classification::Contradiction,
            _ => Classification::Contingency,
        }
    }

    /// Render the table as text: the header line, then one line per row.
    /// Every cell is followed by the delimiter.
    pub fn render(&self, config: &RenderConfig) -> String {
        let mut out = String::new();
        if config.header {
            for label in self.header.iter() {
                out.push_str(label);
                out.push_str(&config.delimiter);
            }
            out.push('\n');
        }
        for row in self.rows.iter() {
            for &value in row.iter() {
                out.push_str(if value { config.true_token } else { config.false_token });
                out.push_str(&config.delimiter);
            }
            out.push('\n');
        }
        out
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(&RenderConfig::default()))
    }
}

impl Formula {
    /// Shorthand for [`TruthTable::generate`].
    pub fn truth_table(&self) -> Result<TruthTable, EvalError> {
        TruthTable::generate(self)
    }
}

/// Render only the root column as a bit string, row 0 first (e.g. `"0001"` for `a&b`).
pub fn root_bits(table: &TruthTable) -> String {
    let mut s = String::with_capacity(table.num_rows());
    for value in table.root_column() {
        s.push(if value { '1' } else { '0' });
    }
    s
}
