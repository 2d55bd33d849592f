//! Formula to DOT (Graphviz) conversion.
//!
//! The graph mirrors the expression arena: connectives are internal nodes,
//! variables are leaves. Because every occurrence of a variable shares one
//! atom node, the picture is a DAG rather than a tree.
//!
//! # DOT Format
//!
//! - **Atoms** are rendered with `atom_shape`, grouped on the bottom (sink) rank
//! - **Connectives** are rendered with `node_shape` and labelled with their symbol
//! - **Edges** go from a connective to its operands in operand order
//!   (`ordering=out`), so the antecedent of `->` is drawn on the left
//!
//! # Examples
//!
//! ```
//! use truth_table::formula::parse;
//!
//! let f = parse("a->(b|a)").unwrap();
//! let dot = f.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::collections::BTreeSet;

use crate::ast::{Expr, Idx};
use crate::formula::Formula;

/// Configuration options for DOT output generation.
///
/// ```
/// use truth_table::dot::DotConfig;
/// use truth_table::formula::parse;
///
/// let f = parse("!a&b").unwrap();
/// let config = DotConfig {
///     node_shape: "ellipse",
///     ..DotConfig::default()
/// };
/// let dot = f.to_dot_with_config(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for connective nodes (default: "circle")
    pub node_shape: &'static str,
    /// Shape for atom nodes (default: "square")
    pub atom_shape: &'static str,
    /// Style for operand edges (default: "solid")
    pub edge_style: &'static str,
    /// Whether to label connectives with their full sub-expression instead of the symbol (default: false)
    pub full_labels: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            atom_shape: "square",
            edge_style: "solid",
            full_labels: false,
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Formula {
    /// Converts the formula to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the formula to DOT format.
    ///
    /// Node names are `n<index>` after the arena index, so the output is
    /// deterministic for a given input string.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let reachable: BTreeSet<Idx> = self.preorder().into_iter().collect();
        let labels = if config.full_labels { Some(self.labels()) } else { None };

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "ordering=out;")?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        // Atoms at the bottom
        writeln!(dot, "{{ rank=sink")?;
        for &idx in reachable.iter() {
            if let Expr::Atom(v) = *self.node(idx) {
                writeln!(
                    dot,
                    "n{} [shape={}, label=\"{}\"];",
                    idx.index(),
                    config.atom_shape,
                    self.registry().name(v)
                )?;
            }
        }
        writeln!(dot, "}}")?;

        for &idx in reachable.iter() {
            let node = self.node(idx);
            let symbol = match node {
                Expr::Atom(_) => continue,
                Expr::Not(_) => "!".to_string(),
                Expr::Binary(op, _, _) => op.symbol().to_string(),
            };
            let label = match &labels {
                Some(labels) => escape(&labels[idx.index()]),
                None => escape(&symbol),
            };
            writeln!(dot, "n{} [label=\"{}\"];", idx.index(), label)?;
            for child in node.children() {
                writeln!(
                    dot,
                    "n{} -> n{} [style={}];",
                    idx.index(),
                    child.index(),
                    config.edge_style
                )?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
