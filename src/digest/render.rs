//! Text rendering of a selected symbol set.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::types::{ScoredSymbol, SymbolKind};

/// Marks elided source between two rendered symbols, and the tail of every
/// file section.
const GAP_MARKER: &str = "⋮...";

/// Render the selected symbols as the digest text.
///
/// Files appear alphabetically by path; within a file, symbols are ordered
/// by score descending then source line ascending. Output uses `\n` line
/// endings only.
pub fn build_map_content(symbols: &[ScoredSymbol<'_>]) -> String {
    let mut by_file: BTreeMap<&str, Vec<&ScoredSymbol<'_>>> = BTreeMap::new();
    for scored in symbols {
        by_file
            .entry(scored.symbol.relative_path.as_str())
            .or_default()
            .push(scored);
    }

    let mut out = String::new();

    for (path, mut group) in by_file {
        group.sort_by(|a, b| {
            b.rank
                .partial_cmp(&a.rank)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.symbol.line.cmp(&b.symbol.line))
        });

        let _ = writeln!(out, "{path}:");
        out.push_str("│\n");

        let mut last_line: i64 = -1;
        for scored in group {
            let symbol = scored.symbol;

            if last_line != -1 && i64::from(symbol.line) - last_line > 1 {
                out.push_str(GAP_MARKER);
                out.push('\n');
            }

            match symbol.kind {
                SymbolKind::Class => {
                    let _ = writeln!(out, "│{} class {}", symbol.visibility, symbol.name);
                }
                SymbolKind::Method => {
                    let parameters = symbol.parameters.join(", ");
                    let _ = writeln!(
                        out,
                        "│ {} {} {}({})",
                        symbol.visibility, symbol.return_type, symbol.name, parameters
                    );
                }
                SymbolKind::Property => {
                    let _ = writeln!(
                        out,
                        "│ {} {} {}",
                        symbol.visibility, symbol.return_type, symbol.name
                    );
                }
            }

            last_line = i64::from(symbol.line);
        }

        out.push_str(GAP_MARKER);
        out.push('\n');
    }

    out
}
