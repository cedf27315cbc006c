//! CSV export: serialization, filename generation, file writing.
//!
//! The byte layout is the one external contract of the application and is
//! consumed by spreadsheet software expecting Brazilian-locale CSV: UTF-8
//! with a BOM, semicolon delimiters, `Código;Descrição;Quantidade` header.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};

use crate::registry::ProductRegistry;

const BOM: &str = "\u{FEFF}";
const HEADER: &str = "Código;Descrição;Quantidade";

/// Serialize the registry to the exported byte sequence.
///
/// BOM, then the header line, then one `code;description;quantity` row per
/// record in registry order, `\n`-separated with no trailing newline after
/// the last record. Fields are never quoted, so an embedded semicolon
/// corrupts its row (known limitation). An empty registry yields just the
/// BOM and header line.
pub fn csv_bytes(registry: &ProductRegistry) -> Vec<u8> {
    let rows: Vec<String> = registry
        .iter()
        .map(|r| format!("{};{};{}", r.code, r.description, r.quantity))
        .collect();
    format!("{}{}\n{}", BOM, HEADER, rows.join("\n")).into_bytes()
}

/// Render `now` as `dd/mm/yyyy hh:mm:ss` with `/`, `:` and spaces replaced
/// by underscores, ready for use in a filename.
pub fn timestamp_slug(now: DateTime<FixedOffset>) -> String {
    now.format("%d/%m/%Y %H:%M:%S")
        .to_string()
        .replace(['/', ':', ' '], "_")
}

/// `{trimmed project name}_{timestamp}.csv`
pub fn export_filename(project_name: &str, now: DateTime<FixedOffset>) -> String {
    format!("{}_{}.csv", project_name.trim(), timestamp_slug(now))
}

/// Write the CSV into `dir`, creating the directory if needed.
///
/// Returns the full path of the written file. The registry may be empty;
/// the file then contains only the BOM and header.
pub fn write_export(
    dir: &Path,
    registry: &ProductRegistry,
    project_name: &str,
    now: DateTime<FixedOffset>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create export directory {}", dir.display()))?;
    let path = dir.join(export_filename(project_name, now));
    fs::write(&path, csv_bytes(registry))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::registry::ProductRecord;
    use proptest::prelude::*;

    /// Field text that cannot break the unquoted format.
    fn field_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9à-ÿ ._-]{1,12}"
    }

    proptest! {
        /// Property: stripping BOM and header and splitting on `;`/`\n`
        /// recovers the records, values and order intact.
        #[test]
        fn csv_body_round_trips(
            records in prop::collection::vec(
                (field_strategy(), field_strategy(), 0u32..10_000),
                1..8,
            )
        ) {
            let mut registry = ProductRegistry::new();
            for (code, description, quantity) in &records {
                registry.add(ProductRecord::new(code.clone(), description.clone(), *quantity));
            }

            let text = String::from_utf8(csv_bytes(&registry)).unwrap();
            let body = text
                .strip_prefix('\u{FEFF}')
                .and_then(|t| t.strip_prefix("Código;Descrição;Quantidade\n"))
                .unwrap();

            let parsed: Vec<(String, String, u32)> = body
                .split('\n')
                .map(|line| {
                    let mut parts = line.split(';');
                    (
                        parts.next().unwrap().to_string(),
                        parts.next().unwrap().to_string(),
                        parts.next().unwrap().parse().unwrap(),
                    )
                })
                .collect();

            prop_assert_eq!(parsed, records);
        }
    }
}
