//! AHRQ/HCUP publication parser.
//!
//! The comorbidity software is published as a SAS program whose
//! `Value $RCOMFMT` block assigns a comorbidity group to each ICD-10-CM
//! code:
//!
//! ```text
//! Value $RCOMFMT
//!   "B20"="AIDS"
//!   "F1010",
//!   "F10120"="ALCOHOL"
//!   ...
//!   ;
//! ```
//!
//! A quoted code followed by a comma joins the codes accumulated for the next
//! assignment; a `"CODE"="GROUP"` line assigns the group to the accumulated
//! codes and to itself. The block ends at a lone `;`.
//!
//! This is the offline build step for the tab-separated artifact: parse the
//! publication once per release, write the artifact with
//! [`DxMap::write_tsv`](crate::DxMap::write_tsv), and check the artifact in.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use elix_types::MapGroup;

use crate::parser::MapEntry;
use crate::types::{MapError, MapResult};

/// Marker line opening the code-to-group format block.
const BLOCK_START: &str = "Value $RCOMFMT";

/// Marker line closing the format block.
const BLOCK_END: &str = ";";

/// Statistics from parsing a publication file.
#[derive(Debug, Clone, Default)]
pub struct ComfmtStats {
    /// Total lines read, including text outside the format block.
    pub lines_read: usize,
    /// Group-assignment lines seen inside the block.
    pub assignments: usize,
    /// Map entries produced (codes bound to a group).
    pub entries: usize,
    /// Lines inside the block that matched neither pattern.
    pub skipped_lines: usize,
}

/// Parsed publication output: the entries plus parse statistics.
#[derive(Debug, Default)]
pub struct ComfmtOutput {
    /// Diagnosis-map entries in publication order.
    pub entries: Vec<MapEntry>,
    /// Parse statistics.
    pub stats: ComfmtStats,
}

/// Parses the `Value $RCOMFMT` block from a publication file.
///
/// # Errors
/// Returns an error if the file cannot be read, contains no format block,
/// or names a group outside the published vocabulary.
pub fn parse_path<P: AsRef<Path>>(path: P) -> MapResult<ComfmtOutput> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MapError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    parse_reader(BufReader::new(File::open(path)?))
}

/// Parses the `Value $RCOMFMT` block from a reader.
///
/// # Errors
/// See [`parse_path`].
pub fn parse_reader<R: BufRead>(reader: R) -> MapResult<ComfmtOutput> {
    let mut out = ComfmtOutput::default();
    let mut in_block = false;
    let mut terminated = false;
    // Codes waiting for the group named on the next assignment line.
    let mut pending: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        out.stats.lines_read += 1;
        let trimmed = line.trim();

        if !in_block {
            if trimmed == BLOCK_START {
                in_block = true;
            }
            continue;
        }
        if trimmed == BLOCK_END {
            terminated = true;
            break;
        }

        let quotes = quoted_parts(trimmed);
        if trimmed.contains('=') && quotes.len() >= 2 {
            out.stats.assignments += 1;
            let code = quotes[0].trim();
            let tag = quotes[1].trim();
            let line_no = out.stats.lines_read as u64;
            let group = MapGroup::from_tag(tag).ok_or_else(|| MapError::UnknownGroup {
                value: tag.to_string(),
                line: line_no,
            })?;
            for code in pending.drain(..) {
                out.entries.push(MapEntry::new(&code, group)?);
                out.stats.entries += 1;
            }
            out.entries.push(MapEntry::new(code, group)?);
            out.stats.entries += 1;
        } else if trimmed.contains(',') && quotes.len() == 1 {
            pending.push(quotes[0].trim().to_string());
        } else {
            tracing::trace!(line = trimmed, "skipping unrecognized format line");
            out.stats.skipped_lines += 1;
        }
    }

    if !in_block {
        return Err(MapError::MissingValueBlock);
    }
    if !terminated {
        return Err(MapError::UnterminatedValueBlock);
    }

    tracing::debug!(
        entries = out.stats.entries,
        assignments = out.stats.assignments,
        "parsed publication format block"
    );

    Ok(out)
}

/// Returns the quoted segments of a line, in order.
fn quoted_parts(line: &str) -> Vec<&str> {
    line.split('"')
        .enumerate()
        .filter(|(i, _)| i % 2 == 1)
        .map(|(_, part)| part)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use elix_types::{Comorbidity, HypertensionGroup};

    const SAMPLE: &str = r#"
 /* Comorbidity format, data years 2012-2015 */
 Value $RCOMFMT
   "B20"="AIDS"
   "F1010",
   "F10120",
   "F10121"="ALCOHOL"
   "I110"="HTNWCHF"
   "Z7901"="NONE"
   ;
 run;
"#;

    #[test]
    fn test_parse_sample_block() {
        let out = parse_reader(SAMPLE.as_bytes()).unwrap();

        let entries: Vec<(&str, MapGroup)> = out
            .entries
            .iter()
            .map(|e| (&*e.prefix, e.group))
            .collect();
        assert_eq!(
            entries,
            [
                ("B20", MapGroup::Comorbidity(Comorbidity::Aids)),
                ("F1010", MapGroup::Comorbidity(Comorbidity::Alcohol)),
                ("F10120", MapGroup::Comorbidity(Comorbidity::Alcohol)),
                ("F10121", MapGroup::Comorbidity(Comorbidity::Alcohol)),
                (
                    "I110",
                    MapGroup::Hypertension(HypertensionGroup::HeartWithChf)
                ),
                ("Z7901", MapGroup::Unmapped),
            ]
        );
        assert_eq!(out.stats.assignments, 4);
        assert_eq!(out.stats.entries, 6);
    }

    #[test]
    fn test_text_outside_block_is_ignored() {
        let text = "libname in \"elsewhere\";\nValue $RCOMFMT\n\"B20\"=\"AIDS\"\n;\n";
        let out = parse_reader(text.as_bytes()).unwrap();
        assert_eq!(out.entries.len(), 1);
    }

    #[test]
    fn test_missing_block() {
        let err = parse_reader("no format here\n".as_bytes()).err().unwrap();
        assert!(matches!(err, MapError::MissingValueBlock));
    }

    #[test]
    fn test_unterminated_block() {
        let err = parse_reader("Value $RCOMFMT\n\"B20\"=\"AIDS\"\n".as_bytes())
            .err()
            .unwrap();
        assert!(matches!(err, MapError::UnterminatedValueBlock));
    }

    #[test]
    fn test_unknown_group_in_block() {
        let err = parse_reader("Value $RCOMFMT\n\"B20\"=\"WAT\"\n;\n".as_bytes())
            .err()
            .unwrap();
        assert!(matches!(err, MapError::UnknownGroup { ref value, .. } if value == "WAT"));
    }

    #[test]
    fn test_quoted_parts() {
        assert_eq!(quoted_parts("\"A123\"=\"CHF\""), ["A123", "CHF"]);
        assert_eq!(quoted_parts("\"A123\","), ["A123"]);
        assert!(quoted_parts("run;").is_empty());
    }
}
