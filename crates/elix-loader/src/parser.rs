//! Diagnosis-map artifact parser.
//!
//! Parses the canonical tab-separated artifact of the diagnosis map: a
//! header line `prefix<TAB>group` followed by one mapping per row. The
//! artifact is produced from the AHRQ/HCUP publication by the [`comfmt`]
//! build step and checked in as a versioned dataset.
//!
//! [`comfmt`]: crate::comfmt

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};
use elix_types::MapGroup;

use crate::types::{MapError, MapResult};

/// Expected columns in a diagnosis-map artifact.
pub const ARTIFACT_COLUMNS: &[&str] = &["prefix", "group"];

/// Longest diagnosis-code prefix the map may carry.
pub(crate) const MAX_PREFIX_LEN: usize = 7;

/// One row of the diagnosis-map artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapEntry {
    /// Normalized diagnosis-code prefix (uppercase, no periods).
    pub prefix: Box<str>,
    /// The comorbidity group the prefix resolves to.
    pub group: MapGroup,
}

impl MapEntry {
    /// Validates a prefix and builds an entry.
    ///
    /// # Errors
    /// Returns [`MapError::InvalidPrefix`] for an empty, overlong, or
    /// non-alphanumeric prefix.
    pub fn new(prefix: &str, group: MapGroup) -> MapResult<Self> {
        let prefix = prefix.trim();
        if prefix.is_empty()
            || prefix.len() > MAX_PREFIX_LEN
            || !prefix.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(MapError::InvalidPrefix {
                value: prefix.to_string(),
            });
        }
        Ok(Self {
            prefix: prefix.into(),
            group,
        })
    }
}

/// A streaming parser for diagnosis-map artifacts.
///
/// Yields [`MapEntry`] values row by row; collect through
/// [`DxMap::from_reader`](crate::DxMap::from_reader) for the usual
/// load-at-startup path.
///
/// # Example
///
/// ```
/// use elix_loader::ArtifactParser;
///
/// let artifact = "prefix\tgroup\nI509\tCHF\n";
/// let entries: Vec<_> = ArtifactParser::from_reader(artifact.as_bytes())
///     .unwrap()
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(&*entries[0].prefix, "I509");
/// ```
pub struct ArtifactParser<R: Read> {
    reader: Reader<R>,
    records_read: usize,
}

impl ArtifactParser<BufReader<File>> {
    /// Creates a parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(MapError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> ArtifactParser<R> {
    /// Creates a parser from a reader.
    pub fn from_reader(reader: R) -> MapResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .trim(csv::Trim::All)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            records_read: 0,
        })
    }

    /// Validates that the artifact has the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> MapResult<()> {
        let headers = reader.headers()?;

        if headers.len() < ARTIFACT_COLUMNS.len() {
            return Err(MapError::InvalidHeader {
                expected: ARTIFACT_COLUMNS.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in ARTIFACT_COLUMNS.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(MapError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the number of records read so far.
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn parse_record(&self, record: &StringRecord) -> MapResult<MapEntry> {
        let prefix = record.get(0).unwrap_or("");
        let tag = record.get(1).unwrap_or("");
        let group = MapGroup::from_tag(tag).ok_or_else(|| MapError::UnknownGroup {
            value: tag.to_string(),
            line: record
                .position()
                .map(|p| p.line())
                .unwrap_or(self.records_read as u64 + 1),
        })?;
        MapEntry::new(prefix, group)
    }
}

impl<R: Read> Iterator for ArtifactParser<R> {
    type Item = MapResult<MapEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    self.records_read += 1;

                    // Skip blank records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    return Some(self.parse_record(&record));
                }
                Ok(false) => return None, // End of file
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}
