//! In-memory diagnosis map store.
//!
//! Provides prefix lookup from normalized ICD-10-CM codes to comorbidity
//! groups. The store is immutable after construction and safe to share
//! across threads without locks.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, Read, Write};
use std::path::Path;

use elix_types::MapGroup;

use crate::comfmt;
use crate::parser::{ArtifactParser, MapEntry, MAX_PREFIX_LEN};
use crate::types::{MapError, MapResult};

/// The diagnosis prefix map.
///
/// Maps diagnosis-code prefixes (1-7 characters) to comorbidity groups.
/// Lookup probes prefixes of a code from shortest to longest, so broader
/// code families take precedence over any longer entry that happens to
/// share a stem.
///
/// # Example
///
/// ```
/// use elix_loader::DxMap;
/// use elix_types::{Comorbidity, MapGroup};
///
/// let map = DxMap::from_reader("prefix\tgroup\nI509\tCHF\n".as_bytes()).unwrap();
/// assert_eq!(
///     map.lookup("I509"),
///     Some(MapGroup::Comorbidity(Comorbidity::HeartFailure))
/// );
/// assert_eq!(map.lookup("K219"), None);
/// ```
#[derive(Debug, Clone)]
pub struct DxMap {
    /// Map entries indexed by prefix.
    entries: HashMap<Box<str>, MapGroup>,
}

impl DxMap {
    /// Shortest prefix length probed during lookup.
    pub const MIN_PROBE: usize = 4;
    /// Longest prefix length probed during lookup.
    pub const MAX_PROBE: usize = MAX_PREFIX_LEN;

    /// Loads the tab-separated artifact from a file path.
    ///
    /// # Errors
    /// Any parse failure, or an artifact with no entries, is fatal: the
    /// caller gets no map and must not serve scoring requests.
    pub fn from_path<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let path = path.as_ref();
        let map = Self::collect(ArtifactParser::from_path(path)?)?;
        tracing::info!(
            entries = map.len(),
            path = %path.display(),
            "loaded diagnosis map"
        );
        Ok(map)
    }

    /// Loads the tab-separated artifact from a reader.
    pub fn from_reader<R: Read>(reader: R) -> MapResult<Self> {
        Self::collect(ArtifactParser::from_reader(reader)?)
    }

    /// Builds the map from the AHRQ/HCUP publication text at a path.
    ///
    /// This is the offline build step; pair with [`write_tsv`](Self::write_tsv)
    /// to regenerate the artifact.
    pub fn from_comfmt_path<P: AsRef<Path>>(path: P) -> MapResult<Self> {
        let out = comfmt::parse_path(path.as_ref())?;
        let map = Self::from_entries(out.entries)?;
        tracing::info!(
            entries = map.len(),
            path = %path.as_ref().display(),
            "built diagnosis map from publication"
        );
        Ok(map)
    }

    /// Builds the map from AHRQ/HCUP publication text in a reader.
    pub fn from_comfmt_reader<R: BufRead>(reader: R) -> MapResult<Self> {
        Self::from_entries(comfmt::parse_reader(reader)?.entries)
    }

    /// Builds the map from parsed entries.
    ///
    /// Later entries win over earlier ones for the same prefix, matching the
    /// published table's last-assignment-wins semantics.
    pub fn from_entries<I>(entries: I) -> MapResult<Self>
    where
        I: IntoIterator<Item = MapEntry>,
    {
        let mut map = HashMap::new();
        for entry in entries {
            if let Some(old) = map.insert(entry.prefix.clone(), entry.group) {
                if old != entry.group {
                    tracing::warn!(
                        prefix = &*entry.prefix,
                        old = old.tag(),
                        new = entry.group.tag(),
                        "duplicate prefix in diagnosis map, keeping the later entry"
                    );
                }
            }
        }
        if map.is_empty() {
            return Err(MapError::EmptyMap);
        }
        Ok(Self { entries: map })
    }

    /// Convenience constructor from `(prefix, tag)` pairs.
    ///
    /// # Errors
    /// Rejects unknown group tags and invalid prefixes.
    pub fn from_pairs<'a, I>(pairs: I) -> MapResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(i, (prefix, tag))| {
                let group = MapGroup::from_tag(tag).ok_or_else(|| MapError::UnknownGroup {
                    value: tag.to_string(),
                    line: i as u64 + 1,
                })?;
                MapEntry::new(prefix, group)
            })
            .collect::<MapResult<Vec<_>>>()?;
        Self::from_entries(entries)
    }

    /// Resolves a normalized diagnosis code to its comorbidity group.
    ///
    /// Probes prefixes of the code from length [`MIN_PROBE`](Self::MIN_PROBE)
    /// to [`MAX_PROBE`](Self::MAX_PROBE) inclusive and returns the group of
    /// the first (shortest) matching prefix. A code shorter than the probe
    /// length is probed whole, once, so short codes such as `I10` still
    /// resolve when the table carries them.
    ///
    /// Returns `None` when no prefix matches; `Some(MapGroup::Unmapped)` when
    /// the table explicitly lists the code as carrying no comorbidity.
    pub fn lookup(&self, code: &str) -> Option<MapGroup> {
        if code.is_empty() {
            return None;
        }
        for len in Self::MIN_PROBE..=Self::MAX_PROBE {
            // Fall back to the whole code when it is shorter than the probe.
            let prefix = code.get(..len).unwrap_or(code);
            if let Some(group) = self.entries.get(prefix) {
                return Some(*group);
            }
            if prefix.len() >= code.len() {
                return None;
            }
        }
        None
    }

    /// Returns the group stored for an exact prefix, without probing.
    pub fn get(&self, prefix: &str) -> Option<MapGroup> {
        self.entries.get(prefix).copied()
    }

    /// Returns the number of prefixes in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    ///
    /// Constructors reject empty sources, so this is false for any map they
    /// return.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(prefix, group)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, MapGroup)> + '_ {
        self.entries.iter().map(|(prefix, group)| (&**prefix, *group))
    }

    /// Writes the map as a tab-separated artifact, sorted by prefix.
    ///
    /// Sorting makes regeneration deterministic so artifact diffs track
    /// dataset changes only.
    pub fn write_tsv<W: Write>(&self, writer: W) -> MapResult<()> {
        let mut rows: Vec<(&str, MapGroup)> = self.iter().collect();
        rows.sort_by_key(|&(prefix, _)| prefix);

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(writer);
        csv_writer.write_record(crate::parser::ARTIFACT_COLUMNS)?;
        for (prefix, group) in rows {
            csv_writer.write_record([prefix, group.tag()])?;
        }
        csv_writer.flush().map_err(MapError::Io)?;
        Ok(())
    }

    fn collect<R: Read>(parser: ArtifactParser<R>) -> MapResult<Self> {
        Self::from_entries(parser.collect::<MapResult<Vec<_>>>()?)
    }
}

/// Writes a freshly parsed publication straight to an artifact file.
///
/// The one-call build step: `comfmt` text in, versioned TSV artifact out.
pub fn rebuild_artifact<P: AsRef<Path>, Q: AsRef<Path>>(
    publication: P,
    artifact: Q,
) -> MapResult<DxMap> {
    let map = DxMap::from_comfmt_path(publication)?;
    map.write_tsv(File::create(artifact.as_ref())?)?;
    tracing::info!(
        entries = map.len(),
        artifact = %artifact.as_ref().display(),
        "rebuilt diagnosis-map artifact"
    );
    Ok(map)
}
