use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::core::NameEntry;
use crate::error::{SurferError, SurferResult};

use super::lookup::{EntryLookup, normalize_name};

/// In-memory name database keyed by lowercase name.
///
/// Built once from a line-oriented file and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NameDatabase {
    entries: HashMap<String, NameEntry>,
}

impl NameDatabase {
    /// Reads and parses the database file at `path`.
    ///
    /// Any I/O failure or malformed record aborts the load.
    pub fn load(path: impl AsRef<Path>) -> SurferResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SurferError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let database = Self::read_lines(BufReader::new(file), |source| SurferError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            entries = database.len(),
            "loaded name database"
        );
        Ok(database)
    }

    /// Parses records from any buffered reader.
    pub fn from_reader(reader: impl BufRead) -> SurferResult<Self> {
        Self::read_lines(reader, |source| SurferError::Io {
            path: "<reader>".into(),
            source,
        })
    }

    pub fn parse_str(input: &str) -> SurferResult<Self> {
        Self::from_reader(input.as_bytes())
    }

    fn read_lines(
        reader: impl BufRead,
        map_io: impl Fn(std::io::Error) -> SurferError,
    ) -> SurferResult<Self> {
        let mut entries = HashMap::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(&map_io)?;
            if line.trim().is_empty() {
                continue;
            }

            let line_number = index + 1;
            let entry = NameEntry::parse_line(&line, line_number)?;
            if let Some(previous) = entries.insert(normalize_name(entry.name()), entry) {
                warn!(
                    line_number,
                    name = previous.name(),
                    "duplicate name record, keeping the later line"
                );
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Original-case names of every record, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(NameEntry::name)
    }
}

impl EntryLookup for NameDatabase {
    fn find_entry(&self, name: &str) -> Option<&NameEntry> {
        self.entries.get(&normalize_name(name))
    }
}

impl FromIterator<NameEntry> for NameDatabase {
    fn from_iter<I: IntoIterator<Item = NameEntry>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| (normalize_name(entry.name()), entry))
            .collect();
        Self { entries }
    }
}
