use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use grocer_types::{ItemCount, SortOrder};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::parse::{ParsedLine, normalize, parse_line};

#[derive(Debug, Error)]
pub enum TallyError {
    #[error("failed to read inventory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write export {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Item key to accumulated quantity, built once and read many times.
///
/// A table that failed to load reports `is_loaded() == false` and otherwise
/// behaves as an empty table: every lookup is 0 and every listing is empty.
/// No query on a table ever fails.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
    loaded: bool,
    source: Option<PathBuf>,
}

impl FrequencyTable {
    /// Table in the not-loaded state.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// Build from an inventory file, recording failure in the loaded flag
    /// instead of returning it.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path_ref = path.as_ref();
        match Self::try_load(path_ref) {
            Ok(table) => table,
            Err(err) => {
                warn!("{err}");
                Self {
                    source: Some(path_ref.to_path_buf()),
                    ..Self::unloaded()
                }
            }
        }
    }

    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Self, TallyError> {
        let path_ref = path.as_ref();
        let read_err = |source| TallyError::Read {
            path: path_ref.to_path_buf(),
            source,
        };

        let file = File::open(path_ref).map_err(read_err)?;
        let mut table = Self::from_reader(BufReader::new(file)).map_err(read_err)?;
        table.source = Some(path_ref.to_path_buf());

        info!(
            "loaded {} items ({} units) from {}",
            table.len(),
            table.total_quantity(),
            path_ref.display()
        );
        Ok(table)
    }

    /// Read lines to end of input. Lines that are not valid UTF-8 are decoded
    /// lossily rather than rejected; only a failing reader is an error.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut table = Self {
            loaded: true,
            ..Self::default()
        };
        let mut buf = Vec::new();
        let mut lineno = 0usize;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            lineno += 1;
            table.ingest(lineno, &String::from_utf8_lossy(&buf));
        }
        Ok(table)
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self {
            loaded: true,
            ..Self::default()
        };
        for (idx, line) in lines.into_iter().enumerate() {
            table.ingest(idx + 1, line.as_ref());
        }
        table
    }

    fn ingest(&mut self, lineno: usize, line: &str) {
        match parse_line(line) {
            Some(ParsedLine { item, quantity }) => {
                let count = self.counts.entry(item).or_insert(0);
                *count = count.saturating_add(u64::from(quantity));
            }
            None => debug!("skipping line {lineno}: no item"),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Path the table was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of distinct item keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every item's count.
    pub fn total_quantity(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    /// Count for `raw` after normalization; 0 when absent.
    pub fn frequency(&self, raw: &str) -> u64 {
        self.counts.get(&normalize(raw)).copied().unwrap_or(0)
    }

    pub fn entries(&self, order: SortOrder) -> Vec<ItemCount> {
        let mut entries: Vec<ItemCount> = self
            .counts
            .iter()
            .map(|(item, &count)| ItemCount::new(item.as_str(), count))
            .collect();
        match order {
            SortOrder::Unsorted => {}
            SortOrder::Alpha => entries.sort_unstable_by(|a, b| a.item.cmp(&b.item)),
            SortOrder::CountDesc => entries.sort_unstable_by(|a, b| {
                b.count.cmp(&a.count).then_with(|| a.item.cmp(&b.item))
            }),
        }
        entries
    }

    /// Map iteration order. Differs between runs; do not depend on it.
    pub fn list_unsorted(&self) -> Vec<ItemCount> {
        self.entries(SortOrder::Unsorted)
    }

    pub fn list_sorted_alpha(&self) -> Vec<ItemCount> {
        self.entries(SortOrder::Alpha)
    }

    pub fn list_sorted_by_count_desc(&self) -> Vec<ItemCount> {
        self.entries(SortOrder::CountDesc)
    }

    /// One `<item> <bar * count>` line per entry, held in memory. Use
    /// [`Self::write_histogram`] for output; it never builds a whole bar.
    pub fn render_histogram(&self, order: SortOrder, bar: char) -> Vec<String> {
        self.entries(order)
            .iter()
            .map(|entry| histogram_line(entry, bar))
            .collect()
    }

    pub fn write_listing<W: Write>(&self, order: SortOrder, out: &mut W) -> io::Result<()> {
        for entry in self.entries(order) {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }

    pub fn write_histogram<W: Write>(
        &self,
        order: SortOrder,
        bar: char,
        out: &mut W,
    ) -> io::Result<()> {
        let chunk = bar_chunk(bar);
        let per_chunk = BAR_CHUNK_LEN as u64;
        for entry in self.entries(order) {
            write!(out, "{} ", entry.item)?;
            let mut remaining = entry.count;
            while remaining >= per_chunk {
                out.write_all(chunk.as_bytes())?;
                remaining -= per_chunk;
            }
            // remaining < BAR_CHUNK_LEN here
            let tail = remaining as usize * bar.len_utf8();
            out.write_all(&chunk.as_bytes()[..tail])?;
            writeln!(out)?;
        }
        Ok(())
    }

    /// Export lines in map order. Deliberately unsorted: this is the
    /// `frequency.dat` layout older releases wrote.
    pub fn export_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.write_listing(SortOrder::Unsorted, out)
    }

    pub fn try_export<P: AsRef<Path>>(&self, path: P) -> Result<(), TallyError> {
        let path_ref = path.as_ref();
        let write_err = |source| TallyError::Write {
            path: path_ref.to_path_buf(),
            source,
        };

        let file = File::create(path_ref).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        self.export_to(&mut out).map_err(write_err)?;
        out.flush().map_err(write_err)?;

        info!("exported {} items to {}", self.len(), path_ref.display());
        Ok(())
    }

    /// Fail-soft export: `false` when the file cannot be created or written.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> bool {
        match self.try_export(path) {
            Ok(()) => true,
            Err(err) => {
                warn!("{err}");
                false
            }
        }
    }
}

/// Bar characters written per `write_all` call.
const BAR_CHUNK_LEN: usize = 8192;

fn bar_chunk(bar: char) -> String {
    std::iter::repeat_n(bar, BAR_CHUNK_LEN).collect()
}

fn histogram_line(entry: &ItemCount, bar: char) -> String {
    let bars = usize::try_from(entry.count).unwrap_or(usize::MAX);
    let mut line = format!("{} ", entry.item);
    line.extend(std::iter::repeat_n(bar, bars));
    line
}
