// ============================================================
// Layer 4 — Caption Table
// ============================================================
// Reads the whole-corpus caption CSV (MSR Video Description
// Corpus) and writes per-split subsets of it.
//
// File layout:
//   VideoID,Start,End,WorkerID,Source,AnnotationTime,Language,Description
//   mv89psg6zh4,33,46,1,clean,...,English,A bird is bathing in a sink.
//   ...
//
// A clip is identified by `{VideoID}_{Start}_{End}`; the same clip
// appears once per caption. Records are read with the `csv` crate,
// so quoted descriptions may contain commas, quotes and newlines.
// Every record is carried through to the subset files field for
// field.
//
// Reference: Rust Book §9 (Error Handling), csv crate documentation

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};
use std::{collections::HashSet, fs, path::Path};

/// One caption record and the clip it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRow {
    pub video_key: String,
    pub record:    StringRecord,
}

/// The parsed caption file: its header and every data row.
#[derive(Debug, Clone, Default)]
pub struct CaptionTable {
    pub header: StringRecord,
    pub rows:   Vec<CaptionRow>,
}

impl CaptionTable {
    /// Read and parse a caption CSV from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read caption table '{}'", path.display()))?;

        let table = Self::parse(&text)
            .with_context(|| format!("Invalid caption table '{}'", path.display()))?;
        tracing::info!(
            "Loaded {} captions for {} clips from '{}'",
            table.rows.len(),
            table.video_keys().len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse caption CSV text. Records without the three key columns
    /// are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());
        let header = reader.headers().context("Cannot read caption header")?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Cannot read caption record")?;
            match video_key(&record) {
                Some(video_key) => rows.push(CaptionRow { video_key, record }),
                None => tracing::warn!(
                    "Skipping malformed caption record at line {}: {:?}",
                    record.position().map_or(0, |p| p.line()),
                    record
                ),
            }
        }

        Ok(Self { header, rows })
    }

    /// Unique clip keys in order of first appearance.
    pub fn video_keys(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter(|row| seen.insert(row.video_key.as_str()))
            .map(|row| row.video_key.clone())
            .collect()
    }

    /// Number of caption rows belonging to the clips in `keys`.
    pub fn count_subset(&self, keys: &[String]) -> usize {
        let wanted = key_set(keys);
        self.rows.iter().filter(|r| wanted.contains(r.video_key.as_str())).count()
    }

    /// Write the header and every row whose clip is in `keys`.
    /// Returns the number of caption rows written.
    pub fn write_subset(&self, path: impl AsRef<Path>, keys: &[String]) -> Result<usize> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let wanted     = key_set(keys);
        let mut writer = Writer::from_path(path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;

        writer.write_record(&self.header)?;
        let mut written = 0;
        for row in self.rows.iter().filter(|r| wanted.contains(r.video_key.as_str())) {
            writer.write_record(&row.record)?;
            written += 1;
        }
        writer.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} captions to '{}'", written, path.display());
        Ok(written)
    }
}

fn key_set(keys: &[String]) -> HashSet<&str> {
    keys.iter().map(String::as_str).collect()
}

/// `{VideoID}_{Start}_{End}` from the first three columns.
fn video_key(record: &StringRecord) -> Option<String> {
    let video_id = record.get(0)?.trim();
    let start    = record.get(1)?.trim();
    let end      = record.get(2)?.trim();
    if video_id.is_empty() || start.is_empty() || end.is_empty() {
        return None;
    }
    Some(format!("{video_id}_{start}_{end}"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
VideoID,Start,End,WorkerID,Source,AnnotationTime,Language,Description
mv89psg6zh4,33,46,1,clean,15,English,A bird is bathing in a sink.
mv89psg6zh4,33,46,2,clean,12,English,\"A bird splashes around, happily.\"
bad-line
60x_yxy7Sfw,1,8,3,clean,20,English,A man is cutting a tomato.
";

    #[test]
    fn test_parse_keys_and_rows() {
        let table = CaptionTable::parse(SAMPLE).unwrap();
        assert_eq!(table.header.get(0), Some("VideoID"));
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.video_keys(), vec!["mv89psg6zh4_33_46", "60x_yxy7Sfw_1_8"]);
    }

    #[test]
    fn test_commas_in_description_are_kept() {
        let table = CaptionTable::parse(SAMPLE).unwrap();
        assert_eq!(table.rows[1].record.get(7), Some("A bird splashes around, happily."));
    }

    #[test]
    fn test_multiline_description_is_one_caption() {
        let text = "\
VideoID,Start,End,WorkerID,Source,AnnotationTime,Language,Description
a1,1,2,1,clean,5,English,\"A man, then
another man, then, a dog\"
b2,3,4,1,clean,5,English,A cat.
";
        let table = CaptionTable::parse(text).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.video_keys(), vec!["a1_1_2", "b2_3_4"]);
        assert_eq!(table.rows[0].record.get(7), Some("A man, then\nanother man, then, a dog"));

        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.csv");
        assert_eq!(table.write_subset(&path, &["a1_1_2".to_string()]).unwrap(), 1);

        let back = CaptionTable::load(&path).unwrap();
        assert_eq!(back.header, table.header);
        assert_eq!(back.rows, vec![table.rows[0].clone()]);
    }

    #[test]
    fn test_empty_input() {
        let table = CaptionTable::parse("").unwrap();
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_count_matches_write() {
        let dir   = tempfile::tempdir().unwrap();
        let path  = dir.path().join("metadata").join("val.csv");
        let table = CaptionTable::parse(SAMPLE).unwrap();
        let keys  = vec!["mv89psg6zh4_33_46".to_string()];

        assert_eq!(table.count_subset(&keys), 2);
        assert_eq!(table.write_subset(&path, &keys).unwrap(), 2);

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().next().unwrap().starts_with("VideoID"));
        assert!(!text.contains("tomato"));
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = CaptionTable::load("/definitely/not/here.csv").unwrap_err();
        assert!(err.to_string().contains("Cannot read caption table"));
    }
}
