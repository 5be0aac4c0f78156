//! Identifier lists, one identifier per line.
//!
//! Identifiers are trimmed and upper-cased, so `brca1` and `BRCA1 ` name the
//! same gene. Blank lines and lines starting with `#` are skipped. The
//! resulting list is sorted and duplicate-free.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mset_core::{MsetError, Result};

/// A normalized, sorted, duplicate-free list of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneList {
    ids: Vec<String>,
}

impl GeneList {
    /// Build a list from raw identifiers, normalizing each one.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ids: Vec<String> = ids
            .into_iter()
            .filter_map(|s| normalize(s.as_ref()))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        Self { ids }
    }

    /// Parse a list from in-memory text.
    ///
    /// # Example
    ///
    /// ```
    /// use mset_io::gene_list::GeneList;
    ///
    /// let list = GeneList::parse_str("brca1\nTP53\n\nBRCA1\n# comment\n");
    /// assert_eq!(list.ids(), &["BRCA1".to_string(), "TP53".to_string()]);
    /// ```
    pub fn parse_str(text: &str) -> Self {
        Self::from_ids(text.lines())
    }

    /// Identifiers in ascending order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` (already normalized) is in the list.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.binary_search_by(|probe| probe.as_str().cmp(id)).is_ok()
    }
}

/// Read a list file.
///
/// # Errors
///
/// Returns [`MsetError::Io`] if the file cannot be opened or read, with the
/// path (and line number, for read errors) in the message.
pub fn read_gene_list(path: impl AsRef<Path>) -> Result<GeneList> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        MsetError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let reader = BufReader::new(file);

    let mut raw = Vec::new();
    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| {
            MsetError::Io(std::io::Error::new(
                e.kind(),
                format!("{}: line {}: {}", path.display(), line_num + 1, e),
            ))
        })?;
        raw.push(line);
    }
    let list = GeneList::from_ids(raw);
    tracing::debug!(path = %path.display(), identifiers = list.len(), "read identifier list");
    Ok(list)
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    Some(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn normalizes_case_and_whitespace() {
        let list = GeneList::parse_str("  abc\r\nAbc\nxyz  \n");
        assert_eq!(list.ids(), &["ABC".to_string(), "XYZ".to_string()]);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let list = GeneList::parse_str("\n# header\n   \ngene1\n");
        assert_eq!(list.len(), 1);
        assert!(list.contains("GENE1"));
        assert!(!list.contains("gene1"));
    }

    #[test]
    fn empty_text_is_empty_list() {
        assert!(GeneList::parse_str("").is_empty());
    }

    #[test]
    fn reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tp53").unwrap();
        writeln!(file, "BRCA2").unwrap();
        writeln!(file, "Tp53").unwrap();
        file.flush().unwrap();

        let list = read_gene_list(file.path()).unwrap();
        assert_eq!(list.ids(), &["BRCA2".to_string(), "TP53".to_string()]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_gene_list("/nonexistent/mset/list.txt").unwrap_err();
        match err {
            MsetError::Io(e) => assert!(e.to_string().contains("list.txt")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
