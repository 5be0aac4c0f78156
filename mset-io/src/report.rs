//! Result tables and terminal rendering.
//!
//! - [`write_histogram_tsv`] — `size<TAB>mass` per bin, ascending
//! - [`render_ascii_histogram`] — one `*` per 0.004 of probability mass
//! - [`RunSummary`] — key/value overview of a run, as TSV or an aligned table

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mset_core::{MsetError, Result};
use mset_stats::Histogram;

/// Probability mass drawn as one star in [`render_ascii_histogram`].
pub const STAR_MASS: f64 = 0.004;

/// Write a histogram as tab-separated `size`/`mass` lines.
pub fn write_histogram_tsv<W: Write>(hist: &Histogram, mut writer: W) -> Result<()> {
    for (size, mass) in hist.iter() {
        writeln!(writer, "{}\t{}", size, mass)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a histogram TSV to `path`, creating or truncating it.
pub fn write_histogram_file(hist: &Histogram, path: impl AsRef<Path>) -> Result<()> {
    let writer = create(path.as_ref())?;
    write_histogram_tsv(hist, writer)
}

/// Render a histogram as rows of stars.
///
/// # Example
///
/// ```
/// use mset_io::report::render_ascii_histogram;
/// use mset_stats::build_histogram;
///
/// let text = render_ascii_histogram(&build_histogram(&[0, 1, 1, 1]));
/// assert!(text.contains(" 0 ***"));
/// ```
pub fn render_ascii_histogram(hist: &Histogram) -> String {
    let mut out = String::from("Sizes of Sample Intersects:\n");
    for (size, mass) in hist.iter() {
        let stars = (mass / STAR_MASS) as usize;
        out.push_str(&format!("{:>2} {}\n", size, "*".repeat(stars)));
    }
    out
}

/// Key facts about one significance run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub universe_size: usize,
    pub list1_size: usize,
    pub list2_size: usize,
    /// Identifiers of list 1 dropped because they are not in the universe.
    pub list1_missing: usize,
    pub list2_missing: usize,
    pub observed_overlap: usize,
    pub trials: usize,
    pub seed: u64,
    /// Mean overlap of the null distribution (`None` with zero trials).
    pub null_mean: Option<f64>,
}

impl RunSummary {
    /// Expected overlap under independent selection, `n1 * n2 / U`.
    pub fn expected_overlap(&self) -> f64 {
        if self.universe_size == 0 {
            return 0.0;
        }
        self.list1_size as f64 * self.list2_size as f64 / self.universe_size as f64
    }

    /// Ordered `(key, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("universe_size", self.universe_size.to_string()),
            ("list1_size", self.list1_size.to_string()),
            ("list2_size", self.list2_size.to_string()),
            ("list1_missing", self.list1_missing.to_string()),
            ("list2_missing", self.list2_missing.to_string()),
            ("observed_overlap", self.observed_overlap.to_string()),
            ("expected_overlap", format!("{:.4}", self.expected_overlap())),
            (
                "null_mean",
                self.null_mean
                    .map_or_else(|| "NA".to_string(), |m| format!("{:.4}", m)),
            ),
            ("trials", self.trials.to_string()),
            ("seed", self.seed.to_string()),
        ]
    }

    /// Keys right-aligned in a 20-column field, tab, value.
    pub fn render(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(k, v)| format!("{:>20}\t{}\n", k, v))
            .collect()
    }
}

/// Write a summary as tab-separated `key`/`value` lines.
pub fn write_summary_tsv<W: Write>(summary: &RunSummary, mut writer: W) -> Result<()> {
    for (key, value) in summary.entries() {
        writeln!(writer, "{}\t{}", key, value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a summary TSV to `path`, creating or truncating it.
pub fn write_summary_file(summary: &RunSummary, path: impl AsRef<Path>) -> Result<()> {
    let writer = create(path.as_ref())?;
    write_summary_tsv(summary, writer)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        MsetError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    Ok(BufWriter::new(file))
}
