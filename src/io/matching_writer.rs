//! # Matching Writer
//!
//! Writes the matching held by a [`ResidualNetwork`] as one labelled pair per line followed
//! by a summary line.

use std::borrow::Cow;

use super::*;

/// A writer for computed matchings
#[derive(Debug, Clone)]
pub struct MatchingWriter {
    /// Placed between the labels of a matched pair
    separator: String,
}

impl Default for MatchingWriter {
    fn default() -> Self {
        Self {
            separator: String::from(" / "),
        }
    }
}

impl MatchingWriter {
    /// Creates a new (default) writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between the labels of a matched pair
    pub fn separator<S: Into<String>>(mut self, separator: S) -> MatchingWriter {
        self.separator = separator.into();
        self
    }

    /// Tries to write the matching of `network` to a given writer
    pub fn try_write_matching<W: Write>(
        &self,
        network: &ResidualNetwork,
        mut writer: W,
    ) -> Result<()> {
        for (left, right) in network.matching().iter() {
            writeln!(
                writer,
                "{}{}{}",
                label_or_index(network, left),
                self.separator,
                label_or_index(network, right)
            )?;
        }
        writeln!(writer, "{} total matches", network.matching().len())?;
        writer.flush()
    }

    /// Tries to write the matching of `network` to a given file
    pub fn try_write_matching_file<P: AsRef<Path>>(
        &self,
        network: &ResidualNetwork,
        path: P,
    ) -> Result<()> {
        self.try_write_matching(network, BufWriter::new(File::create(path)?))
    }
}

/// Trait for writing matchings with default [`MatchingWriter`] settings
pub trait MatchingWrite {
    /// Tries to write the matching to a given writer
    fn try_write_matching<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the matching to a given file
    fn try_write_matching_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.try_write_matching(BufWriter::new(File::create(path)?))
    }
}

impl MatchingWrite for ResidualNetwork {
    fn try_write_matching<W: Write>(&self, writer: W) -> Result<()> {
        MatchingWriter::default().try_write_matching(self, writer)
    }
}

/// Unlabelled items are written by their 1-based index
fn label_or_index(network: &ResidualNetwork, u: Node) -> Cow<'_, str> {
    match network.label(u) {
        Some(label) => Cow::Borrowed(label),
        None => Cow::Owned(u.to_string()),
    }
}
