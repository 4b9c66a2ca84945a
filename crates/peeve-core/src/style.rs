//! Contract for the external style-guideline counter.

use std::path::Path;

/// Counts formatting violations across the project on disk.
///
/// The counting algorithm lives outside the engine; rules consume only
/// this numeric contract. Implementations read the project from the
/// filesystem and may block on I/O, which is the one place a rule
/// invocation can.
pub trait StyleCounter: Send + Sync {
    /// Returns the number of style violations under `root`.
    ///
    /// Files matching an `excluded_paths` entry are skipped entirely;
    /// lines longer than `max_line_length` count as violations.
    ///
    /// # Errors
    ///
    /// Returns any I/O error encountered while reading the project. The
    /// engine propagates it unmodified rather than scanning a partial
    /// result.
    fn count_violations(
        &self,
        root: &Path,
        max_line_length: usize,
        excluded_paths: &[String],
    ) -> std::io::Result<usize>;
}
