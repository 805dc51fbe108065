//! Storage location management.
//!
//! This module owns the filesystem layout nippo uses: a `data/` root relative
//! to the working directory, holding one subdirectory of report records and
//! the log file. The root can be redirected through configuration; everything
//! else derives from it so the layout stays in one place.

use std::path::{Path, PathBuf};

/// Default data root, relative to the working directory.
const DEFAULT_DATA_DIR: &str = "data";

/// Subdirectory of the data root holding one record file per day.
const REPORTS_SUBDIR: &str = "reports";

/// Log file name inside the data root.
const LOG_FILE: &str = "nippo.log";

/// Resolves the data root, applying an optional configured override.
#[must_use]
pub fn data_dir(configured: Option<&str>) -> PathBuf {
    configured.map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from)
}

/// Directory holding the per-day report records.
#[must_use]
pub fn reports_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(REPORTS_SUBDIR)
}

/// Path of the rotating log file.
#[must_use]
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_nests_under_data() {
        let root = data_dir(None);
        assert_eq!(reports_dir(&root), PathBuf::from("data/reports"));
        assert_eq!(log_path(&root), PathBuf::from("data/nippo.log"));
    }

    #[test]
    fn configured_root_overrides_the_default() {
        let root = data_dir(Some("/tmp/journal"));
        assert_eq!(reports_dir(&root), PathBuf::from("/tmp/journal/reports"));
    }
}
