//! Whole-file comparison

use std::path::{Path, PathBuf};

use sheetdiff_core::{diff_with_observer, DiffOptions, DiffResult, ProgressObserver};
use sheetdiff_io::{open_snapshot, ExtractError, ExtractOptions};
use thiserror::Error;

/// Options for [`compare_files`]
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub diff: DiffOptions,
    pub extract: ExtractOptions,
}

/// A file could not be loaded; names which one
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to load old workbook '{}'", path.display())]
    Old {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },

    #[error("failed to load new workbook '{}'", path.display())]
    New {
        path: PathBuf,
        #[source]
        source: ExtractError,
    },
}

/// Load both files and diff them
///
/// Both files are fully loaded before any comparison starts; if either fails to load,
/// nothing is compared.
pub fn compare_files(
    old_path: &Path,
    new_path: &Path,
    options: &CompareOptions,
    observer: &mut dyn ProgressObserver,
) -> Result<DiffResult, CompareError> {
    let old = open_snapshot(old_path, &options.extract).map_err(|source| CompareError::Old {
        path: old_path.to_path_buf(),
        source,
    })?;
    let new = open_snapshot(new_path, &options.extract).map_err(|source| CompareError::New {
        path: new_path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "loaded {} sheets ({} cells) and {} sheets ({} cells)",
        old.len(),
        old.cell_count(),
        new.len(),
        new.cell_count()
    );

    Ok(diff_with_observer(&old, &new, &options.diff, observer))
}
