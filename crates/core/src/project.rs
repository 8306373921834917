use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no .sol files found in: {0}")]
    NoSources(PathBuf),
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Discover all .sol files under a path, sorted for deterministic runs.
///
/// A file path is returned as-is; a directory is walked recursively,
/// skipping dependency and build output trees.
pub fn discover_sol_files(path: &Path) -> Result<Vec<PathBuf>, ProjectError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "sol"))
        .filter(|e| {
            let p = e.path().to_string_lossy();
            !p.contains("/node_modules/") && !p.contains("/artifacts/") && !p.contains("/out/")
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(ProjectError::NoSources(path.to_path_buf()));
    }

    Ok(files)
}

/// Read every discovered file into a path → source map.
pub fn load_sources(files: &[PathBuf]) -> Result<BTreeMap<PathBuf, String>, ProjectError> {
    let mut sources = BTreeMap::new();
    for file in files {
        let text = std::fs::read_to_string(file).map_err(|e| ProjectError::Read {
            path: file.clone(),
            source: e,
        })?;
        sources.insert(file.clone(), text);
    }
    Ok(sources)
}
