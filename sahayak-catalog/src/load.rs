use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use glob::glob;
use sahayak_types::scheme::SchemeRecord;
use thiserror::Error;
use tracing::debug;

/// One scheme file as found on disk, parse outcome included.
#[derive(Debug, Clone)]
pub struct LoadedScheme {
    pub path: Utf8PathBuf,
    pub scheme: Result<SchemeRecord, SchemeLoadError>,
}

#[derive(Debug, Error, Clone)]
pub enum SchemeLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("json parse error: {message}")]
    Json { message: String },
}

/// Load all `*.json` scheme files under `dir`.
///
/// Missing directory yields an empty list. A file that cannot be read or
/// parsed is returned with its error attached rather than failing the whole
/// load; callers decide whether to skip or report.
pub fn load_schemes(dir: &Utf8Path) -> anyhow::Result<Vec<LoadedScheme>> {
    let pattern = dir.join("*.json");
    let pattern_str = pattern.as_str();

    debug!(pattern = %pattern_str, "scanning for scheme files");

    let mut out = Vec::new();
    for entry in glob(pattern_str).context("glob schemes/*.json")? {
        let path = entry
            .map_err(|e| anyhow::anyhow!("glob error: {e}"))?
            .to_string_lossy()
            .to_string();
        let utf8_path = Utf8PathBuf::from(path);

        let scheme = match fs::read_to_string(&utf8_path) {
            Ok(s) => {
                serde_json::from_str::<SchemeRecord>(&s).map_err(|e| SchemeLoadError::Json {
                    message: e.to_string(),
                })
            }
            Err(e) => Err(SchemeLoadError::Io {
                message: e.to_string(),
            }),
        };

        out.push(LoadedScheme {
            path: utf8_path,
            scheme,
        });
    }

    // Deterministic order matters.
    out.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(out)
}
