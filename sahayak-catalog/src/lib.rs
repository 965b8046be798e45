//! Scheme catalog: the built-in scheme list plus optional user-supplied
//! scheme files.
//!
//! The catalog is loaded once at startup and passed into the evaluator by
//! reference; nothing here is ambient global state. File loading is
//! intentionally tolerant: a scheme file that fails to parse is reported and
//! skipped, it never aborts the run.

mod builtin;
mod load;

pub use builtin::builtin_schemes;
pub use load::{LoadedScheme, SchemeLoadError, load_schemes};

use camino::Utf8Path;
use sahayak_types::scheme::SchemeRecord;
use tracing::warn;

/// An ordered, immutable scheme catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    schemes: Vec<SchemeRecord>,
}

impl Catalog {
    /// The built-in catalog only.
    pub fn builtin() -> Self {
        Self {
            schemes: builtin_schemes(),
        }
    }

    /// Built-in catalog, extended with scheme files from `dir` when given.
    /// Loaded schemes are appended after the built-ins in file order; files
    /// that fail to parse are logged and skipped.
    pub fn resolve(schemes_dir: Option<&Utf8Path>) -> anyhow::Result<Self> {
        let mut schemes = builtin_schemes();
        if let Some(dir) = schemes_dir {
            for loaded in load_schemes(dir)? {
                match loaded.scheme {
                    Ok(s) => schemes.push(s),
                    Err(e) => warn!(path = %loaded.path, error = %e, "skipping scheme file"),
                }
            }
        }
        Ok(Self { schemes })
    }

    pub fn from_schemes(schemes: Vec<SchemeRecord>) -> Self {
        Self { schemes }
    }

    pub fn schemes(&self) -> &[SchemeRecord] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Look up one scheme by its stable id.
    pub fn get(&self, id: &str) -> Option<&SchemeRecord> {
        self.schemes.iter().find(|s| s.id == id)
    }
}
