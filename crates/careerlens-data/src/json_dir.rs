//! JSON data-directory loader.
//!
//! Layout:
//! ```text
//! <data_dir>/
//! ├── employment.json        OutcomeRecord array
//! ├── salary.json            SalaryRecord array
//! ├── support_services.json  SupportRecord array, or {"institutions": [...]}
//! └── reports/               *.txt and *.md, one document each (optional)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use careerlens_core::constants::SOURCE_METADATA_KEY;
use careerlens_core::errors::{CareerResult, DataError};
use careerlens_core::models::{Corpus, Document, SupportRecord, Tables};
use careerlens_core::traits::IDatasetLoader;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::briefs::builtin_briefs;
use crate::TYPE_METADATA_KEY;

pub const EMPLOYMENT_FILE: &str = "employment.json";
pub const SALARY_FILE: &str = "salary.json";
pub const SUPPORT_FILE: &str = "support_services.json";
pub const REPORTS_DIR: &str = "reports";

const REPORT_EXTENSIONS: &[&str] = &["txt", "md"];

#[derive(Deserialize)]
#[serde(untagged)]
enum SupportFile {
    Wrapped { institutions: Vec<SupportRecord> },
    Bare(Vec<SupportRecord>),
}

/// Loads tables and reports from a directory on every call.
#[derive(Debug, Clone)]
pub struct JsonDatasetLoader {
    data_dir: PathBuf,
    include_briefs: bool,
}

impl JsonDatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            include_briefs: true,
        }
    }

    /// Leave the built-in briefs out of the corpus.
    pub fn without_briefs(mut self) -> Self {
        self.include_briefs = false;
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn check_dir(&self) -> CareerResult<()> {
        if !self.data_dir.is_dir() {
            return Err(DataError::MissingDirectory {
                path: self.data_dir.display().to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> CareerResult<T> {
        let path = self.data_dir.join(file);
        let content = fs::read_to_string(&path).map_err(|e| DataError::LoadFailed {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let value = serde_json::from_str(&content).map_err(|e| DataError::ParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %path.display(), "table loaded");
        Ok(value)
    }

    fn load_reports(&self) -> CareerResult<Corpus> {
        let dir = self.data_dir.join(REPORTS_DIR);
        if !dir.is_dir() {
            debug!(path = %dir.display(), "no reports directory");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|e| DataError::LoadFailed {
            source_name: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_report(p))
            .collect();
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable report");
                    continue;
                }
            };
            let id = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            documents.push(
                Document::new(id, text)
                    .with_metadata(SOURCE_METADATA_KEY, path.display().to_string())
                    .with_metadata(TYPE_METADATA_KEY, "local_report"),
            );
        }
        Ok(documents)
    }
}

fn is_report(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| REPORT_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

impl IDatasetLoader for JsonDatasetLoader {
    fn load_tables(&self) -> CareerResult<Tables> {
        self.check_dir()?;
        let outcomes = self.read_json(EMPLOYMENT_FILE)?;
        let salaries = self.read_json(SALARY_FILE)?;
        let support = match self.read_json::<SupportFile>(SUPPORT_FILE)? {
            SupportFile::Wrapped { institutions } => institutions,
            SupportFile::Bare(rows) => rows,
        };
        Ok(Tables {
            outcomes,
            salaries,
            support,
        })
    }

    fn load_documents(&self) -> CareerResult<Corpus> {
        self.check_dir()?;
        let mut corpus = self.load_reports()?;
        if self.include_briefs {
            corpus.extend(builtin_briefs());
        }
        crate::ensure_unique_ids(&corpus)?;
        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_extensions() {
        assert!(is_report(Path::new("a/b.txt")));
        assert!(is_report(Path::new("a/b.MD")));
        assert!(!is_report(Path::new("a/b.csv")));
        assert!(!is_report(Path::new("a/README")));
    }
}
