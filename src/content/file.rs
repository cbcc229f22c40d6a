//! File-backed content source for local and CI builds

use async_trait::async_trait;
use std::path::PathBuf;

use crate::content::{ContentError, ContentSource, SitePayload};
use crate::model::Company;

pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch(&self, _company: &Company) -> Result<SitePayload, ContentError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_yaml::from_str(&raw).map_err(|source| ContentError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
