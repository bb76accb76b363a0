use crate::loader::error::LoadingError;
use crate::loader::file::{File, FileMetadata};
use crate::loader::{Filter, LoaderTrait};
use async_stream::try_stream;
use async_walkdir::{DirEntry, Filtering, WalkDir};
use chrono::{DateTime, Utc};
use futures::{Stream, StreamExt};
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;

#[derive(Clone, Debug)]
pub struct FileSystemLoader {
    base_path: PathBuf,
}

impl FileSystemLoader {
    #[must_use]
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn sub_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return self.base_path.clone();
        }
        self.base_path.join(path)
    }
}

impl LoaderTrait for FileSystemLoader {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>> {
        let path = self.sub_path(path);
        tracing::trace!(?path, "Loading dir");
        let mut walker = WalkDir::new(path).filter(move |entry| apply_filter(entry, filter));
        let stream = try_stream! {
            while let Some(entry) = walker.next().await {
                let entry = entry?;
                if entry.file_type().await?.is_file() {
                    yield read(&entry.path()).await?;
                }
            }
        };
        Box::pin(stream)
    }

    async fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<File, LoadingError> {
        read(&self.sub_path(path)).await
    }

    async fn is_dir<P: AsRef<Path>>(&self, path: P) -> Result<bool, LoadingError> {
        Ok(fs::metadata(self.sub_path(path)).await?.is_dir())
    }
}

async fn read(path: &Path) -> Result<File, LoadingError> {
    tracing::trace!(?path, "Loading file");
    let content = fs::read(path).await?;
    let modified = fs::metadata(path).await?.modified()?;
    let metadata = FileMetadata {
        key: path.to_string_lossy().into(),
        last_modified: Some(DateTime::<Utc>::from(modified)),
    };
    Ok(File::new(metadata, content))
}

async fn apply_filter(entry: DirEntry, filter: Filter) -> Filtering {
    let Ok(ft) = entry.file_type().await else {
        tracing::warn!(path = ?entry.path(), "could not get file type, skipping");
        return Filtering::Ignore;
    };
    if ft.is_dir() {
        return Filtering::Continue;
    }

    if filter.apply(entry.path()) {
        Filtering::Continue
    } else {
        Filtering::Ignore
    }
}
