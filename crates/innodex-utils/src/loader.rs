use crate::loader::error::LoadingError;
use crate::loader::file::File;
use crate::loader::file_system::FileSystemLoader;
use futures::Stream;
use std::path::Path;
use std::pin::Pin;
use url::Url;

pub mod error;
pub mod file;
pub mod file_system;

#[derive(Debug, Clone, Copy, Default)]
pub enum Filter {
    Yaml,
    #[default]
    Any,
}

impl Filter {
    pub fn apply<P: AsRef<Path>>(&self, path: P) -> bool {
        let extension = path.as_ref().extension().and_then(|ext| ext.to_str());
        let Some(extension) = extension else {
            return false;
        };
        let allowed_extensions: &[&str] = match self {
            Filter::Yaml => &["yaml", "yml"],
            Filter::Any => return true,
        };
        allowed_extensions.contains(&extension)
    }
}

/// Resolves a configuration URL to a loader. Plain paths are accepted as well as `file://` URLs.
pub fn loader(location: &str) -> Result<FileSystemLoader, LoadingError> {
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Ok(FileSystemLoader::new(location.into()));
        }
        Err(error) => return Err(error.into()),
    };
    match url.scheme() {
        "file" => {
            let path = url
                .to_file_path()
                .map_err(|()| LoadingError::InvalidURL(url.to_string()))?;
            Ok(FileSystemLoader::new(path))
        }
        scheme => Err(LoadingError::UnsupportedScheme(scheme.to_owned())),
    }
}

pub trait LoaderTrait {
    fn load_dir<'a, P: AsRef<Path>>(
        &'a self,
        path: P,
        filter: Filter,
    ) -> Pin<Box<dyn Stream<Item = Result<File, LoadingError>> + Send + 'a>>;
    fn load_file<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<File, LoadingError>>;
    fn is_dir<P: AsRef<Path>>(&self, path: P) -> impl Future<Output = Result<bool, LoadingError>>;
}
