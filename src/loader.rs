//! Template source resolution for Sprout.
//! A template is either a local directory or a git repository that is cloned
//! into a temporary directory for the duration of the run.
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

/// Represents the source location of a template.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem template path
    FileSystem(PathBuf),
    /// Git repository URL (HTTPS or SSH)
    Git(String),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Git(repo) => write!(f, "git repository: '{repo}'"),
        }
    }
}

impl TemplateSource {
    /// Creates a TemplateSource from a string path or URL.
    pub fn from_string(s: &str) -> Self {
        if let Ok(url) = Url::parse(s) {
            if matches!(url.scheme(), "https" | "http" | "git" | "ssh") {
                return Self::Git(s.to_string());
            }
        }

        // SSH shorthand, e.g. git@github.com:user/repo.git
        if s.starts_with("git@") {
            return Self::Git(s.to_string());
        }

        Self::FileSystem(PathBuf::from(s))
    }
}

/// A template directory ready to be parsed.
///
/// For git sources the checkout lives in a temporary directory that is
/// removed when this value is dropped.
#[derive(Debug)]
pub struct LoadedTemplate {
    path: PathBuf,
    _checkout: Option<TempDir>,
}

impl LoadedTemplate {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    fn load(&self) -> Result<LoadedTemplate>;
}

/// Loader for templates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExistsError` if the path doesn't exist
    fn load(&self) -> Result<LoadedTemplate> {
        let path = self.path.as_ref();
        if !path.exists() {
            return Err(Error::TemplateDoesNotExistsError {
                template_dir: path.display().to_string(),
            });
        }

        Ok(LoadedTemplate { path: path.to_path_buf(), _checkout: None })
    }
}

/// Loader for templates from git repositories.
pub struct GitLoader<S: AsRef<str>> {
    repo: S,
}

impl<S: AsRef<str>> GitLoader<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }
}

impl<S: AsRef<str>> TemplateLoader for GitLoader<S> {
    /// Clones the repository into a temporary directory.
    ///
    /// # Errors
    /// * `Error::Git2Error` if the clone fails
    fn load(&self) -> Result<LoadedTemplate> {
        let repo_url = self.repo.as_ref();
        let checkout = TempDir::new()?;

        debug!("Cloning repository '{}' to '{}'.", repo_url, checkout.path().display());

        // SSH remotes authenticate with the agent or the default key
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, _allowed_types| {
            let username = username_from_url.unwrap_or("git");
            git2::Cred::ssh_key_from_agent(username).or_else(|_| {
                let home = std::env::var("HOME").unwrap_or_default();
                git2::Cred::ssh_key(
                    username,
                    None,
                    &Path::new(&home).join(".ssh").join("id_rsa"),
                    None,
                )
            })
        });

        let mut fetch_opts = git2::FetchOptions::new();
        fetch_opts.remote_callbacks(callbacks);

        let mut builder = git2::build::RepoBuilder::new();
        builder.fetch_options(fetch_opts);
        builder.clone(repo_url, checkout.path())?;

        Ok(LoadedTemplate { path: checkout.path().to_path_buf(), _checkout: Some(checkout) })
    }
}

/// Returns the template directory for the provided template argument.
pub fn load_template<S: AsRef<str>>(template: S) -> Result<LoadedTemplate> {
    let template_source = TemplateSource::from_string(template.as_ref());
    log::info!("Using template from the {template_source}");

    let loader: Box<dyn TemplateLoader> = match template_source {
        TemplateSource::Git(repo) => Box::new(GitLoader::new(repo)),
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
    };

    loader.load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_source_display() {
        let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/template"));
        assert_eq!(format!("{}", fs_source), "local path: '/path/to/template'");

        let git_source = TemplateSource::Git("git@github.com:user/repo".to_string());
        assert_eq!(format!("{}", git_source), "git repository: 'git@github.com:user/repo'");
    }
}
