//! Context handed to rule constructors.

use crate::config::Config;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared construction context for rules.
///
/// Built once per lint run and passed by reference to every rule
/// constructor. Rules resolve their auxiliary files against
/// [`Context::work_directory`].
#[derive(Debug, Clone)]
pub struct Context {
    /// Configuration of the run.
    pub config: Arc<Config>,
    /// Project directory the run operates on.
    pub work_directory: PathBuf,
}

impl Context {
    /// Creates a new context.
    #[must_use]
    pub fn new(config: impl Into<Arc<Config>>, work_directory: impl Into<PathBuf>) -> Self {
        Self {
            config: config.into(),
            work_directory: work_directory.into(),
        }
    }

    /// Resolves a configured path against the work directory.
    #[must_use]
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.work_directory.join(relative)
    }
}
