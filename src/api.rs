use crate::{
    errors::{FileOperation, IoError},
    scaffold::{self, ScaffoldReport},
    structure::BOT_STRUCTURE,
};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum BotScaffoldError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Io(#[from] IoError),
}

/// Creates the bot project skeleton under `base`.
///
/// # Errors
///
/// Returns a [`BotScaffoldError`] if any directory or file cannot be created or written to.
pub fn scaffold(base: &Path) -> Result<ScaffoldReport, BotScaffoldError> {
    log::debug!("scaffolding bot structure in: {}", base.display());

    let report = scaffold::create_structure(base, &BOT_STRUCTURE)?;

    Ok(report)
}

/// Creates the bot project skeleton in the process's current working directory.
///
/// # Errors
///
/// Returns a [`BotScaffoldError`] if the current directory cannot be resolved, or for any
/// failure [`scaffold`] reports.
pub fn scaffold_current_dir() -> Result<ScaffoldReport, BotScaffoldError> {
    let base = std::env::current_dir()
        .map_err(|error| IoError::new(FileOperation::CurrentDir, PathBuf::from("."), error))?;

    scaffold(&base)
}
