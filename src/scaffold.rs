use crate::{
    errors::{FileOperation, IoError},
    structure::StructureSpec,
    vfs::{EntryKind, VirtualEntry, VirtualFS, WritePolicy},
};
use colored::Colorize;
use miette::Diagnostic;
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(botscaffold::scaffold::io))]
    Io(#[from] IoError),
}

/// What happened to a single path during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Overwritten,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    pub path: PathBuf,
    pub kind: EntryKind,
    pub outcome: Outcome,
}

/// Record of every entry applied by [`create_structure`], in application order.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    /// Directory the structure was created under.
    pub base: PathBuf,
    pub applied: Vec<Applied>,
}
impl ScaffoldReport {
    pub fn outcome_of(&self, path: &Path) -> Option<Outcome> {
        self.applied
            .iter()
            .find(|a| a.path == path)
            .map(|a| a.outcome)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.applied.iter().filter(|a| a.outcome == outcome).count()
    }
}

/// Creates every folder and file described by `spec` under `base_path`.
///
/// Directories are created with their missing ancestors and never fail for already
/// existing. Listed files are truncated and rewritten on every run; the entry point of
/// each top-level folder is written only when nothing exists at its path yet.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] on the first directory or file operation that fails. Entries
/// applied before the failure stay on disk.
pub fn create_structure(
    base_path: &Path,
    spec: &StructureSpec,
) -> Result<ScaffoldReport, ScaffoldError> {
    let vfs = VirtualFS::plan(spec);

    log::debug!(
        "applying {} entries under {}",
        vfs.entries.len(),
        base_path.display()
    );

    apply_vfs(&vfs, base_path)
}
/// Applies directory and file creation operations from a [`VirtualFS`], in order.
fn apply_vfs(vfs: &VirtualFS, destination_root: &Path) -> Result<ScaffoldReport, ScaffoldError> {
    let mut report = ScaffoldReport {
        base: destination_root.to_path_buf(),
        applied: Vec::new(),
    };

    for entry in &vfs.entries {
        let final_path = destination_root.join(&entry.destination);

        let outcome = match entry.kind {
            EntryKind::Directory => {
                create_directory(&final_path)?;
                Outcome::Created
            }
            EntryKind::File => apply_file(entry, &final_path)?,
        };

        report.applied.push(Applied {
            path: final_path,
            kind: entry.kind,
            outcome,
        });
    }

    Ok(report)
}
fn apply_file(entry: &VirtualEntry, path: &Path) -> Result<Outcome, ScaffoldError> {
    let contents = entry.content.as_deref().unwrap_or_default();

    match entry.policy {
        WritePolicy::Overwrite => write_file(path, contents),
        WritePolicy::CreateNew => write_new_file(path, contents),
    }
}
/// Creates all directories in the specified path if they do not exist.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if any directory creation fails due to I/O issues.
fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))?;

    log::debug!("directory ready: {}", path.display());

    Ok(())
}
/// Writes a file with the provided contents to the specified path, truncating anything
/// already there, and prints a status line to the console.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if writing to the file fails due to I/O issues.
fn write_file(path: &Path, contents: &str) -> Result<Outcome, ScaffoldError> {
    let existed = path.exists();

    fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    let (outcome, msg) = if existed {
        (
            Outcome::Overwritten,
            format!("{} {}", "overwrite".yellow(), path.display()),
        )
    } else {
        (
            Outcome::Created,
            format!("{} {}", "create".green(), path.display()),
        )
    };

    println!("{}", &msg);

    Ok(outcome)
}
/// Writes a file only if nothing exists at `path` yet; an existing entry is left untouched.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the file cannot be created or written, other than because
/// it already exists.
fn write_new_file(path: &Path, contents: &str) -> Result<Outcome, ScaffoldError> {
    let file = OpenOptions::new().write(true).create_new(true).open(path);

    let mut file = match file {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::AlreadyExists => {
            log::debug!("keeping existing {}", path.display());

            println!("{} {}", "skip".blue(), path.display());

            return Ok(Outcome::Skipped);
        }
        Err(error) => Err(IoError::new(FileOperation::Write, path.into(), error))?,
    };

    file.write_all(contents.as_bytes())
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    println!("{} {}", "create".green(), path.display());

    Ok(Outcome::Created)
}
