use std::path::PathBuf;

use crate::structure::StructureSpec;

/// Fixed entry point created in every top-level folder.
pub const ENTRY_POINT_FILE: &str = "app.js";
pub const ENTRY_POINT_CONTENT: &str = "// app.js — main entry point\n";

/// One-line placeholder written into every listed file.
pub fn placeholder_content(file: &str) -> String {
    format!("// {} — created automatically\n", file)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// How a file entry treats something already present at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Truncate and rewrite on every run.
    Overwrite,
    /// Write only if nothing exists at the destination yet.
    CreateNew,
}

/// Represents a virtual file or directory entry staged in memory before writing to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualEntry {
    /// Target path, relative to the base directory of the run.
    pub destination: PathBuf,
    /// Contents to be written if the entry represents a file.
    pub content: Option<String>,
    pub kind: EntryKind,
    pub policy: WritePolicy,
}
impl VirtualEntry {
    fn directory(destination: PathBuf) -> Self {
        Self {
            destination,
            content: None,
            kind: EntryKind::Directory,
            policy: WritePolicy::Overwrite,
        }
    }

    fn file(destination: PathBuf, content: String, policy: WritePolicy) -> Self {
        Self {
            destination,
            content: Some(content),
            kind: EntryKind::File,
            policy,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Ordered collection of [`VirtualEntry`] values queued up before committing them to disk.
///
/// Entries are kept in the order they must be applied: a directory always precedes the
/// files and subdirectories placed inside it.
#[derive(Debug, Clone, Default)]
pub struct VirtualFS {
    pub entries: Vec<VirtualEntry>,
}
impl VirtualFS {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stages every directory and file described by `spec`.
    ///
    /// For each top-level folder this yields the folder itself, then each subfolder followed
    /// by its listed files (rewritten on every run), and finally the folder's entry point,
    /// which is only written when absent.
    pub fn plan(spec: &StructureSpec) -> Self {
        let mut vfs = VirtualFS::new();

        for (folder, content) in spec.folders() {
            let folder_path = PathBuf::from(folder);

            vfs.entries.push(VirtualEntry::directory(folder_path.clone()));

            for (subfolder, files) in &content.0 {
                let subfolder_path = folder_path.join(subfolder);

                vfs.entries
                    .push(VirtualEntry::directory(subfolder_path.clone()));

                for file in files {
                    vfs.entries.push(VirtualEntry::file(
                        subfolder_path.join(file),
                        placeholder_content(file),
                        WritePolicy::Overwrite,
                    ));
                }
            }

            vfs.entries.push(VirtualEntry::file(
                folder_path.join(ENTRY_POINT_FILE),
                ENTRY_POINT_CONTENT.to_string(),
                WritePolicy::CreateNew,
            ));
        }

        vfs
    }

    pub fn files(&self) -> impl Iterator<Item = &VirtualEntry> {
        self.entries.iter().filter(|e| e.is_file())
    }
}
