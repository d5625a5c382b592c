//! Typed views of the JSON documents served below `/files`.

use serde::Deserialize;

/// Sent for `/files` (the sets) and `/files/NNNNSET` (the dirs of a set).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DirectoryListing {
    pub directories: Vec<String>,
}

/// Sent for `/files/NNNNSET/NNN`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileListing {
    pub files: Vec<FileEntry>,
}

/// A single file of a directory. The camera sends more fields than the name, those are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    pub name: String,
}

impl FileListing {
    pub fn names(self) -> Vec<String> {
        self.files.into_iter().map(|f| f.name).collect()
    }
}
