//! The parent → children map of a scanned source tree.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::filter::FilterConfig;
use crate::error::JavalocError;
use crate::Result;

/// Maps each directory to its immediate children, in discovery order.
///
/// Only directories that have at least one recorded child get a key; a file
/// or an empty directory has none. Every path below the root appears as a
/// child exactly once. Directories are remembered separately so that an
/// empty directory is still told apart from a file.
#[derive(Debug, Clone)]
pub struct DirectoryHierarchy {
    root: PathBuf,
    children: HashMap<PathBuf, Vec<PathBuf>>,
    directories: HashSet<PathBuf>,
}

impl DirectoryHierarchy {
    /// An empty hierarchy rooted at the directory `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let mut directories = HashSet::new();
        directories.insert(root.clone());
        Self {
            root,
            children: HashMap::new(),
            directories,
        }
    }

    /// The hierarchy of a single file: one mapping from the file to itself.
    pub fn for_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut children = HashMap::new();
        children.insert(path.clone(), vec![path.clone()]);
        Self {
            root: path,
            children,
            directories: HashSet::new(),
        }
    }

    /// Record `dir` as a sub-directory of `parent`.
    pub fn add_directory(&mut self, parent: &Path, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        self.directories.insert(dir.clone());
        self.add_child(parent, dir);
    }

    /// Record `file` as a file inside `parent`.
    pub fn add_file(&mut self, parent: &Path, file: impl Into<PathBuf>) {
        self.add_child(parent, file.into());
    }

    fn add_child(&mut self, parent: &Path, child: PathBuf) {
        self.children
            .entry(parent.to_path_buf())
            .or_default()
            .push(child);
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Immediate children of `dir`, empty when none were recorded.
    pub fn children(&self, dir: &Path) -> &[PathBuf] {
        self.children.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_dir(&self, path: &Path) -> bool {
        self.directories.contains(path)
    }

    /// Walk `root` and record every directory and every file passing `filter`.
    ///
    /// Children are recorded in file-name order. Symbolic links are not
    /// followed. A `root` that is a file yields [`DirectoryHierarchy::for_file`]
    /// without consulting the filter.
    pub fn scan(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Self> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(JavalocError::PathNotFound(root.to_path_buf()));
        }

        if !root.is_dir() {
            return Ok(Self::for_file(root));
        }

        let mut hierarchy = Self::new(root);
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .min_depth(1);

        for entry in walker {
            let entry = entry.map_err(|e| JavalocError::Scan {
                path: e.path().unwrap_or(root).to_path_buf(),
                message: e.to_string(),
            })?;

            let path = entry.path();
            let Some(parent) = path.parent() else {
                continue;
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                debug!(path = %path.display(), "found directory");
                hierarchy.add_directory(parent, path);
            } else if file_type.is_file() && filter.matches(path) {
                hierarchy.add_file(parent, path);
            }
        }

        Ok(hierarchy)
    }
}
