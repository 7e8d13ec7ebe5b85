//! Shared fixtures for the walker test suites.
//!
//! [`FixtureTree`] builds the canonical three-level tree used across the
//! workspace:
//!
//! ```text
//! tree
//! |-- 1  2  A  B  c  d
//! `-- first
//!     |-- 1  2  A  B  c  d
//!     `-- second
//!         `-- 1  2  A  B  c  d
//! ```
//!
//! 18 files and 2 directories, 20 entries below the root.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use walkdir::{DirEntry, WalkDir};

/// File names created in every level of the fixture tree, in creation order.
pub const LEVEL_FILES: [&str; 6] = ["d", "1", "A", "2", "B", "c"];

/// Number of entries below the fixture root.
pub const FIXTURE_ENTRY_COUNT: usize = 20;

/// Temporary three-level tree, removed when dropped.
#[derive(Debug)]
pub struct FixtureTree {
    _temp: TempDir,
    root: PathBuf,
}

impl FixtureTree {
    /// Creates the tree inside a fresh temporary directory.
    pub fn new() -> io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("tree");

        let mut level = root.clone();
        populate_level(&level)?;
        for child in ["first", "second"] {
            level.push(child);
            populate_level(&level)?;
        }

        Ok(Self { _temp: temp, root })
    }

    /// Root of the tree.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The first-level subdirectory.
    #[must_use]
    pub fn first(&self) -> PathBuf {
        self.root.join("first")
    }

    /// The second-level subdirectory.
    #[must_use]
    pub fn second(&self) -> PathBuf {
        self.root.join("first").join("second")
    }
}

/// Creates `dir` (and parents) and the six [`LEVEL_FILES`] inside it.
pub fn populate_level(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for name in LEVEL_FILES {
        fs::File::create(dir.join(name))?;
    }
    Ok(())
}

/// Collects every path below `root` with [`walkdir`], never following
/// symbolic links.
pub fn reference_walk(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
    collect(WalkDir::new(root).min_depth(1))
}

/// Collects the direct children of `root`.
pub fn reference_listing(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
    collect(WalkDir::new(root).min_depth(1).max_depth(1))
}

fn collect(walk: WalkDir) -> io::Result<BTreeSet<PathBuf>> {
    walk.into_iter()
        .map(|entry| entry.map(DirEntry::into_path).map_err(io::Error::from))
        .collect()
}

/// Reports whether the tests run with superuser privileges, which bypass
/// permission bits.
#[cfg(unix)]
pub fn running_as_root() -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let probe = tempfile::NamedTempFile::new()?;
    Ok(probe.as_file().metadata()?.uid() == 0)
}

/// Removes every permission from a directory until dropped.
#[cfg(unix)]
#[derive(Debug)]
pub struct DeniedDirectory {
    path: PathBuf,
    original: fs::Permissions,
}

#[cfg(unix)]
impl DeniedDirectory {
    /// Sets the mode of `path` to `000`.
    pub fn new(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let original = fs::metadata(path)?.permissions();
        fs::set_permissions(path, fs::Permissions::from_mode(0o000))?;
        Ok(Self {
            path: path.to_path_buf(),
            original,
        })
    }
}

#[cfg(unix)]
impl Drop for DeniedDirectory {
    fn drop(&mut self) {
        let _ = fs::set_permissions(&self.path, self.original.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_tree_has_twenty_entries() {
        let tree = FixtureTree::new().expect("fixture");
        let paths = reference_walk(tree.root()).expect("walk");
        assert_eq!(paths.len(), FIXTURE_ENTRY_COUNT);
        assert!(paths.contains(&tree.second().join("c")));
        assert_eq!(reference_listing(tree.root()).expect("list").len(), 7);
    }
}
