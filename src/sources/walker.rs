//! Corpus traversal.
//!
//! Directories are visited in pre-order, in the order the filesystem lists them.
//! Inside a directory, every regular file is visited (in listing order)
//! before descending into subdirectories.
//!
//! Nothing is sorted: given an unchanged filesystem, visitation order is stable
//! across runs, and partition assignment depends on it.
use std::fmt;
use std::path::{Path, PathBuf};

use log::info;
use walkdir::WalkDir;

use crate::error::Error;

/// Position of a file inside its directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// Truncated percentage.
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            return 100;
        }
        self.position * 100 / self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.position, self.total, self.percent())
    }
}

pub struct Walker {
    root: PathBuf,
}

impl Walker {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Directories under (and including) the root, in pre-order.
    pub fn directories(&self) -> impl Iterator<Item = Result<PathBuf, Error>> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(e) if e.file_type().is_dir() => Some(Ok(e.into_path())),
                Ok(_) => None,
                Err(e) => Some(Err(Error::from(e))),
            })
    }

    /// Regular files directly inside `dir`, in listing order.
    pub fn files_in(dir: &Path) -> Result<Vec<PathBuf>, Error> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    /// Call `f` on every file of the corpus, stopping at the first error.
    pub fn visit<F>(&self, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&Path, Progress) -> Result<(), Error>,
    {
        for dir in self.directories() {
            let dir = dir?;
            let files = Self::files_in(&dir)?;
            let total = files.len();
            info!("{} found in {:?}", total, dir);

            for (idx, file) in files.iter().enumerate() {
                f(
                    file,
                    Progress {
                        position: idx + 1,
                        total,
                    },
                )?;
            }
        }
        Ok(())
    }
}
