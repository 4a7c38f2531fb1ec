/*! Per-post text file writer.

Each post of an author is written verbatim at
`<dst>/<partition>/<label>/<author id>/<post index>.txt`, with post indices starting at 1
and following document order.

Missing directories are created, existing ones are left as is, existing post files are overwritten.
!*/
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::author::{AgeBucket, AuthorRecord};
use crate::error::Error;
use crate::processing::split::Partition;

use super::WriterTrait;

/// A numbered post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub index: usize,
    pub text: String,
}

/// Directory holding the posts of an author.
pub fn author_dir(dst: &Path, partition: Partition, label: AgeBucket, id: u64) -> PathBuf {
    let mut path = PathBuf::from(dst);
    path.push(partition.as_str());
    path.push(label.as_str());
    path.push(id.to_string());
    path
}

/// Location of the post numbered `index` in an author directory.
pub fn post_path(dir: &Path, index: usize) -> PathBuf {
    let mut path = PathBuf::from(dir);
    path.push(format!("{}.txt", index));
    path
}

/// Writes the posts of a single author, numbering them as they come.
pub struct PostWriter {
    dir: PathBuf,
    next_index: usize,
    parallel: bool,
}

impl PostWriter {
    /// Write batches with one rayon task per post.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Directory posts are written into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of posts written (or numbered) so far.
    pub fn nb_written(&self) -> usize {
        self.next_index - 1
    }

    fn number(&mut self, text: String) -> Post {
        let post = Post {
            index: self.next_index,
            text,
        };
        self.next_index += 1;
        post
    }

    fn write_post(dir: &Path, post: &Post) -> Result<(), Error> {
        std::fs::write(post_path(dir, post.index), post.text.as_bytes())?;
        Ok(())
    }
}

impl WriterTrait for PostWriter {
    type Item = String;

    /// Create the author directory (and missing parents).
    fn new(dst: &Path, author: &AuthorRecord) -> Result<Self, Error> {
        let dir = author_dir(dst, author.partition(), author.label(), author.id());
        std::fs::create_dir_all(&dir)?;
        debug!("writing posts of {} in {:?}", author.id(), dir);
        Ok(Self {
            dir,
            next_index: 1,
            parallel: false,
        })
    }

    /// Number then write all `texts`.
    ///
    /// Numbering is always sequential, only the file writes may be parallel.
    fn write(&mut self, texts: Vec<String>) -> Result<(), Error> {
        let posts: Vec<Post> = texts.into_iter().map(|text| self.number(text)).collect();

        if self.parallel {
            let dir = &self.dir;
            posts
                .par_iter()
                .try_for_each(|post| Self::write_post(dir, post))
        } else {
            posts
                .iter()
                .try_for_each(|post| Self::write_post(&self.dir, post))
        }
    }
}
