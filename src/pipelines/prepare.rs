//! Blog corpus preparation pipeline
//!
//! Turns a directory of author files (`<id>.<gender>.<age>.<industry>.<sign>.xml`)
//! into a text dataset laid out as `<dst>/<partition>/<label>/<id>/<n>.txt`.
//!
//! # Processing
//! For each author file, in walk order:
//! 1. A partition is drawn (exactly one draw per visited file).
//! 1. Author metadata is decoded from the filename, and the age bucket derived from it.
//! 1. The file content is sanitized, and written back in place unless told otherwise.
//! 1. Posts are extracted. The whole document has to be valid before anything is written.
//! 1. Posts are written, numbered from 1.
//!
//! Any error aborts the run, unless `skip_errors` is set, in which case
//! files with a malformed name or unparsable content are logged and skipped.
//! IO errors always abort. Nothing is cleaned up on abort.
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use rand::Rng;

use crate::author::{AuthorMetadata, AuthorRecord};
use crate::error::Error;
use crate::io::reader::{read_lossy, Posts};
use crate::io::{PostWriter, WriterTrait};
use crate::pipelines::pipeline::Pipeline;
use crate::processing::split::{Partition, PartitionAssigner, Splits};
use crate::sources::{Progress, Walker};
use crate::transformers::{Sanitizer, Transform};

/// Names of the tags that survive sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralTags {
    pub root: String,
    pub post: String,
    pub date: String,
}

impl Default for StructuralTags {
    fn default() -> Self {
        Self {
            root: "Blog".to_string(),
            post: "post".to_string(),
            date: "date".to_string(),
        }
    }
}

impl StructuralTags {
    fn sanitizer(&self) -> Sanitizer {
        Sanitizer::new([&self.root, &self.post, &self.date])
    }
}

#[derive(Debug, Clone)]
pub struct PrepareConfig {
    pub src: PathBuf,
    pub dst: PathBuf,
    pub seed: u64,
    pub splits: Splits,
    pub tags: StructuralTags,
    /// Replace input files with their sanitized content.
    pub rewrite_sources: bool,
    /// Write the posts of an author concurrently.
    pub parallel_writes: bool,
    /// Log and skip malformed files instead of aborting.
    pub skip_errors: bool,
}

impl PrepareConfig {
    /// Configuration with default seed (1337), splits (80/10/10) and tags.
    pub fn new(src: PathBuf, dst: PathBuf) -> Self {
        Self {
            src,
            dst,
            seed: 1337,
            splits: Splits::default(),
            tags: StructuralTags::default(),
            rewrite_sources: true,
            parallel_writes: false,
            skip_errors: false,
        }
    }
}

/// Counts gathered during a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub skipped: usize,
    pub posts: usize,
    pub authors: BTreeMap<Partition, usize>,
}

pub struct PrepareDataset {
    config: PrepareConfig,
    sanitizer: Sanitizer,
}

impl PrepareDataset {
    pub fn new(config: PrepareConfig) -> Self {
        if !config.rewrite_sources {
            debug!("source files will be left untouched");
        }
        let sanitizer = config.tags.sanitizer();
        Self { config, sanitizer }
    }

    /// Process a single author file, returning its record and number of posts.
    ///
    /// The partition has already been drawn by the caller.
    fn process_file(
        &self,
        path: &Path,
        partition: Partition,
    ) -> Result<(AuthorRecord, usize), Error> {
        let metadata = AuthorMetadata::from_path(path)?;
        let author = AuthorRecord::new(metadata, partition);
        debug!(
            "author {} -> {}/{}",
            author.id(),
            author.partition(),
            author.label()
        );

        let content = self.sanitizer.transform_own(read_lossy(path)?);
        if self.config.rewrite_sources {
            std::fs::write(path, content.as_bytes())?;
        }

        // parse everything before writing anything
        let posts: Vec<String> =
            Posts::new(&content, &self.config.tags.post).collect::<Result<_, _>>()?;
        let nb_posts = posts.len();

        let mut writer =
            PostWriter::new(&self.config.dst, &author)?.parallel(self.config.parallel_writes);
        writer.write(posts)?;

        Ok((author, nb_posts))
    }

    fn prepare_dst(&self) -> Result<(), Error> {
        if !self.config.src.is_dir() {
            return Err(Error::Config(format!(
                "source has to be a directory: {:?}",
                self.config.src
            )));
        }

        if !self.config.dst.exists() {
            warn!("Destination does not exist. Creating {:?}", self.config.dst);
            std::fs::create_dir_all(&self.config.dst)?;
        }

        if !self.config.dst.is_dir() {
            return Err(Error::Config(format!(
                "destination has to be a directory: {:?}",
                self.config.dst
            )));
        }
        Ok(())
    }

    /// Run using the provided assigner.
    ///
    /// The assigner is advanced once per visited file, in walk order.
    pub fn run_with<R: Rng>(
        &self,
        assigner: &mut PartitionAssigner<R>,
    ) -> Result<RunSummary, Error> {
        self.prepare_dst()?;

        let mut summary = RunSummary::default();
        let walker = Walker::new(&self.config.src);

        walker.visit(|path, progress: Progress| {
            let partition = assigner.assign();
            summary.files += 1;

            match self.process_file(path, partition) {
                Ok((author, nb_posts)) => {
                    *summary.authors.entry(author.partition()).or_insert(0) += 1;
                    summary.posts += nb_posts;
                }
                Err(e) => {
                    let e = e.in_file(path);
                    if self.config.skip_errors && e.is_recoverable() {
                        error!("skipping file: {}", e);
                        summary.skipped += 1;
                    } else {
                        return Err(e);
                    }
                }
            }

            info!("{} {}", progress, path.display());
            Ok(())
        })?;

        info!(
            "done: {} files ({} skipped), {} posts",
            summary.files, summary.skipped, summary.posts
        );
        Ok(summary)
    }
}

impl Pipeline<RunSummary> for PrepareDataset {
    fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn run(&self) -> Result<RunSummary, Error> {
        info!(
            "preparing {:?} into {:?} (seed {}, version {})",
            self.config.src,
            self.config.dst,
            self.config.seed,
            Self::version()
        );
        let mut assigner = PartitionAssigner::seeded(self.config.seed, self.config.splits);
        self.run_with(&mut assigner)
    }
}
