//! Puzzle service
//!
//! Loads puzzle input files, walks them, and checks results against known
//! answers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult, DomainResultExt, IoResultExt};
use crate::domain::{walk, Network, WalkOptions};
use crate::infrastructure::traits::FileSystem;

/// An input file with its known answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fixture {
    /// Display name, e.g. "Example 1"
    pub name: String,
    /// Input file; relative paths are resolved against the data directory
    pub file: PathBuf,
    /// Expected step count
    pub expected: u64,
}

impl Fixture {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>, expected: u64) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            expected,
        }
    }

    /// Path of the input file relative to `base_dir` (absolute paths are kept).
    pub fn resolve(&self, base_dir: &Path) -> PathBuf {
        if self.file.is_absolute() {
            self.file.clone()
        } else {
            base_dir.join(&self.file)
        }
    }
}

/// A fixture that matched its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureOutcome {
    pub name: String,
    pub path: PathBuf,
    pub steps: u64,
}

/// Service for solving puzzle input files.
pub struct PuzzleService {
    fs: Arc<dyn FileSystem>,
}

impl PuzzleService {
    /// Create a new puzzle service.
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Read and parse an input file.
    pub fn load(&self, path: &Path) -> ApplicationResult<Network> {
        debug!("load: path={}", path.display());
        // Check file exists first - give clear error message
        if !self.fs.exists(path) {
            return Err(ApplicationError::OperationFailed {
                context: format!("file not found: {}", path.display()),
                source: Box::new(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "file does not exist",
                )),
            });
        }
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read puzzle input", path)?;
        Network::parse(&content).for_input(path)
    }

    /// Number of steps from start to terminal for the given input file.
    #[instrument(level = "debug", skip(self))]
    pub fn solve(&self, path: &Path, options: &WalkOptions) -> ApplicationResult<u64> {
        let network = self.load(path)?;
        let steps = walk(&network, options).for_input(path)?;
        info!("{}: {} steps", path.display(), steps);
        Ok(steps)
    }

    /// Run fixtures in order, stopping at the first failure.
    ///
    /// `report` is called for every fixture that passes, before the next one runs.
    pub fn verify<F>(
        &self,
        fixtures: &[Fixture],
        base_dir: &Path,
        options: &WalkOptions,
        mut report: F,
    ) -> ApplicationResult<Vec<FixtureOutcome>>
    where
        F: FnMut(&FixtureOutcome),
    {
        let mut outcomes = Vec::with_capacity(fixtures.len());

        for fixture in fixtures {
            let path = fixture.resolve(base_dir);
            let steps = self.solve(&path, options)?;
            info!("{} result: {}", fixture.name, steps);

            if steps != fixture.expected {
                return Err(ApplicationError::Mismatch {
                    fixture: fixture.name.clone(),
                    expected: fixture.expected,
                    actual: steps,
                });
            }

            let outcome = FixtureOutcome {
                name: fixture.name.clone(),
                path,
                steps,
            };
            report(&outcome);
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }
}
