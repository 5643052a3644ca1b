//! Sequential storage walkthrough.
//!
//! Six steps run in a fixed order against one [`ObjectStore`]. Each step has
//! its own error boundary: a failure is reported and the next step still runs.

mod download;
mod steps;

use crate::errors::WalkthroughError;
use crate::interfaces::{ObjectStore, StepReporter};
use std::fmt;
use std::path::PathBuf;
use tracing::info;

pub use download::local_path_for;
pub use steps::generate_object_key;

pub const DEFAULT_BUCKET: &str = "nome-do-bucket";
pub const DEFAULT_UPLOAD_FILE: &str = "file.txt";
pub const DEFAULT_DELETE_KEY: &str = "identificador-do-arquivo";

/// Fixed inputs for one run
#[derive(Debug, Clone)]
pub struct WalkthroughSettings {
    pub bucket: String,
    /// Directory the upload file is read from and downloads are written to
    pub work_dir: PathBuf,
    /// Upload source, relative to `work_dir`
    pub upload_file: PathBuf,
    pub delete_key: String,
}

impl Default for WalkthroughSettings {
    fn default() -> Self {
        Self {
            bucket: DEFAULT_BUCKET.to_string(),
            work_dir: PathBuf::from("."),
            upload_file: PathBuf::from(DEFAULT_UPLOAD_FILE),
            delete_key: DEFAULT_DELETE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    CreateBucket,
    ListBuckets,
    ListObjects,
    UploadFile,
    DownloadAll,
    DeleteObject,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::CreateBucket,
        Step::ListBuckets,
        Step::ListObjects,
        Step::UploadFile,
        Step::DownloadAll,
        Step::DeleteObject,
    ];

    /// Prefix of the line reported when the step fails
    #[must_use]
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Step::CreateBucket => "Failed to create bucket",
            Step::ListBuckets => "Failed to list buckets",
            Step::ListObjects => "Failed to list objects in bucket",
            Step::UploadFile => "Failed to upload file",
            Step::DownloadAll => "Failed to download objects",
            Step::DeleteObject => "Failed to delete object",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::CreateBucket => "create-bucket",
            Step::ListBuckets => "list-buckets",
            Step::ListObjects => "list-objects",
            Step::UploadFile => "upload-file",
            Step::DownloadAll => "download-all",
            Step::DeleteObject => "delete-object",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Completed,
    Failed(String),
}

/// What happened during a run, in step order
#[derive(Debug, Default)]
pub struct WalkthroughReport {
    pub steps: Vec<(Step, StepOutcome)>,
    pub uploaded_key: Option<String>,
    /// Keys written locally by the download step, in order
    pub downloaded: Vec<String>,
}

impl WalkthroughReport {
    #[must_use]
    pub fn outcome(&self, step: Step) -> Option<&StepOutcome> {
        self.steps.iter().find(|(s, _)| *s == step).map(|(_, o)| o)
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.steps
            .iter()
            .filter(|(_, o)| matches!(o, StepOutcome::Failed(_)))
            .map(|(s, _)| *s)
    }
}

pub struct Walkthrough<'a> {
    store: &'a dyn ObjectStore,
    reporter: &'a dyn StepReporter,
    settings: WalkthroughSettings,
}

impl<'a> Walkthrough<'a> {
    pub fn new(
        store: &'a dyn ObjectStore,
        reporter: &'a dyn StepReporter,
        settings: WalkthroughSettings,
    ) -> Self {
        Self {
            store,
            reporter,
            settings,
        }
    }

    /// Run all six steps in order. Never fails; per-step failures are reported.
    pub fn run(&self) -> WalkthroughReport {
        let mut report = WalkthroughReport::default();

        self.run_step(&mut report, Step::CreateBucket, |w| w.create_bucket());
        self.run_step(&mut report, Step::ListBuckets, |w| w.list_buckets());
        self.run_step(&mut report, Step::ListObjects, |w| w.list_objects());
        let uploaded_key = self.run_step(&mut report, Step::UploadFile, |w| w.upload_file());
        report.uploaded_key = uploaded_key;

        let mut downloaded = Vec::new();
        self.run_step(&mut report, Step::DownloadAll, |w| {
            w.download_all(&mut downloaded)
        });
        report.downloaded = downloaded;

        self.run_step(&mut report, Step::DeleteObject, |w| w.delete_object());

        info!(
            failed = report.failed_steps().count(),
            "Walkthrough finished for bucket '{}'", self.settings.bucket
        );
        report
    }

    // Error boundary: nothing returned by `body` escapes past this point.
    fn run_step<T>(
        &self,
        report: &mut WalkthroughReport,
        step: Step,
        body: impl FnOnce(&Self) -> Result<T, WalkthroughError>,
    ) -> Option<T> {
        self.reporter.progress(&format!("Starting step {step}"));
        match body(self) {
            Ok(value) => {
                report.steps.push((step, StepOutcome::Completed));
                Some(value)
            }
            Err(e) => {
                let message = format!("{}: {e}", step.failure_prefix());
                self.reporter.failure(&message);
                report.steps.push((step, StepOutcome::Failed(e.to_string())));
                None
            }
        }
    }
}
