pub mod args;
pub mod errors;
pub mod interfaces;
pub mod storage;
pub mod utils {
    pub mod log_utils;
    pub mod step_reporter;
}
pub mod walkthrough;

pub use args::Args;
pub use walkthrough::{Walkthrough, WalkthroughReport, WalkthroughSettings};

use errors::StorageError;
use storage::S3StorageClient;
use tracing::info;
use utils::log_utils::Logger;
use utils::step_reporter::ConsoleReporter;

/// Build the client from `args` and run the walkthrough against it.
///
/// # Errors
///
/// Returns an error only when the client cannot be built; step failures are
/// reported on the console and recorded in the returned report.
pub fn run_app(args: &Args) -> Result<WalkthroughReport, StorageError> {
    let logger = Logger::new(args.verbose);
    let client = S3StorageClient::new(&args.client_settings())?;
    info!(region = ?client.region(), bucket = %args.bucket, "Client ready");

    let reporter = ConsoleReporter::new(&logger);
    let walkthrough = Walkthrough::new(&client, &reporter, args.walkthrough_settings());
    Ok(walkthrough.run())
}
