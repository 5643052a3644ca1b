use s3_walkthrough::utils::log_utils::{Logger, init_tracing};
use s3_walkthrough::{args, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();
    init_tracing(&Logger::new(args.verbose));

    // Step failures are reported by the walkthrough itself and do not change the exit code
    if let Err(e) = run_app(&args) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
