use std::process::ExitCode;
use unity_summary::cli;
use unity_summary::reporting::console;

fn main() -> ExitCode {
    // Parse command line arguments and aggregate the result files
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Both the report and the error path write to stdout; the
            // exit code is the only machine-readable failure signal.
            console::print_error_with_usage(&e);
            ExitCode::FAILURE
        }
    }
}
