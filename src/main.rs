//! csvdupe - CSV Row Duplicate Counter
//!
//! Entry point for the csvdupe CLI application.

use clap::Parser;
use csvdupe::{
    cli::Cli,
    dedup::CounterError,
    error::{ExitCode, StructuredError},
    picker::PickerError,
};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();
    let json_errors = cli.json_errors;

    // Run the application logic
    match csvdupe::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            // No folder and no input files are expected terminal outcomes
            // with their own exit code; everything else is a general error.
            let exit_code = if err.downcast_ref::<PickerError>().is_some()
                || err
                    .downcast_ref::<CounterError>()
                    .is_some_and(|e| matches!(e, CounterError::NoInputFound(_)))
            {
                ExitCode::NoInput
            } else {
                ExitCode::GeneralError
            };

            // Report the error
            if json_errors {
                let structured = StructuredError::new(&err, exit_code);
                if let Ok(json) = serde_json::to_string_pretty(&structured) {
                    eprintln!("{}", json);
                } else {
                    eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
                }
            } else {
                eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
