use reqgen::cli::{Args, Command};
use reqgen::output::ProgressReporter;
use std::process;

fn main() {
    let args = Args::parse_args();
    let command = Command::from_args(args);

    if let Err(err) = command.execute() {
        ProgressReporter::default().print_error(&err.user_message());
        process::exit(1);
    }
}
