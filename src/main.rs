use eqfilter::app::{self, args::USAGE, Arguments};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = match Arguments::from_env() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {msg}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = app::run(&args) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
