mod application;
mod presentation;

use std::process::ExitCode;

fn main() -> ExitCode {
    application::run()
}
