use std::process::ExitCode;

use bbox::{config::Command, run};

fn main() -> ExitCode {
    env_logger::init();

    match Command::from_env().and_then(run) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(why) => {
            log::error!("bbox failed: {:?}", why);
            eprintln!("error: {}", why);
            eprintln!("run 'bbox --help' for usage");
            ExitCode::FAILURE
        }
    }
}
