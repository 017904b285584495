use std::process::ExitCode;

use log::trace;
use wordstat::{
    Config,
    config::{ConfigError, USAGE},
};

fn main() -> ExitCode {
    env_logger::builder().init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("error: {e}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    trace!(target: "main", "config: {:#?}", config);

    let reports = match wordstat::run(&config) {
        Ok(reports) => reports,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    for report in reports {
        if let Some(dump) = &report.dump {
            println!("{}", report.strategy);
            print!("{dump}");
        }
        println!("{report}");
    }
    ExitCode::SUCCESS
}
