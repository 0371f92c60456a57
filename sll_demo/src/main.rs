mod config;
mod demo;

use std::error::Error;
use std::io;

use config::{DemoArgs, Parser};

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = DemoArgs::parse();
    init_logger(args.log);
    log::debug!("Arguments: {}", serde_json::to_string(&args)?);

    let config = args.into_config()?;
    demo::run(config, &mut io::stdout().lock())
}
