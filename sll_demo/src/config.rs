use std::error::Error;
use std::fs;
use std::path::PathBuf;

pub use clap::Parser;
use serde::{Deserialize, Serialize};
use sll::List;

const BUILTIN_SCENARIO: &str = include_str!("../scenario.toml");

#[derive(Parser, Serialize, Deserialize, Clone, Debug)]
pub struct DemoArgs {
    /// Scenario file to replay instead of the built-in one.
    #[clap(long, env = "SLL_DEMO_CONFIG")]
    pub config: Option<PathBuf>,
    /// Draw every printed list as a chain of arrows as well.
    #[clap(long)]
    pub diagram: bool,

    #[clap(long, default_value_t = 80)]
    pub width: usize,
    /// Print the two final lists as JSON.
    #[clap(long)]
    pub json: bool,

    #[clap(long)]
    pub log: bool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Scenario {
    pub primary: List,
    pub secondary: List,
    pub slice_index: isize,
}

#[derive(Debug)]
pub struct Config {
    pub scenario: Scenario,

    pub diagram: Option<usize>,

    pub json: bool,
}

impl DemoArgs {
    pub fn into_config(self) -> Result<Config, Box<dyn Error>> {
        let source = match &self.config {
            Some(path) => {
                log::debug!("Reading scenario from {:?}", path);
                fs::read_to_string(path)?
            }
            None => BUILTIN_SCENARIO.to_owned(),
        };
        Ok(Config {
            scenario: toml::from_str(&source)?,
            diagram: self.diagram.then_some(self.width),
            json: self.json,
        })
    }
}
