use clap::Parser;
use psm_engine::PricingEngine;
use std::path::PathBuf;
use tracing::{Level, event};

mod io;
pub use io::*;

mod config;
pub use config::AppConfig;

mod scenario;
pub use scenario::*;

mod commands;
pub use commands::*;

// The top-level arguments: where to find engine settings, and which subcommand to execute
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct BaseArgs {
    /// Path to a TOML file of engine settings
    #[arg(short, long, env = "PSM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl BaseArgs {
    pub fn evaluate(self) -> anyhow::Result<()> {
        let AppConfig { engine } = AppConfig::load(self.config.as_deref())?;
        event!(Level::DEBUG, settings = ?engine, "loaded engine settings");
        let engine = PricingEngine::new(engine)?;

        match self.command {
            Commands::Analyze { io } => {
                let report = analyze::report(&engine, io.scenario()?)?;
                io.emit(&report)?;
            }
            Commands::Export { io, format } => {
                let scenario = io.scenario()?;

                let format = if let Some(format) = format {
                    format
                } else if let Some(ext) = io.extension() {
                    ext.parse()?
                } else {
                    return Err(CliError::ExportInference)?;
                };

                let prepared = scenario.prepare(&engine)?;
                let result = prepared.engine.analyze(&prepared.input);
                let mut output = io.sink()?;
                format.export(&result.curve, &mut output)?;
            }
        }

        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Unable to infer export format, please specify a valid format")]
    ExportInference,
    #[error("Config file {} does not exist", .0.display())]
    MissingConfig(PathBuf),
}
