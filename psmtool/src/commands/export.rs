use clap::ValueEnum;
use psm_core::models::CurveSeries;
use std::{io::Write, str::FromStr};

/// The formats a sampled curve can be written in
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn export<W: Write>(&self, curve: &CurveSeries, buffer: &mut W) -> anyhow::Result<()> {
        match self {
            Self::Csv => {
                writeln!(buffer, "price,demand,profit,demand_lower,demand_upper")?;
                for point in &curve.points {
                    writeln!(
                        buffer,
                        "{},{},{},{},{}",
                        point.price,
                        point.demand,
                        point.profit,
                        point.demand_lower,
                        point.demand_upper
                    )?;
                }
            }
            Self::Json => {
                serde_json::to_writer_pretty(&mut *buffer, curve)?;
                writeln!(buffer)?;
            }
        };
        buffer.flush()?;
        Ok(())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" | "CSV" => Ok(Self::Csv),
            "json" | "JSON" => Ok(Self::Json),
            _ => Err(Self::Err::ExportExtension(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ExportFormatError {
    #[error("Unknown export format: {0}")]
    ExportExtension(String),
}
