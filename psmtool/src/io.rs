use crate::Scenario;
use clap::Args;
use serde::Serialize;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

/// Where a command reads its scenario from and writes its result to
#[derive(Args)]
pub struct IOArgs {
    /// The scenario JSON file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(Location))]
    input: Location,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(Location))]
    output: Location,
}

impl IOArgs {
    /// Parse the scenario document from the input
    pub fn scenario(&self) -> anyhow::Result<Scenario> {
        let reader: Box<dyn Read> = match &self.input {
            Location::File(path) => Box::new(BufReader::new(File::open(path)?)),
            Location::Stdio => Box::new(stdin().lock()),
        };
        Ok(serde_json::from_reader(reader)?)
    }

    /// Open the output for writing
    pub fn sink(&self) -> anyhow::Result<Box<dyn Write>> {
        match &self.output {
            Location::File(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Location::Stdio => Ok(Box::new(stdout().lock())),
        }
    }

    /// Write `value` to the output as pretty-printed JSON
    pub fn emit<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        let mut sink = self.sink()?;
        serde_json::to_writer_pretty(&mut sink, value)?;
        writeln!(sink)?;
        sink.flush()?;
        Ok(())
    }

    /// The extension of the output file, if there is one
    pub fn extension(&self) -> Option<&str> {
        match &self.output {
            Location::File(path) => path.extension().and_then(|ext| ext.to_str()),
            Location::Stdio => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Location {
    File(PathBuf),
    Stdio,
}

impl FromStr for Location {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(Self::Stdio),
            path => Ok(Self::File(path.parse()?)),
        }
    }
}
