use super::IOArgs;
use clap::Subcommand;

pub mod analyze;
pub mod export;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the pricing analysis and report the results as JSON
    Analyze {
        #[command(flatten)]
        io: IOArgs,
    },

    /// Sample the demand and profit curves and export them for charting
    Export {
        #[command(flatten)]
        io: IOArgs,

        /// The file format to use (if omitted, will infer based on filename)
        #[arg(short, long)]
        format: Option<export::ExportFormat>,
    },
}
