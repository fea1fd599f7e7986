use clap::Parser as _;
use psmtool::BaseArgs;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

pub fn main() -> anyhow::Result<()> {
    // Reports go to stdout, so diagnostics are written to stderr.
    // Verbosity is controlled with RUST_LOG, e.g. RUST_LOG=psm_engine=debug.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = BaseArgs::parse();
    args.evaluate()
}
