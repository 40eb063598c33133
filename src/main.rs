use clap::Parser;

use lazylayout::cli::Cli;
use lazylayout::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_path())?;
    lazylayout::ui::run(&cli)
}
