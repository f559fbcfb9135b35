use clap::Parser;
use qabot::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (ignore errors if missing)
    dotenvy::dotenv().ok();

    qabot::logging::init_from_env()?;

    let cli = Cli::parse();
    cli.run()
}
