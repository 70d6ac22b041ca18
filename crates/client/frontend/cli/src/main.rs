//! Terminal client entry point.
use anyhow::Result;
use clap::Parser;
use client_bootstrap::{ContentHostFactory, SessionConfig};
use client_frontend_cli::{CliApp, CliArgs, StdConsole, logging};
use wumpus_content::MapCatalog;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let _guard = logging::init()?;

    if args.list_maps {
        for name in MapCatalog::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = args.apply(SessionConfig::from_env());
    let app = CliApp::new(config).print_transcript(args.transcript);

    app.run(&ContentHostFactory::default(), StdConsole::stdio())?;
    Ok(())
}
