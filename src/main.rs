use clap::Parser;
use lga_select::cli::commands::{build_tracer, cmd_lgas, cmd_regions, cmd_render, load_table, write_output};
use lga_select::cli::config::{Cli, Commands, load_config, resolve_settings, verbosity_level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity_level(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref());
    let settings = resolve_settings(&cli, &config);
    let table = load_table(settings.table.as_deref())?;
    let tracer = build_tracer(&settings)?;

    match cli.command {
        Commands::Regions => {
            print!("{}", cmd_regions(&table));
        }
        Commands::Lgas { state, output, .. } => {
            let (_outcome, content) = cmd_lgas(&table, &settings, &state, &tracer)?;
            write_output(output.as_deref(), &content)?;
        }
        Commands::Render { state, output } => {
            let content = cmd_render(&table, &settings, state.as_deref(), &tracer)?;
            write_output(output.as_deref(), &content)?;
        }
    }

    Ok(())
}
