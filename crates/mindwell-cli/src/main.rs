use std::io::Read;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use mindwell_cli::cli::{Cli, Commands};
use mindwell_cli::{commands, settings};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let output = match &cli.command {
        Commands::Score { input, session } => {
            let scorer = settings::build_scorer(cli.config.as_deref())?;
            let request = match input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            commands::score(&scorer, &request, session.as_deref())?
        }
        Commands::Reply {
            message,
            language,
            history,
        } => {
            let scorer = settings::build_scorer(cli.config.as_deref())?;
            commands::reply(&scorer, message, language.as_deref(), history.clone())?
        }
        Commands::Questions { language } => commands::questions(language)?,
        Commands::Config { check: Some(path) } => commands::check_config(path)?,
        Commands::Config { check: None } => {
            commands::show_config(&settings::load_config(cli.config.as_deref())?)?
        }
    };

    println!("{output}");
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
