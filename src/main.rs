//! termtype binary entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use cli::{Cli, Commands, ConfigCommands};
use termtype::logging::{self, LogTarget};
use termtype::theme::current_palette;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", current_palette().error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Play(_));
    logging::init(
        cli.verbose,
        LogTarget::choose(cli.log_file.as_deref(), interactive),
    )?;

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Export(args) => commands::export::handle(args),
        Commands::Copy { source } => commands::copy::handle(&source),
        Commands::Samples => commands::list::handle_samples(),
        Commands::Themes => commands::list::handle_themes(),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Edit => commands::config::handle_edit(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "termtype", &mut std::io::stdout());
            Ok(())
        }
    }
}
