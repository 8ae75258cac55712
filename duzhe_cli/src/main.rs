mod cli;
mod commands;
mod config;
mod observability;
mod repl;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use cli::{Cli, Commands};
use config::Settings;
use duzhe_dict::ListPolicy;

fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::init_tracing(cli.quiet);
    let settings = Settings::from_cli(&cli);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match &cli.command {
        Commands::Batch { input_dir } => commands::batch(&settings, input_dir, &mut out),
        Commands::Check { file } => commands::check(&settings, file, &mut out),
        Commands::Lists => commands::lists(&settings, &mut out),
        Commands::Repl => commands::Toolkit::load(&settings, ListPolicy::Lenient)
            .and_then(|kit| repl::repl(&kit, &mut io::stdin().lock(), &mut out))
            .map(|()| true),
    };
    let code = match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if settings.json {
                let _ = writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::FAILURE
        }
    };
    let _ = out.flush();
    code
}
