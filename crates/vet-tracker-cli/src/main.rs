use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vet_tracker_cli::{load_seed, Flow, Shell};
use vet_tracker_core::store::PatientStore;

#[derive(Parser)]
#[command(name = "vet-tracker")]
#[command(about = "Veterinary patient tracking from the terminal")]
struct Cli {
    /// JSON file with patients to preload
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Log filter directive, added on top of RUST_LOG
    #[arg(long, default_value = "vet_tracker=info")]
    log_level: String,

    /// Do not print success toasts
    #[arg(long)]
    quiet: bool,
}

/// Run the interactive tracker.
///
/// # Environment Variables
/// - `RUST_LOG`: extra log filter directives (a `.env` file is honoured)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = match &cli.seed {
        Some(path) => load_seed(path)?,
        None => PatientStore::new(),
    };

    let mut shell = Shell::new(store, cli.quiet);
    let mut stdout = std::io::stdout();
    shell.print_banner(&mut stdout)?;

    let mut editor = DefaultEditor::new()?;
    loop {
        match editor.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                match shell.handle_line(&line, &mut stdout) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => {
                        tracing::error!("Command error: {:?}", e);
                        writeln!(stdout, "error: {}", e)?;
                    }
                }
                stdout.flush()?;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    tracing::info!(patients = shell.store().len(), "session ended");
    Ok(())
}
