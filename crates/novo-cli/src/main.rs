use std::env;
use std::io::{self, Write};

use eyre::Result;

use novo_cli::form;
use novo_storage::store::SubmissionStore;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let data_dir = env::var("NOVO_DATA_DIR").unwrap_or_else(|_| "novo-data".to_string());
    let store = SubmissionStore::new(data_dir);
    tracing::info!(root = %store.root().display(), "submission archive root");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    form::run(&store, &mut input, &mut output)?;
    output.flush()?;
    Ok(())
}
