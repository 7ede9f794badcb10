use clap::Parser;
use log::{debug, info};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;

use forkify::{Action, App, AppConfig, FileStorage, ForkifyClient, Terminal, Ui};

#[derive(Parser)]
#[command(name = "forkify", version, about = "Search recipes and plan your shopping")]
struct Cli {
    /// Base URL of the recipe API
    #[arg(long)]
    api_url: Option<String>,

    /// Directory where liked recipes are kept
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    /// Recipe to open right away
    #[arg(long)]
    recipe: Option<String>,

    /// Search to run right away
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url;
    }
    if let Some(dir) = cli.storage_dir {
        config.storage_dir = dir;
    }
    debug!("{:?}", config);

    let client = ForkifyClient::new(&config)?;
    let storage = Arc::new(FileStorage::new(&config.storage_dir));
    let mut app = App::new(Box::new(client), storage, config.results_per_page);
    let mut terminal = Terminal::stdio();

    app.start(&mut terminal);

    let startup = cli
        .search
        .map(Action::Search)
        .into_iter()
        .chain(cli.recipe.map(Action::Open));
    for action in startup {
        if let ControlFlow::Break(()) = app.dispatch(action, &mut terminal).await {
            return Ok(());
        }
    }

    while let Some(line) = terminal.read_line("> ") {
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Action>() {
            Ok(action) => {
                if let ControlFlow::Break(()) = app.dispatch(action, &mut terminal).await {
                    break;
                }
            }
            Err(e) => terminal.alert(&format!("{e} (type 'help' for commands)")),
        }
    }

    info!("Goodbye");
    Ok(())
}
