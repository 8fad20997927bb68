use std::process::exit;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use anagramsearch::config::app;
use anagramsearch::*;

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "info,tower_http=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .init();
}

#[tokio::main]
async fn main() {
    let args = app().get_matches();

    let config = match Config::from_matches(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(2);
        }
    };
    init_logging(config.debug);

    let index = SharedIndex::new();

    //seed before the listener is bound, so no request sees a partial index
    if let Some(wordlist) = config.wordlist.as_ref() {
        if let Err(e) = load_wordlist(wordlist, &index) {
            error!("{}", e);
            exit(1);
        }
    } else {
        info!("no word list given, starting with an empty index");
    }

    if let Err(e) = server::serve(&config, index).await {
        error!("{}", e);
        exit(1);
    }
    info!("exiting");
}
