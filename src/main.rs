// Entry point: parse flags, load credentials, run the fetch/cache/rank
// pipeline, print the leaderboard.

use chrono::Local;
use clap::Parser;

use emojiboard::cache::CacheStore;
use emojiboard::cli::Cli;
use emojiboard::config::Config;
use emojiboard::error::Result;
use emojiboard::leaderboard;
use emojiboard::repository::Repository;
use emojiboard::slack::{HttpTransport, SlackClient};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let now = Local::now();
    let since = cli.window_cutoff(now);

    let config = Config::from_env()?;
    let transport = HttpTransport::new(&config.credentials)?;
    let client = SlackClient::new(transport, &config);
    let cache = CacheStore::new(config.cache_root.clone(), now.date_naive());
    let repository = Repository::new(client, cache);

    let emojis = repository.emojis(!cli.cache_bust).await?;
    let board = leaderboard::rank(&emojis, cli.top, since);

    println!();
    print!("{}", board.render());

    Ok(())
}
