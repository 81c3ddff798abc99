use anyhow::{bail, Context};
use std::env;

use verse_rhymer::config::Config;
use verse_rhymer::logging::init_logging;
use verse_rhymer::rhyme_index::RhymeIndex;
use verse_rhymer::web_server;

const USAGE: &str = "usage: rhymer [web | stats | query <ending> [--offset N] [--limit N]]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_logging(&config.log_level).context("failed to start logging")?;

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("web") => start_web_mode(&config).await,
        Some("query") => query_mode(&config, &args[2..]),
        Some("stats") | None => stats_mode(&config),
        Some(other) => {
            eprintln!("{USAGE}");
            bail!("unknown command `{other}`")
        }
    }
}

fn load_index(config: &Config) -> anyhow::Result<RhymeIndex> {
    RhymeIndex::load(&config.corpus_dir)
        .with_context(|| format!("failed to load corpus from {}", config.corpus_dir.display()))
}

async fn start_web_mode(config: &Config) -> anyhow::Result<()> {
    let index = load_index(config)?;
    let stats = index.get_stats();
    log::info!(
        "serving {} books, {} verses, {} distinct words",
        stats.books,
        stats.verses,
        stats.words
    );

    web_server::start_web_server(index, config)
        .await
        .context("web server failed")
}

fn stats_mode(config: &Config) -> anyhow::Result<()> {
    let index = load_index(config)?;
    println!("{}", serde_json::to_string_pretty(&index.get_stats())?);
    Ok(())
}

fn query_mode(config: &Config, args: &[String]) -> anyhow::Result<()> {
    let Some(ending) = args.first() else {
        eprintln!("{USAGE}");
        bail!("missing ending");
    };

    let mut offset = 0;
    let mut limit = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--offset" => {
                offset = flag_value(args, i)?;
                i += 2;
            }
            "--limit" => {
                limit = Some(flag_value(args, i)?);
                i += 2;
            }
            other => bail!("unexpected argument `{other}`"),
        }
    }

    let index = load_index(config)?;
    let page = index
        .rhymer()
        .report_page(ending, offset, config.query.page_limit(limit));

    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

fn flag_value(args: &[String], i: usize) -> anyhow::Result<usize> {
    let flag = &args[i];
    let value = args
        .get(i + 1)
        .with_context(|| format!("{flag} needs a value"))?;
    value
        .parse()
        .with_context(|| format!("invalid value `{value}` for {flag}"))
}
