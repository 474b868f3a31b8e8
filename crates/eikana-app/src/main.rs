use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use eikana_config::Config;
use eikana_lang_japanese::ConverterService;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use self::cli::{Cli, Command, ConvertArgs, StatsArgs, SuggestArgs, UpdateArgs};

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    let config = load_config(&cli)?;
    tracing::debug!("Configuration: {config:?}");

    let service = ConverterService::new(config.dictionary.clone());

    match cli.command {
        Command::Convert(args) => convert(&service, &config, args).await,
        Command::Suggest(args) => suggest(&service, args).await,
        Command::Update(args) => update(&service, args).await,
        Command::Stats(args) => stats(&service, args).await,
    }
}

/// Logs go to stderr so stdout only carries results
fn init_tracing(verbose: bool, json: bool) {
    let default = if verbose { "eikana=debug" } else { "eikana=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| fmt::layer().with_writer(std::io::stderr)))
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::new().context("Invalid configuration in environment")?,
    };

    if let Some(dict) = &cli.dict {
        config.dictionary.path = Some(dict.clone());
    }
    if cli.offline {
        config.dictionary.offline = true;
    }
    Ok(config)
}

async fn convert(
    service: &ConverterService,
    config: &Config,
    args: ConvertArgs,
) -> anyhow::Result<()> {
    let query = args.text.join(" ");

    let mut options = config.search.convert_options();
    if let Some(mode) = args.mode {
        options.mode = mode;
    }
    if let Some(max_results) = args.max_results {
        options.max_results = max_results;
    }
    options.fuzzy |= args.fuzzy;

    let timeout = Duration::from_secs(config.timeout_seconds);
    let records = tokio::time::timeout(timeout, service.convert(&query, &options))
        .await
        .with_context(|| format!("Conversion timed out after {}s", config.timeout_seconds))??;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        let suggestions = service
            .search_suggestions(&query, config.search.suggestions)
            .await?;
        print!("{}", render::no_results(&query, &suggestions));
    } else {
        print!("{}", render::records(&records));
    }
    Ok(())
}

async fn suggest(service: &ConverterService, args: SuggestArgs) -> anyhow::Result<()> {
    let suggestions = service.search_suggestions(&args.partial, args.limit).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else {
        for suggestion in suggestions {
            println!("{suggestion}");
        }
    }
    Ok(())
}

async fn update(service: &ConverterService, args: UpdateArgs) -> anyhow::Result<()> {
    let converter = service.reload(args.force).await.with_context(|| {
        format!(
            "Could not update the dictionary at {}",
            service.source_path().display()
        )
    })?;

    println!(
        "{} entries indexed from {}",
        converter.index().entry_count(),
        render::origin(converter.origin())
    );
    Ok(())
}

async fn stats(service: &ConverterService, args: StatsArgs) -> anyhow::Result<()> {
    let converter = service.initialize().await?;
    let stats = converter.index().stats();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render::stats(&stats, converter.origin()));
    }
    Ok(())
}
