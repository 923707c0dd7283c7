use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use poster_cache::application::{PosterState, SearchMoviesUseCase, SearchResult};
use poster_cache::infrastructure::{
    AppConfig, CliArgs, ConfigLoader, ImageCacheManager, MemoryPressureNotifier, OmdbClient,
    ReqwestTransport,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let loader = ConfigLoader::new()?;
    let mut config = loader.load(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn print_result(result: &SearchResult) {
    println!(
        "page {} ({} results{})",
        result.page,
        result.total_results,
        if result.has_more { ", more available" } else { "" }
    );
    for card in &result.cards {
        let poster = match &card.poster {
            PosterState::Loaded(img) => format!("{}x{}", img.width(), img.height()),
            PosterState::Missing => "no poster".to_string(),
            PosterState::Failed(e) => format!("failed: {e}"),
        };
        println!(
            "  {} {} ({}) - {}",
            card.movie.id(),
            card.movie.title(),
            card.movie.year(),
            poster
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    info!(version = poster_cache::VERSION, "Starting {}", poster_cache::NAME);

    let memory_pressure = MemoryPressureNotifier::new();
    #[cfg(unix)]
    let _signals = memory_pressure.forward_sigusr1()?;

    let transport = Arc::new(ReqwestTransport::new()?);
    let images = Arc::new(ImageCacheManager::new(
        config.image_cache.capacity,
        transport,
        &memory_pressure,
    ));

    let api_key = config
        .catalog
        .api_key
        .clone()
        .ok_or_else(|| eyre!("no OMDb API key; pass --api-key or set OMDB_API_KEY"))?;
    let catalog = Arc::new(OmdbClient::with_base_url(
        config.catalog.base_url.clone(),
        api_key,
    )?);

    let search = SearchMoviesUseCase::new(catalog, images.clone());
    let result = search.execute(&args.query, args.page).await?;
    print_result(&result);

    if args.repeat {
        let urls: Vec<&str> = result
            .cards
            .iter()
            .filter_map(|card| card.movie.poster_url())
            .collect();
        let reloaded = images.load_many(urls).await;
        let failed = reloaded.iter().filter(|r| r.is_err()).count();
        println!("reloaded {} posters ({failed} failed)", reloaded.len());
    }

    println!("{}", images.stats());

    Ok(())
}
