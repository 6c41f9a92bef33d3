//! yt-channel-search - YouTube Data API v3 search and channel lookup.
//!
//! Main entry point: parses flags, loads configuration and prints either
//! categorized search results or a channel report.

mod config;
mod youtube;

use anyhow::Context;
use clap::Parser;
use config::Config;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use youtube::api::YouTubeApi;
use youtube::{Channel, ThumbnailSize, YouTubeClient, YouTubeError};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "yt-channel-search", version, about)]
struct Cli {
    /// Search term
    #[arg(long, default_value = "Google")]
    q: String,

    /// Max results
    #[arg(long)]
    max_results: Option<u32>,

    /// API key, overrides the one in the config file
    #[arg(long)]
    api_key: Option<String>,

    /// Path to config.jsonc
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a report for this channel ID instead of searching
    #[arg(long)]
    channel: Option<String>,

    /// Number of video thumbnails in the channel report
    #[arg(long, default_value_t = 10, requires = "channel")]
    videos: u32,
}

/// Main application entry point.
///
/// # Details
/// Logging goes to stderr; stdout only carries the report. An HTTP error
/// from the search call is printed and ends the run successfully, any other
/// error is returned.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_api_key(cli.api_key.clone());

    if !config.has_api_key() {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::default_config_path()?,
        };
        eprintln!("Error: YouTube API key is required.");
        eprintln!("Pass --api-key or set api_key in: {}", config_path.display());
    }
    let client = YouTubeClient::new(&config).context("Failed to create YouTube client")?;
    info!(base_url = client.base_url(), "YouTube client ready");

    match &cli.channel {
        Some(channel_id) => print_channel_report(&client, channel_id, cli.videos).await,
        None => {
            let max_results = cli.max_results.unwrap_or(config.default_max_results);
            run_search(&client, &cli.q, max_results).await
        }
    }
}

/// Run the keyword search and print grouped results.
///
/// # Details
/// [`YouTubeError::Http`] is reported on stdout and treated as handled.
async fn run_search<A: YouTubeApi>(
    api: &A,
    query: &str,
    max_results: u32,
) -> anyhow::Result<()> {
    match youtube::search(api, query, max_results).await {
        Ok(results) => {
            if results.is_empty() {
                info!(query, "No results");
            }
            print!("{}", results);
            Ok(())
        }
        Err(err @ YouTubeError::Http { .. }) => {
            println!("{}", err);
            Ok(())
        }
        Err(err) => Err(err).context("Search failed"),
    }
}

/// Print channel metadata and the newest video thumbnails.
async fn print_channel_report(
    client: &YouTubeClient,
    channel_id: &str,
    videos: u32,
) -> anyhow::Result<()> {
    let channel = Channel::new(client, channel_id)
        .await
        .with_context(|| format!("Failed to load channel {}", channel_id))?;

    println!("{} ({})", channel.title(), channel.id());
    if let Some(handle) = channel.custom_url() {
        println!("Handle: {}", handle);
    }
    if let Some(created) = channel.published_at() {
        println!("Created: {}", created.format("%Y-%m-%d"));
    }
    if !channel.description().is_empty() {
        println!("Description: {}", channel.description());
    }
    if let Some(keywords) = channel.keywords() {
        println!("Keywords: {}", keywords);
    }
    println!("Subscribers: {}", format_count(channel.subscriber_count()));
    println!("Videos: {}", format_count(channel.video_count()));
    println!("Views: {}", format_count(channel.view_count()));
    if let Some(uploads) = channel.uploads_playlist_id() {
        println!("Uploads playlist: {}", uploads);
    }
    for topic in channel.topic_categories() {
        println!("Topic: {}", topic);
    }

    println!("\nThumbnails:");
    for size in ThumbnailSize::ALL {
        match channel.thumbnail_url(size) {
            Ok(url) => println!("  {}: {}", size, url),
            Err(YouTubeError::MissingField(_)) => println!("  {}: -", size),
            Err(err) => return Err(err.into()),
        }
    }

    let urls = channel
        .video_thumbnail_urls(videos)
        .await
        .context("Failed to list channel videos")?;
    println!("\nLatest video thumbnails ({}):", urls.len());
    for url in urls {
        println!("  {}", url);
    }

    Ok(())
}

fn format_count(count: Option<u64>) -> String {
    count.map_or_else(|| "hidden".to_string(), |c| c.to_string())
}
