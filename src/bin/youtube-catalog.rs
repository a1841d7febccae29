use clap::{Parser, Subcommand};
use std::path::PathBuf;
use youtube_catalog::bpm::{detect_bpm, CommandBeatTracker};
use youtube_catalog::{persist, CatalogConfig, ChannelClient};

/// YouTube channel music catalog scraper
#[derive(Parser)]
#[command(
    name = "youtube-catalog",
    about = "Scrape a YouTube channel's videos into a music catalog",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape a channel's videos page and write the catalog document
    Scrape {
        /// Channel handle, e.g. "@worldstudiorecords"
        #[arg(default_value = "@worldstudiorecords")]
        handle: String,

        /// Output path for the catalog JSON
        #[arg(short, long, default_value = persist::DEFAULT_CATALOG_FILE)]
        output: PathBuf,

        /// Base URL of the site (override for testing)
        #[arg(long, default_value = "https://www.youtube.com")]
        base_url: String,
    },
    /// Estimate the BPM of an audio file via an external beat tracker
    Bpm {
        /// Path to the audio file
        file: PathBuf,

        /// Estimator command line; the audio path is appended as the last
        /// argument
        #[arg(long, default_value = "python3 detect_bpm.py")]
        estimator: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Cli::parse();

    match args.command {
        Commands::Scrape {
            handle,
            output,
            base_url,
        } => scrape(&handle, &output, base_url).await,
        Commands::Bpm { file, estimator } => bpm(&file, &estimator),
    }
}

async fn scrape(handle: &str, output: &std::path::Path, base_url: String) {
    let http_client = http_client::native::NativeClient::new();
    let client = ChannelClient::with_base_url(Box::new(http_client), base_url);

    println!("Scraping {handle}...");
    let catalog = client.scrape_channel(handle, &CatalogConfig::default()).await;

    if catalog.is_empty() {
        println!("No videos found. The page structure might have changed.");
        return;
    }

    if let Err(e) = persist::save_catalog(output, &catalog) {
        eprintln!("Failed to write catalog: {e}");
        std::process::exit(1);
    }

    println!("Data saved to {}", output.display());
    println!("Tracks: {}", catalog.tracks.len());
    println!("Artists: {}", catalog.artists.len());
    println!();
    println!("Sample tracks:");
    for track in catalog.tracks.iter().take(5) {
        println!("  - {} - {} ({})", track.artist, track.title, track.genre);
    }
}

fn bpm(file: &std::path::Path, estimator: &str) {
    let mut parts = estimator.split_whitespace();
    let Some(program) = parts.next() else {
        eprintln!("Empty estimator command");
        std::process::exit(1);
    };
    let args: Vec<String> = parts.map(str::to_string).collect();
    let tracker = CommandBeatTracker::with_args(program, args);

    match detect_bpm(&tracker, file) {
        Ok(bpm) => println!("{bpm} BPM"),
        Err(e) => {
            eprintln!("Beat tracking failed: {e}");
            std::process::exit(1);
        }
    }
}
