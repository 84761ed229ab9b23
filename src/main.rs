//! Ranks the HTML pages of a directory by PageRank.

use anyhow::Result;
use clap::Parser;
use link_rank::page_rank::{
    iterated::{self, IteratedPageRank},
    sampled::{self, SampledPageRank},
    PageRank, PageRankResult,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "link-rank")]
#[command(author, version, about = "Rank linked HTML pages by sampling and by iteration")]
struct Cli {
    /// Directory of .html pages
    corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long, default_value_t = 0.85)]
    damping: f64,

    /// Length of the random walk
    #[arg(long, default_value_t = 10_000)]
    samples: usize,

    /// Seed for a reproducible random walk
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let corpus = link_rank::crawl(&cli.corpus)?;

    let config = sampled::Config {
        damping: cli.damping,
        samples: cli.samples,
        seed: cli.seed,
    };
    let ranks = SampledPageRank::new(&corpus, &config)?.calc()?;
    println!("PageRank Results from Sampling (n = {})", cli.samples);
    print!("{}", ranks.table(&corpus));

    let config = iterated::Config {
        damping: cli.damping,
        ..iterated::Config::default()
    };
    let ranks = IteratedPageRank::new(&corpus, &config)?.calc()?;
    println!("PageRank Results from Iteration");
    print!("{}", ranks.table(&corpus));

    Ok(())
}
