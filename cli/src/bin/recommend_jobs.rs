//! `recommend-jobs <student-id>`: print the best matching job postings for a
//! student as a JSON array.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jobmatch_cli::{AppConfig, logging, output};
use jobmatch_recommender::{JsonDocumentStore, RankedJob, Recommender};

#[derive(Debug, Parser)]
#[command(
    name = "recommend-jobs",
    version,
    about = "Rank job postings for a student by profile similarity"
)]
struct Cli {
    /// Id of the student profile.
    student_id: String,

    /// TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding studentprofiles.json and jobposts.json.
    #[arg(long, value_name = "DIR")]
    store_dir: Option<PathBuf>,

    /// Maximum number of jobs to print.
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return output::usage_error(err),
    };
    logging::init();

    match run(cli).await {
        Ok(jobs) => output::emit(&jobs),
        Err(err) => output::fail(&err),
    }
}

async fn run(cli: Cli) -> anyhow::Result<Vec<RankedJob>> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.store_dir {
        config.store_dir = dir;
    }
    if let Some(limit) = cli.limit {
        config.recommender.max_results = limit;
    }

    let store = JsonDocumentStore::open(&config.store_dir).await?;
    let provider = config.embedding.shared_provider().get().await?;

    let recommender = Recommender::new(provider, store).with_config(config.recommender);
    Ok(recommender.recommend(&cli.student_id).await?)
}
