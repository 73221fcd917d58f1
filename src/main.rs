use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;
use structopt::StructOpt;

use ablate::{Dataset, Experiment, load_feature_ranking, write_report};

/// Measure how KNN classification accuracy degrades as dimensionality is
/// reduced, by raw feature removal and by principal-component truncation.
#[derive(StructOpt, Debug)]
#[structopt(name = "ablate")]
struct Opt {
    /// Training data CSV: label column first, feature columns after.
    #[structopt(long, parse(from_os_str), default_value = "data/training_data.csv")]
    training: PathBuf,

    /// Test data CSV; must carry the same header as the training file.
    #[structopt(long, parse(from_os_str), default_value = "data/test_data.csv")]
    test: PathBuf,

    /// Feature names ordered by variance, one per line.
    #[structopt(long, parse(from_os_str), default_value = "data/feature_list.txt")]
    feature_list: PathBuf,

    /// Output CSV for the per-step accuracy table.
    #[structopt(long, parse(from_os_str), default_value = "data/results.csv")]
    results: PathBuf,

    /// Neighbor count for the KNN classifier.
    #[structopt(short, default_value = "3")]
    k: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Opt::from_args();

    info!("training file: {}", opt.training.display());
    info!("test file: {}", opt.test.display());

    let train = Dataset::from_csv(&opt.training).context("loading training data")?;
    let test = Dataset::from_csv(&opt.test).context("loading test data")?;
    let ranking = load_feature_ranking(&opt.feature_list).context("loading feature list")?;

    let experiment = Experiment::new(train, test, ranking, opt.k)?;
    let report = experiment.run()?;

    write_report(&opt.results, &report)
        .with_context(|| format!("writing results to {}", opt.results.display()))?;
    info!("wrote {} ablation steps to {}", report.len(), opt.results.display());

    Ok(())
}
