use clap::Parser;
use kmeans_elbow::*;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(about = "Compute the elbow curve of a random point set")]
struct Opts {
    /// Distribution of the points (uniform, gaussian, clusters)
    #[clap(short, long, default_value = "clusters")]
    method: DistributionMethod,

    /// Amount of points, clamped into 10..=1000
    #[clap(short, long, default_value_t = 300)]
    count: usize,

    /// Largest k of the curve
    #[clap(short = 'k', long, default_value_t = 10)]
    max_k: usize,

    /// Restore the clustering of this k afterwards
    #[clap(short, long)]
    restore: Option<usize>,

    /// Seed for the random number generator
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let opts = Opts::parse();

    let mut builder = KMeansConfig::build();
    if let Some(seed) = opts.seed {
        builder = builder.random_generator(rand::rngs::StdRng::seed_from_u64(seed));
    }
    let settings = SessionSettings::<f64>::default().with_k_range(1..=opts.max_k);
    let mut session = Session::new(settings, builder.build())?;

    let count = session.generate(opts.method, opts.count);
    info!(method = %opts.method, count, "elbow curve computed");

    let max_inertia = session.elbow().inertias().map(|(_, i)| i).fold(0.0, f64::max);
    for record in session.elbow().records() {
        let bar = if max_inertia > 0.0 { (record.inertia / max_inertia * 50.0).round() as usize } else { 0 };
        println!("k = {:2} | {:>12.2} | {:3} iterations | {}", record.k, record.inertia, record.iterations, "#".repeat(bar));
    }

    if let Some(k) = opts.restore {
        session.restore_elbow_selection(k)?;
        println!("Restored k = {}: {} ({} iterations)", session.k(), session.state(), session.iteration());
        println!("Cluster sizes: {:?}", session.clusters().iter().map(|c| c.len()).collect::<Vec<_>>());
    }
    Ok(())
}
