use kmeans_elbow::*;

fn main() {
    let (sample_cnt, k) = (500, 4);
    let conf = KMeansConfig::default();
    let bounds = Bounds::new(600.0f64, 400.0).expect("valid canvas");

    // Generate some clustered data
    let points = generate(DistributionMethod::Clusters, sample_cnt, &bounds, &conf);

    // Calculate kmeans, using random uniform centroids as initialization-method
    let mut run = ClusteringRun::new(points, bounds);
    run.start(k, ClusteringRun::init_random_uniform, &conf);
    let state = run.run_to_convergence(&conf);

    println!("State: {} after {} iterations", state, run.iteration());
    println!("Centroids: {:?}", run.centroids());
    println!("Cluster sizes: {:?}", run.clusters().iter().map(|c| c.len()).collect::<Vec<_>>());
    println!("Inertia: {}", run.inertia());
}
