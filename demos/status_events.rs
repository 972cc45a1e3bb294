use kmeans_elbow::*;

fn main() {
    let conf = KMeansConfig::build()
        .init_done(&|run| println!("Initialization completed ({} centroids).", run.k()))
        .iteration_done(&|run, nr, moved|
            println!("Iteration {} - Inertia: {:.2} | Centroids moved: {}", nr, run.inertia(), moved))
        .converged(&|run, iterations|
            println!("Clustering {} after {} iterations.", run.state(), iterations))
        .build();

    let mut session = Session::new(SessionSettings::<f64>::default(), conf).expect("valid settings");
    session.generate(DistributionMethod::Gaussian, 300);
    session.select_k(5);

    // Drive the clustering the way a frontend would: one step per redraw
    let mut ticket = session.start_animation().expect("points were generated");
    while let Some(frame) = session.on_frame(ticket) {
        match frame.next_frame {
            Some(next) => ticket = next,
            None => break,
        }
    }

    println!("Controls: {:?}", session.controls());
}
