//! Solves a fixed 10-city instance and prints the best route found.

use std::process;

use u_aco::aco::{AcoConfig, AcoError, AcoSolver, DistanceMatrix};

fn ten_cities() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 12.0, 7.0, 15.0, 10.0, 6.0, 14.0, 9.0, 3.0, 18.0],
        vec![12.0, 0.0, 8.0, 5.0, 11.0, 16.0, 13.0, 7.0, 4.0, 10.0],
        vec![7.0, 8.0, 0.0, 9.0, 17.0, 2.0, 6.0, 14.0, 10.0, 12.0],
        vec![15.0, 5.0, 9.0, 0.0, 3.0, 11.0, 8.0, 6.0, 16.0, 13.0],
        vec![10.0, 11.0, 17.0, 3.0, 0.0, 4.0, 5.0, 19.0, 7.0, 15.0],
        vec![6.0, 16.0, 2.0, 11.0, 4.0, 0.0, 12.0, 8.0, 14.0, 9.0],
        vec![14.0, 13.0, 6.0, 8.0, 5.0, 12.0, 0.0, 3.0, 11.0, 7.0],
        vec![9.0, 7.0, 14.0, 6.0, 19.0, 8.0, 3.0, 0.0, 15.0, 4.0],
        vec![3.0, 4.0, 10.0, 16.0, 7.0, 14.0, 11.0, 15.0, 0.0, 6.0],
        vec![18.0, 10.0, 12.0, 13.0, 15.0, 9.0, 7.0, 4.0, 6.0, 0.0],
    ]
}

fn run() -> Result<(), AcoError> {
    let distances = DistanceMatrix::new(ten_cities())?;
    let mut solver = AcoSolver::new(distances, AcoConfig::default())?;

    let result = solver.solve();
    println!("Best route: {}", result.route());
    println!("Length: {}", result.best_length);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {e}");
        process::exit(1);
    }
}
