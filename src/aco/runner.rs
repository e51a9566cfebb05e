//! Ant System execution loop.
//!
//! # Algorithm
//!
//! 1. Reset every trail to the initial pheromone value
//! 2. At each iteration:
//!    a. Every ant starts from a uniformly random city and extends its
//!       tour one city at a time, choosing among unvisited cities with
//!       probability proportional to `tau^alpha * (1/d)^beta`
//!    b. Tour lengths are evaluated and the global best is recorded
//!    c. All trails evaporate by `rho`, then every ant deposits
//!       `1 / length` on the edges of its tour
//! 3. Stop after exactly `max_iterations` iterations
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant System: Optimization by
//! a Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use super::route::Route;
use super::types::{AcoError, DistanceMatrix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found across all ants and iterations.
    pub best_tour: Vec<usize>,

    /// Length of `best_tour`, closing edge included.
    pub best_length: f64,

    /// Iteration (0-based) in which `best_tour` was found.
    pub best_iteration: usize,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best length after each iteration. Non-increasing.
    pub length_history: Vec<f64>,
}

impl AcoResult {
    /// Display adapter for the best tour.
    pub fn route(&self) -> Route<'_> {
        Route(&self.best_tour)
    }
}

/// Progress snapshot handed to the observer after each iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// 0-based iteration index.
    pub iteration: usize,
    /// Shortest tour built by any ant in this iteration.
    pub iteration_best_length: f64,
    /// Shortest tour found so far in the run.
    pub best_length: f64,
    /// Whether this iteration improved the global best.
    pub improved: bool,
}

/// Ant Colony solver for one distance matrix.
///
/// Owns the pheromone trails and a preallocated arena of per-ant tours
/// that is overwritten every iteration.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoSolver, DistanceMatrix};
///
/// let distances = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 5.0, 1.0],
///     vec![1.0, 0.0, 1.0, 5.0],
///     vec![5.0, 1.0, 0.0, 1.0],
///     vec![1.0, 5.0, 1.0, 0.0],
/// ])
/// .unwrap();
/// let config = AcoConfig::default()
///     .with_num_ants(10)
///     .with_max_iterations(20)
///     .with_seed(42);
///
/// let mut solver = AcoSolver::new(distances, config).unwrap();
/// let result = solver.solve();
/// assert_eq!(result.best_tour.len(), 4);
/// println!("Best route: {}", result.route());
/// ```
#[derive(Debug, Clone)]
pub struct AcoSolver {
    distances: DistanceMatrix,
    pheromones: PheromoneMatrix,
    config: AcoConfig,
    ant_tours: Vec<Vec<usize>>,
    ant_lengths: Vec<f64>,
}

impl AcoSolver {
    /// Creates a solver with uniform initial trails.
    ///
    /// # Errors
    /// Returns [`AcoError::InvalidConfig`] if `config` fails
    /// [`AcoConfig::validate`].
    pub fn new(distances: DistanceMatrix, config: AcoConfig) -> Result<Self, AcoError> {
        config.validate().map_err(AcoError::InvalidConfig)?;

        let n = distances.len();
        Ok(Self {
            pheromones: PheromoneMatrix::new(n, config.initial_pheromone),
            ant_tours: vec![vec![0; n]; config.num_ants],
            ant_lengths: vec![0.0; config.num_ants],
            distances,
            config,
        })
    }

    /// The distance matrix the solver was built with.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Current pheromone trails.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Configuration in use.
    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    /// Picks the next city for an ant standing on `current`.
    ///
    /// Unvisited cities are walked in index order and the first whose
    /// cumulative probability reaches a uniform draw in `[0, 1)` is
    /// returned. If rounding or an all-zero score leaves nothing selected,
    /// the lowest-indexed unvisited city is returned instead.
    ///
    /// The caller marks the returned city as visited.
    ///
    /// # Panics
    /// Panics if `visited` does not have one entry per city, or if every
    /// city in it is already marked.
    pub fn select_next_city<R: Rng>(&self, current: usize, visited: &[bool], rng: &mut R) -> usize {
        let n = self.distances.len();
        assert_eq!(visited.len(), n, "visited must have one entry per city");

        let mut probabilities = vec![0.0; n];
        let mut total = 0.0;
        for city in (0..n).filter(|&c| !visited[c]) {
            let pheromone = self.pheromones.get(current, city).powf(self.config.alpha);
            let visibility = (1.0 / self.distances.get(current, city)).powf(self.config.beta);
            probabilities[city] = pheromone * visibility;
            total += probabilities[city];
        }

        if total > 0.0 {
            for p in &mut probabilities {
                *p /= total;
            }
        }

        let r: f64 = rng.random();
        let mut cumulative = 0.0;
        for city in (0..n).filter(|&c| !visited[c]) {
            cumulative += probabilities[city];
            if r <= cumulative {
                return city;
            }
        }

        visited
            .iter()
            .position(|&v| !v)
            .expect("select_next_city called with every city visited")
    }

    /// Length of the closed tour, including the edge back to the start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
            return 0.0;
        };
        let open: f64 = tour
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum();
        open + self.distances.get(last, first)
    }

    /// Builds one complete tour from a random start city.
    pub fn construct_tour<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        let n = self.distances.len();
        let mut tour = vec![0; n];
        let mut visited = vec![false; n];
        self.fill_tour(&mut tour, &mut visited, rng);
        tour
    }

    /// Evaporates every trail, then lets each ant deposit `1 / length`
    /// on both directions of every edge of its tour.
    ///
    /// Must be called once per iteration, after all ants have finished.
    ///
    /// # Panics
    /// Panics if `tours` and `lengths` differ in length.
    pub fn update_pheromones(&mut self, tours: &[Vec<usize>], lengths: &[f64]) {
        assert_eq!(tours.len(), lengths.len(), "one length per tour");

        self.pheromones.evaporate(self.config.rho);
        for (tour, &length) in tours.iter().zip(lengths) {
            self.pheromones.deposit_tour(tour, 1.0 / length);
        }
    }

    /// Runs the colony with a random source seeded from the config.
    pub fn solve(&mut self) -> AcoResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.solve_with_rng(&mut rng)
    }

    /// Runs the colony drawing every random decision from `rng`.
    pub fn solve_with_rng<R: Rng>(&mut self, rng: &mut R) -> AcoResult {
        self.solve_with_observer(rng, |_| {})
    }

    /// Runs the colony, calling `on_iteration` after each pheromone update.
    ///
    /// Trails are reset to the initial value first, so consecutive calls
    /// are independent runs.
    pub fn solve_with_observer<R, F>(&mut self, rng: &mut R, mut on_iteration: F) -> AcoResult
    where
        R: Rng,
        F: FnMut(&IterationStats),
    {
        self.pheromones.fill(self.config.initial_pheromone);

        let mut tours = std::mem::take(&mut self.ant_tours);
        let mut lengths = std::mem::take(&mut self.ant_lengths);

        let mut best_tour = Vec::with_capacity(self.distances.len());
        let mut best_length = f64::INFINITY;
        let mut best_iteration = 0;
        let mut length_history = Vec::with_capacity(self.config.max_iterations);

        for iteration in 0..self.config.max_iterations {
            self.construct_colony(&mut tours, &mut lengths, rng);

            let mut iteration_best_length = f64::INFINITY;
            let mut improved = false;
            for (tour, &length) in tours.iter().zip(&lengths) {
                iteration_best_length = iteration_best_length.min(length);
                if best_tour.is_empty() || length < best_length {
                    best_length = length;
                    best_tour.clear();
                    best_tour.extend_from_slice(tour);
                    best_iteration = iteration;
                    improved = true;
                }
            }

            self.update_pheromones(&tours, &lengths);

            length_history.push(best_length);
            on_iteration(&IterationStats {
                iteration,
                iteration_best_length,
                best_length,
                improved,
            });
        }

        self.ant_tours = tours;
        self.ant_lengths = lengths;

        AcoResult {
            best_tour,
            best_length,
            best_iteration,
            iterations: self.config.max_iterations,
            length_history,
        }
    }

    /// Writes a full tour into `tour` and returns its length.
    fn fill_tour<R: Rng>(&self, tour: &mut [usize], visited: &mut [bool], rng: &mut R) -> f64 {
        let n = self.distances.len();
        visited.fill(false);

        let start = rng.random_range(0..n);
        tour[0] = start;
        visited[start] = true;

        for i in 1..n {
            let next = self.select_next_city(tour[i - 1], visited, rng);
            tour[i] = next;
            visited[next] = true;
        }

        self.tour_length(tour)
    }

    fn construct_colony_sequential<R: Rng>(
        &self,
        tours: &mut [Vec<usize>],
        lengths: &mut [f64],
        rng: &mut R,
    ) {
        let mut visited = vec![false; self.distances.len()];
        for (tour, length) in tours.iter_mut().zip(lengths.iter_mut()) {
            *length = self.fill_tour(tour, &mut visited, rng);
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn construct_colony<R: Rng>(&self, tours: &mut [Vec<usize>], lengths: &mut [f64], rng: &mut R) {
        self.construct_colony_sequential(tours, lengths, rng);
    }

    /// Each ant gets its own stream seeded from `rng`, so results do not
    /// depend on how rayon schedules the ants.
    #[cfg(feature = "parallel")]
    fn construct_colony<R: Rng>(&self, tours: &mut [Vec<usize>], lengths: &mut [f64], rng: &mut R) {
        if !self.config.parallel {
            self.construct_colony_sequential(tours, lengths, rng);
            return;
        }

        let n = self.distances.len();
        let seeds: Vec<u64> = (0..tours.len()).map(|_| rng.random()).collect();
        tours
            .par_iter_mut()
            .zip(lengths.par_iter_mut())
            .zip(seeds.par_iter())
            .for_each(|((tour, length), &seed)| {
                let mut ant_rng = StdRng::seed_from_u64(seed);
                let mut visited = vec![false; n];
                *length = self.fill_tour(tour, &mut visited, &mut ant_rng);
            });
    }
}
