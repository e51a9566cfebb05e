//! Ant Colony Optimization (ACO) for the symmetric Traveling Salesman Problem.
//!
//! A colony of simulated ants repeatedly builds closed tours, choosing each
//! next city with probability weighted by the pheromone on the edge and by
//! its visibility (inverse distance). After every iteration the trails
//! evaporate and each ant reinforces the edges of its own tour in
//! proportion to how short it was.
//!
//! # Key Types
//!
//! - [`DistanceMatrix`]: Validated, immutable inter-city distances
//! - [`AcoConfig`]: Colony size, iteration count, `alpha`, `beta`, `rho`, seed
//! - [`AcoSolver`]: Owns the trails and runs the colony
//! - [`AcoResult`]: Best tour, its length, and per-iteration history
//! - [`Route`]: `Display` adapter rendering a closed tour
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//!   of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod route;
mod runner;
mod types;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use route::Route;
pub use runner::{AcoResult, AcoSolver, IterationStats};
pub use types::{AcoError, DistanceMatrix};
