//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.
//!
//! Provides a single solver, [`aco::AcoSolver`], built on the classic Ant
//! System:
//!
//! - **Construction**: each ant extends a tour city by city, sampling the
//!   next city from pheromone-weighted visibility scores.
//! - **Evaluation**: closed-tour length, including the return edge.
//! - **Update**: uniform evaporation followed by `1 / length` deposits on
//!   every edge an ant used, once per iteration.
//!
//! # Architecture
//!
//! The distance matrix is validated once and never mutated. All randomness
//! flows through a caller-supplied `rand::Rng`, so runs are reproducible
//! under a fixed seed. With the `parallel` feature, the ants of one
//! iteration may be built on rayon with independent random streams; the
//! pheromone update stays a barrier between iterations.

pub mod aco;
