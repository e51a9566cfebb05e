//! Pheromone trail storage.

/// N×N pheromone intensities, the colony's shared memory.
///
/// Trails are treated as undirected: [`deposit_tour`](Self::deposit_tour)
/// reinforces both directions of every edge it touches.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creates an `n`×`n` matrix with `initial` on every entry.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            data: vec![initial; n * n],
        }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// True only for a matrix built with `n == 0`.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Pheromone on the edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// All entries, row-major.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Overwrites every entry with `value`.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    /// Multiplies every entry, diagonal included, by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Adds `amount` to each edge of the closed `tour`, in both directions.
    ///
    /// The closing edge from the last city back to the first is included.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        let len = tour.len();
        for k in 0..len {
            let a = tour[k];
            let b = tour[(k + 1) % len];
            self.data[a * self.n + b] += amount;
            self.data[b * self.n + a] += amount;
        }
    }
}
