//! Human-readable rendering of a tour.

use std::fmt;

/// Display adapter for a closed tour.
///
/// Renders the cities in visiting order and closes back to the start,
/// e.g. `3 -> 1 -> 0 -> 2 -> 3`. An empty tour renders as nothing.
///
/// ```
/// use u_aco::aco::Route;
///
/// assert_eq!(Route(&[3, 1, 0, 2]).to_string(), "3 -> 1 -> 0 -> 2 -> 3");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Route<'a>(pub &'a [usize]);

impl fmt::Display for Route<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(&first) = self.0.first() else {
            return Ok(());
        };
        for city in self.0 {
            write!(f, "{city} -> ")?;
        }
        write!(f, "{first}")
    }
}
