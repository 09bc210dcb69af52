//! Random obstacle layouts for demos and experiments.

use rand::{Rng, RngExt};
use tilepath_core::{Grid, Point, TileState};

/// Turn roughly `density` (clamped to `0.0..=1.0`) of the empty tiles of
/// `grid` into obstacles. Start, goal and any other non-empty tiles are left
/// alone. Returns the number of obstacles placed.
pub fn scatter_obstacles(grid: &mut Grid, density: f64, rng: &mut impl Rng) -> usize {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let candidates: Vec<Point> = grid
        .iter()
        .filter(|&(_, t)| t == TileState::Empty)
        .map(|(p, _)| p)
        .collect();

    let mut placed = 0;
    for p in candidates {
        if rng.random_range(0.0..1.0) < density {
            grid.set(p, TileState::Obstacle);
            placed += 1;
        }
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_respects_endpoints() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new();
        grid.set_start(Point::new(0, 0));
        grid.set_goal(Point::new(29, 29));
        let placed = scatter_obstacles(&mut grid, 1.0, &mut rng);
        assert_eq!(placed, 898);
        assert_eq!(grid.get(Point::new(0, 0)), TileState::Start);
        assert_eq!(grid.get(Point::new(29, 29)), TileState::Goal);
    }

    #[test]
    fn zero_density_places_nothing() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = Grid::new();
        assert_eq!(scatter_obstacles(&mut grid, 0.0, &mut rng), 0);
        assert_eq!(scatter_obstacles(&mut grid, f64::NAN, &mut rng), 0);
        assert_eq!(grid.count(TileState::Obstacle), 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let mut a = Grid::new();
        let mut b = Grid::new();
        scatter_obstacles(&mut a, 0.3, &mut StdRng::seed_from_u64(9));
        scatter_obstacles(&mut b, 0.3, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
        let n = a.count(TileState::Obstacle);
        assert!(n > 150 && n < 400, "unexpected obstacle count {n}");
    }
}
