use rand::Rng;

use crate::app::game::snake::Snake;
use crate::basic::{Cell, Grid};

/// Pick a random cell not covered by the snake. Samples are drawn from
/// `[padding, len - padding - 1)` on each axis, so the last interior row
/// and column never receive food.
///
/// Retries until a free cell comes up, which assumes the snake only
/// covers a small part of the grid.
pub fn generate_food(snake: &Snake, grid: &Grid, rng: &mut impl Rng) -> Cell {
    loop {
        let food = Cell {
            x: rng.gen_range(grid.padding..grid.cols - grid.padding - 1),
            y: rng.gen_range(grid.padding..grid.rows - grid.padding - 1),
        };
        if !snake.contains(food) {
            debug_assert!(grid.interior_contains(food));
            return food;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_food_stays_inside_sampling_area() {
        let grid = Grid::new(1280, 720, 20, 2).unwrap();
        let snake = Snake::new(Cell::new(2, 2));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let food = generate_food(&snake, &grid, &mut rng);
            assert!((2..61).contains(&food.x), "{}", food);
            assert!((2..33).contains(&food.y), "{}", food);
        }
    }

    #[test]
    fn test_food_avoids_snake() {
        // 3x3 sampling area (x, y in 2..5), snake covers all but (4, 4)
        let grid = Grid::new(160, 160, 20, 2).unwrap();
        let snake = Snake::from_cells(
            (2..5)
                .flat_map(|y| (2..5).map(move |x| Cell::new(x, y)))
                .filter(|c| *c != Cell::new(4, 4)),
        );
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            assert_eq!(generate_food(&snake, &grid, &mut rng), Cell::new(4, 4));
        }
    }
}
