use std::time::Duration;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::app::control::Control;
use crate::basic::{Cell, Dir, Grid};

pub use food::generate_food;
pub use snake::Snake;

mod food;
mod snake;

/// Things that happened during a tick that the scene
/// wants to react to (sound, logging)
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Event {
    Ate { score: u32 },
}

/// The whole game state, advanced in fixed ticks. There is no game
/// over, the snake wraps around the grid and may cross itself.
pub struct SnakeGame<R: Rng = ThreadRng> {
    grid: Grid,
    snake: Snake,
    food: Cell,
    dir: Dir,
    score: u32,
    control: Control,
    rng: R,
}

impl SnakeGame {
    pub fn new(grid: Grid, move_interval: Duration) -> Self {
        Self::with_rng(grid, move_interval, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn with_rng(grid: Grid, move_interval: Duration, mut rng: R) -> Self {
        let snake = Snake::new(Cell::new(grid.padding, grid.padding));
        let food = generate_food(&snake, &grid, &mut rng);
        Self {
            grid,
            snake,
            food,
            dir: Dir::Right,
            score: 0,
            control: Control::new(move_interval),
            rng,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Request a new heading, takes effect on the next tick
    pub fn steer(&mut self, requested: Dir) {
        self.dir = self.dir.turn(requested);
    }

    /// Feed the time since the last frame and run every tick that is due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Event> {
        self.control.register_elapsed(elapsed);
        let mut events = vec![];
        while self.control.can_update() {
            events.extend(self.tick());
        }
        events
    }

    pub fn tick(&mut self) -> Option<Event> {
        let mut event = None;

        // growth is settled before moving so the new tail
        // segment takes part in this tick's shift
        if self.snake.head() == self.food {
            self.food = generate_food(&self.snake, &self.grid, &mut self.rng);
            self.score += 1;
            self.snake.grow_behind(self.dir);
            log::debug!("ate, length {}", self.snake.len());
            event = Some(Event::Ate { score: self.score });
        }

        self.snake.advance(self.dir, &self.grid);
        log::debug!("tick {}: head at {}", self.control.ticks(), self.snake.head());

        event
    }
}

#[cfg(test)]
impl<R: Rng> SnakeGame<R> {
    fn place(&mut self, snake: Snake, food: Cell, dir: Dir) {
        self.snake = snake;
        self.food = food;
        self.dir = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Dir::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn game(seed: u64) -> SnakeGame<StdRng> {
        let grid = Grid::new(1280, 720, 20, 2).unwrap();
        SnakeGame::with_rng(grid, INTERVAL, StdRng::seed_from_u64(seed))
    }

    fn cells(game: &SnakeGame<StdRng>) -> Vec<Cell> {
        game.snake().cells().collect()
    }

    #[test]
    fn test_initial_state() {
        let game = game(1);
        assert_eq!(cells(&game), vec![Cell::new(2, 2)]);
        assert_eq!(game.dir(), Right);
        assert_eq!(game.score(), 0);
        assert!(!game.snake().contains(game.food()));
    }

    #[test]
    fn test_first_tick_moves_right() {
        let mut game = game(1);
        game.place(Snake::new(Cell::new(2, 2)), Cell::new(30, 30), Right);
        assert!(game.advance(INTERVAL).is_empty());
        assert_eq!(cells(&game), vec![Cell::new(3, 2)]);
    }

    #[test]
    fn test_no_tick_before_interval() {
        let mut game = game(1);
        game.place(Snake::new(Cell::new(2, 2)), Cell::new(30, 30), Right);
        game.advance(Duration::from_millis(60));
        assert_eq!(game.snake().head(), Cell::new(2, 2));
        game.advance(Duration::from_millis(60));
        assert_eq!(game.snake().head(), Cell::new(3, 2));
    }

    #[test]
    fn test_translation_without_food() {
        let mut game = game(3);
        let start = Snake::from_cells([Cell::new(20, 5), Cell::new(20, 6), Cell::new(20, 7)]);
        game.place(start, Cell::new(50, 30), Up);
        for n in 1..=10 {
            let before = cells(&game);
            game.tick();
            let after = cells(&game);
            assert_eq!(after.len(), 3);
            assert_eq!(&after[1..], &before[..2], "tick {}", n);
        }
        // wrapped through the top edge: 5 -> 2, then 33, 32, ...
        assert_eq!(game.snake().head(), Cell::new(20, 27));
    }

    #[test]
    fn test_eating_scenario() {
        let mut game = game(5);
        game.place(Snake::new(Cell::new(10, 10)), Cell::new(11, 10), Right);

        // arrive on the food
        assert_eq!(game.tick(), None);
        assert_eq!(cells(&game), vec![Cell::new(11, 10)]);
        assert_eq!(game.score(), 0);

        // the food is noticed and the snake grows behind its tail
        assert_eq!(game.tick(), Some(Event::Ate { score: 1 }));
        assert_eq!(game.score(), 1);
        assert_ne!(game.food(), Cell::new(11, 10));
        assert_eq!(cells(&game), vec![Cell::new(12, 10), Cell::new(11, 10)]);

        // and from then on keeps its new length
        game.tick();
        assert_eq!(cells(&game), vec![Cell::new(13, 10), Cell::new(12, 10)]);
    }

    #[test]
    fn test_score_increments_once_per_food() {
        let mut game = game(9);
        for expected in 1..=5 {
            let target = game.snake().head().step(game.dir());
            let target = game.grid().wrap(target);
            game.food = target;
            let len = game.snake().len();
            game.tick(); // onto the food
            assert_eq!(game.tick(), Some(Event::Ate { score: expected }));
            assert_eq!(game.snake().len(), len + 1);
            assert_eq!(game.score(), expected);
        }
    }

    #[test]
    fn test_steer_ignores_reversal() {
        let mut game = game(2);
        game.place(Snake::from_cells([Cell::new(10, 10), Cell::new(9, 10)]), Cell::new(40, 30), Right);
        game.steer(Left);
        game.tick();
        assert_eq!(game.snake().head(), Cell::new(11, 10));
        game.steer(Down);
        game.tick();
        assert_eq!(
            game.snake().cells().collect_vec(),
            vec![Cell::new(11, 11), Cell::new(11, 10)]
        );
    }

    #[test]
    fn test_food_spawns_off_snake() {
        let mut game = game(11);
        let long = Snake::from_cells((2..60).map(|x| Cell::new(x, 2)));
        game.place(long.clone(), long.head(), Left);
        for _ in 0..20 {
            game.food = game.snake().head();
            let before = game.snake().clone();
            game.tick();
            assert!(!before.contains(game.food()), "{}", game.food());
        }
    }

    #[test]
    fn test_smallest_grid_runs() {
        let grid = Grid::new(140, 140, 20, 2).unwrap();
        for seed in 0..20 {
            let mut game = SnakeGame::with_rng(grid, INTERVAL, StdRng::seed_from_u64(seed));
            let food = game.food();
            assert!((2..4).contains(&food.x) && (2..4).contains(&food.y), "{}", food);
            assert!(!game.snake().contains(food));
            for _ in 0..50 {
                game.tick();
                assert!(grid.interior_contains(game.snake().head()));
            }
        }
    }
}
