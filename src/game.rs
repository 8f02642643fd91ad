use std::{process::exit, thread::sleep, time::{Duration, Instant}};

use crate::Coords;
use crate::food::Food;
use crate::grid::Grid;
use crate::snake::{Snake, Direction::{self, *}};
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use rand::Rng;

const SCREEN_WIDTH: i32 = 800;
const SCREEN_HEIGHT: i32 = 600;
const CELL_SIZE: i32 = 20;
const TICK_RATE_HZ: u64 = 10;

const FOOD_COLOR: Color = Color::Red;
const SNAKE_COLOR: Color = Color::Green;

pub struct SnakeGame {
    grid: Grid,
    term: TermManager,
}

impl SnakeGame {
    pub fn new() -> Self {
        SnakeGame {
            grid: Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, CELL_SIZE),
            term: TermManager::new(),
        }
    }

    pub fn initialize(&mut self) {
        let (term_w, term_h) = self.term.get_terminal_size();
        let (cols, rows) = (self.grid.columns() as u16, self.grid.rows() as u16);

        if term_w < cols || term_h < rows {
            eprintln!("Terminal too small: the play field needs {}x{} cells.", cols, rows);
            exit(1);
        }

        self.term.setup();
    }

    pub fn run(&mut self) {
        let grid = self.grid;
        let mut rng = rand::thread_rng();
        let mut snake = Snake::new(&grid);
        let mut food = Food::new(&grid, &mut rng);

        let tick = Duration::from_millis(1000 / TICK_RATE_HZ);
        let mut next_tick = Instant::now() + tick;

        loop {
            let events = self.term.read_key_events_queue();
            if events.iter().any(is_ctrl_c) {
                self.clean_exit();
            }

            let requested = direction_from_events(&events);
            step_world(&mut snake, &mut food, &grid, &mut rng, requested);

            self.render(&snake, &food);

            // Fixed-rate pacing: deadlines advance by one tick interval,
            // measured from the previous deadline rather than from "now".
            let now = Instant::now();
            if next_tick > now {
                sleep(next_tick - now);
            }
            next_tick += tick;
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn render(&mut self, snake: &Snake, food: &Food) {
        self.term.clear();
        self.draw_cell(food.position(), FOOD_COLOR);

        for pos in snake.segments() {
            self.draw_cell(*pos, SNAKE_COLOR);
        }

        self.term.flush();
    }

    fn draw_cell(&mut self, pos: Coords, color: Color) {
        let cell = self.grid.cell_size();
        self.term.draw_cell((pos.0 / cell) as u16, (pos.1 / cell) as u16, color);
    }

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }
}

/// One game tick, minus input polling and rendering: advance the snake,
/// feed it if its head landed on the food, then undo the tick's move with
/// a full reset if it left the snake overlapping itself.
pub fn step_world(
    snake: &mut Snake,
    food: &mut Food,
    grid: &Grid,
    rng: &mut impl Rng,
    requested: Option<Direction>,
) {
    if let Some(dir) = requested {
        snake.request_direction(dir);
    }

    snake.advance(grid);

    if snake.head_position() == food.position() {
        snake.grow();
        food.relocate(grid, rng);
    }

    if snake.has_self_collision() {
        snake.reset(grid);
    }
}

/// Collapses a tick's worth of key events into at most one direction.
/// When several directions were pressed, the first of Up, Down, Left,
/// Right wins; that ordering is part of the input contract.
fn direction_from_events(events: &[KeyEvent]) -> Option<Direction> {
    let (mut up, mut down, mut left, mut right) = (false, false, false, false);

    for ev in events {
        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => up = true,
            KeyCode::Char('s') | KeyCode::Down => down = true,
            KeyCode::Char('a') | KeyCode::Left => left = true,
            KeyCode::Char('d') | KeyCode::Right => right = true,
            _ => {}
        }
    }

    if up {
        Some(Up)
    } else if down {
        Some(Down)
    } else if left {
        Some(Left)
    } else if right {
        Some(Right)
    } else {
        None
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::empty() }
    }

    #[test]
    fn single_key_maps_to_its_direction() {
        assert_eq!(direction_from_events(&[key(KeyCode::Up)]), Some(Up));
        assert_eq!(direction_from_events(&[key(KeyCode::Char('s'))]), Some(Down));
        assert_eq!(direction_from_events(&[key(KeyCode::Left)]), Some(Left));
        assert_eq!(direction_from_events(&[key(KeyCode::Char('d'))]), Some(Right));
    }

    #[test]
    fn no_direction_without_movement_keys() {
        assert_eq!(direction_from_events(&[]), None);
        assert_eq!(direction_from_events(&[key(KeyCode::Esc)]), None);
    }

    #[test]
    fn simultaneous_keys_resolve_by_priority() {
        // Up beats everything, Down beats Left and Right, Left beats Right,
        // regardless of event order.
        assert_eq!(
            direction_from_events(&[key(KeyCode::Right), key(KeyCode::Up)]),
            Some(Up)
        );
        assert_eq!(
            direction_from_events(&[key(KeyCode::Left), key(KeyCode::Down)]),
            Some(Down)
        );
        assert_eq!(
            direction_from_events(&[key(KeyCode::Right), key(KeyCode::Left)]),
            Some(Left)
        );
    }

    #[test]
    fn eating_food_grows_the_snake_one_tick_later() {
        let grid = Grid::new(800, 600, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut snake = Snake::new(&grid);
        let mut food = Food::at((420, 300));

        // The head lands exactly on the food; the snake grows and the food
        // moves somewhere else on the grid.
        step_world(&mut snake, &mut food, &grid, &mut rng, None);
        assert_eq!(snake.head_position(), (420, 300));
        assert_eq!(snake.segments().len(), 1);
        assert!(grid.in_bounds(food.position()));

        // The extra segment materializes on the following tick.
        step_world(&mut snake, &mut food, &grid, &mut rng, None);
        assert_eq!(snake.segments(), &[(440, 300), (420, 300)]);
    }

    #[test]
    fn hitting_the_right_wall_resets_to_the_start() {
        let grid = Grid::new(800, 600, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut snake = Snake::new(&grid);
        let mut food = Food::at((0, 0));

        // From (400, 300), 19 ticks reach (780, 300); the 20th computes a
        // head at x = 800, out of bounds, and resets in place.
        for _ in 0..20 {
            step_world(&mut snake, &mut food, &grid, &mut rng, None);
        }
        assert_eq!(snake.segments(), &[(400, 300)]);
    }

    #[test]
    fn self_collision_resets_on_the_overlapping_tick() {
        let grid = Grid::new(800, 600, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut snake = Snake::new(&grid);

        // Feed the snake four times in a row by pinning the food right in
        // front of it, reaching length 5.
        for x in &[420, 440, 460, 480] {
            let mut food = Food::at((*x, 300));
            step_world(&mut snake, &mut food, &grid, &mut rng, None);
        }

        // A tight clockwise turn folds the head back onto the body.
        let mut food = Food::at((0, 0));
        step_world(&mut snake, &mut food, &grid, &mut rng, Some(Down));
        step_world(&mut snake, &mut food, &grid, &mut rng, Some(Left));
        assert!(snake.segments().len() == 5);

        step_world(&mut snake, &mut food, &grid, &mut rng, Some(Up));
        assert_eq!(snake.segments(), &[(400, 300)]);
    }
}
