mod food;
mod game;
mod grid;
mod snake;
mod term;

pub type PixelInt = i32;
pub type Coords = (PixelInt, PixelInt);

fn main() {
    let mut game = game::SnakeGame::new();
    game.initialize();

    // The game loop takes care of exiting cleanly on CTRL+C
    game.run();
}
