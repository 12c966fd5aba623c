mod app;
mod config;
mod food;
mod game;
mod grid;
mod snake;
mod term;

// Playfield positions in pixel units; both components are always multiples
// of the cell size and wrap at the screen edges.
pub type Coords = (i32, i32);

fn main() {
    let mut game = app::SnakeGame::new(config::GameConfig::default());

    // The run loop takes care of exiting cleanly on CTRL+C
    game.run();
}
