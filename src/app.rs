use std::process::exit;
use std::thread::sleep;
use std::time::{Duration, Instant};

use crate::config::GameConfig;
use crate::game::{GameState, Input, Mode};
use crate::snake::Direction::*;
use crate::term::TermManager;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Wires the game state to the terminal: one fixed-rate loop of
/// poll input, update, redraw.
pub struct SnakeGame {
    state: GameState,
    term: TermManager,
    ticker: Ticker,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config);
        let term = TermManager::new(state.config());
        let ticker = Ticker::new(Duration::from_millis(
            1000 / u64::from(state.config().ticks_per_second),
        ));

        SnakeGame { state, term, ticker }
    }

    pub fn run(&mut self) -> ! {
        self.term.setup();

        loop {
            for key_ev in self.term.read_key_events_queue() {
                if is_ctrl_c(&key_ev) {
                    self.clean_exit();
                }
                self.state.handle_input(map_key(&key_ev));
            }

            self.state.tick();
            self.render();
            self.ticker.wait();
        }
    }

    fn render(&mut self) {
        self.term.draw_playfield();

        let snake = self.state.snake();
        for &segment in snake.segments() {
            self.term.draw_snake_segment(segment);
        }
        self.term.draw_snake_head(snake.head(), snake.direction());
        self.term.draw_food(self.state.food().position());
        self.term.draw_score(self.state.score());

        match self.state.mode() {
            Mode::NotStarted => self.term.draw_bottom_text("Press any key to play"),
            Mode::GameOver => self.term.draw_center_text("GAME OVER"),
            Mode::Playing => {}
        }

        self.term.present();
    }

    fn clean_exit(&mut self) -> ! {
        self.term.restore();
        exit(0);
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

/// Arrow keys and WASD steer; any other key is the generic
/// start-or-restart signal.
fn map_key(ev: &KeyEvent) -> Input {
    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Input::Turn(Up),
        KeyCode::Char('a') | KeyCode::Left => Input::Turn(Left),
        KeyCode::Char('s') | KeyCode::Down => Input::Turn(Down),
        KeyCode::Char('d') | KeyCode::Right => Input::Turn(Right),
        _ => Input::AnyKey,
    }
}

/// Paces the loop: blocks until one tick interval has elapsed since the
/// previous tick boundary.
struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            next_due: Instant::now() + interval,
        }
    }

    fn wait(&mut self) {
        let now = Instant::now();
        if let Some(remaining) = self.next_due.checked_duration_since(now) {
            sleep(remaining);
        }

        // If a frame overran its slot, restart the cadence from now
        self.next_due = (self.next_due + self.interval).max(Instant::now());
    }
}
