use std::io::{stdout, Stdout, Write};
use std::process::exit;
use std::time::Duration;

use crate::config::GameConfig;
use crate::grid;
use crate::snake::Direction;
use crate::Coords;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue};

pub type TermInt = u16;

const DARK_CHECKER: Color = Color::Rgb { r: 158, g: 47, b: 245 };
const LIGHT_CHECKER: Color = Color::Rgb { r: 144, g: 47, b: 216 };
const SNAKE_COLOR: Color = Color::Rgb { r: 7, g: 29, b: 23 };
const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 255, b: 0 };
const TEXT_COLOR: Color = Color::White;

const SNAKE_CHAR: char = '█';
const FOOD_CHAR: char = 'O';

// Terminal rows above the playfield, used for the score line.
const TOP_MARGIN: TermInt = 1;

/// Owns the terminal, from the alternate-screen setup to the queued draw
/// calls that make up one frame. One game cell maps to one terminal
/// character cell and the whole frame is repainted every tick.
pub struct TermManager {
    stdout: Stdout,
    grid_width: TermInt,
    grid_height: TermInt,
    cell_size: i32,
}

impl TermManager {
    pub fn new(config: &GameConfig) -> Self {
        let (term_width, term_height) = terminal::size().expect("Error reading terminal size.");
        let grid_width = config.grid_width() as TermInt;
        let grid_height = config.grid_height() as TermInt;

        if term_width < grid_width || term_height < grid_height + TOP_MARGIN {
            eprintln!(
                "Terminal too small: the playfield needs {} columns and {} rows.",
                grid_width,
                grid_height + TOP_MARGIN
            );
            exit(1);
        }

        TermManager {
            stdout: stdout(),
            grid_width,
            grid_height,
            cell_size: config.cell_size,
        }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen, SetTitle("Snake"))
            .expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        execute!(self.stdout, ResetColor, cursor::Show, cursor::EnableBlinking)
            .expect("Error restoring cursor.");
        terminal::disable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, LeaveAlternateScreen).expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Repaints the checkerboard background over the whole playfield.
    pub fn draw_playfield(&mut self) {
        for row in 0..self.grid_height {
            queue!(self.stdout, cursor::MoveTo(0, row + TOP_MARGIN)).unwrap();
            for col in 0..self.grid_width {
                queue!(
                    self.stdout,
                    SetBackgroundColor(checker_shade(col, row)),
                    Print(' ')
                )
                .unwrap();
            }
        }
    }

    pub fn draw_snake_segment(&mut self, pos: Coords) {
        self.draw_cell(pos, SNAKE_CHAR, SNAKE_COLOR);
    }

    pub fn draw_snake_head(&mut self, pos: Coords, direction: Direction) {
        let glyph = match direction {
            Direction::Up => '^',
            Direction::Down => 'v',
            Direction::Left => '<',
            Direction::Right => '>',
        };
        self.draw_cell(pos, glyph, SNAKE_COLOR);
    }

    pub fn draw_food(&mut self, pos: Coords) {
        self.draw_cell(pos, FOOD_CHAR, FOOD_COLOR);
    }

    pub fn draw_score(&mut self, score: u32) {
        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            ResetColor,
            SetForegroundColor(TEXT_COLOR),
            Print(format!("Score: {}", score))
        )
        .unwrap();
    }

    /// Centers a line of text over the middle of the playfield.
    pub fn draw_center_text(&mut self, text: &str) {
        self.draw_text_row(text, TOP_MARGIN + self.grid_height / 2);
    }

    /// Centers a line of text on the bottom row of the playfield.
    pub fn draw_bottom_text(&mut self, text: &str) {
        self.draw_text_row(text, TOP_MARGIN + self.grid_height - 1);
    }

    pub fn present(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_cell(&mut self, pos: Coords, ch: char, color: Color) {
        let (col, row) = grid::to_cell(pos, self.cell_size);
        queue!(
            self.stdout,
            cursor::MoveTo(col as TermInt, row as TermInt + TOP_MARGIN),
            SetBackgroundColor(checker_shade(col as TermInt, row as TermInt)),
            SetForegroundColor(color),
            Print(ch)
        )
        .unwrap();
    }

    fn draw_text_row(&mut self, text: &str, row: TermInt) {
        let col = self.grid_width.saturating_sub(text.len() as TermInt) / 2;
        queue!(
            self.stdout,
            cursor::MoveTo(col, row),
            ResetColor,
            SetForegroundColor(TEXT_COLOR),
            Print(text)
        )
        .unwrap();
    }
}

fn checker_shade(col: TermInt, row: TermInt) -> Color {
    if (col + row) % 2 == 0 {
        DARK_CHECKER
    } else {
        LIGHT_CHECKER
    }
}
