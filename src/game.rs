use crate::config::GameConfig;
use crate::food::Food;
use crate::snake::{AdvanceResult, Direction, Snake};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// What the player is currently looking at.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    NotStarted,
    Playing,
    GameOver,
}

/// One discrete player input, already stripped of the key codes the game
/// does not care about.
#[derive(Copy, Clone, Debug)]
pub enum Input {
    Turn(Direction),
    AnyKey,
}

/// The complete game state and its transition rules, independent of any
/// terminal concern. The orchestrator feeds it inputs and ticks and reads
/// it back for drawing.
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    food: Food,
    mode: Mode,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Fixed seed, for deterministic tests.
    #[cfg(test)]
    pub(crate) fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(&config, &mut rng);
        let food = Food::new(&config, &mut rng);
        GameState {
            config,
            snake,
            food,
            mode: Mode::NotStarted,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.snake.score()
    }

    /// Any key press starts a waiting game or restarts a finished one;
    /// direction keys additionally steer. Inputs take effect immediately,
    /// one event at a time.
    pub fn handle_input(&mut self, input: Input) {
        if self.mode == Mode::GameOver {
            self.snake.reset(&self.config, &mut self.rng);
        }
        self.mode = Mode::Playing;

        if let Input::Turn(direction) = input {
            self.snake.turn(direction);
        }
    }

    /// One fixed-rate game update. Does nothing outside of `Playing`.
    pub fn tick(&mut self) {
        if self.mode != Mode::Playing {
            return;
        }

        match self.snake.advance(&self.config) {
            AdvanceResult::Collided => {
                if self.config.restart_on_collision {
                    self.snake.reset(&self.config, &mut self.rng);
                } else {
                    self.mode = Mode::GameOver;
                }
            }
            AdvanceResult::Moved { new_head, .. } => {
                if new_head == self.food.position() {
                    self.snake.grow();
                    self.food.relocate(&self.config, &mut self.rng);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn place_food(&mut self, position: crate::Coords) {
        self.food.place(position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::Direction::*;

    fn started_game(config: GameConfig) -> GameState {
        let mut game = GameState::with_seed(config, 11);
        game.handle_input(Input::Turn(Right));
        game
    }

    // Steers the snake into its own body: feed it four times by placing
    // food directly in its path, then double back in a tight loop. The
    // food is parked on a far-away cell first so the loop cells stay clear.
    fn crash(game: &mut GameState) {
        let cell = game.config().cell_size;
        for _ in 0..4 {
            let (hx, hy) = game.snake().head();
            game.place_food((hx + cell, hy));
            game.tick();
        }
        assert_eq!(game.snake().len(), 4);
        assert_eq!(game.snake().target_length(), 5);
        game.place_food((0, 0));

        game.handle_input(Input::Turn(Down));
        game.tick();
        game.handle_input(Input::Turn(Left));
        game.tick();
        game.handle_input(Input::Turn(Up));
        game.tick();
    }

    #[test]
    fn the_first_key_press_starts_the_game() {
        let mut game = GameState::with_seed(GameConfig::default(), 3);
        assert_eq!(game.mode(), Mode::NotStarted);

        let head = game.snake().head();
        game.tick();
        assert_eq!(game.snake().head(), head);

        game.handle_input(Input::AnyKey);
        assert_eq!(game.mode(), Mode::Playing);
        game.tick();
        assert!(game.snake().head() != head);
    }

    #[test]
    fn eating_scores_grows_and_relocates_the_food() {
        let mut game = started_game(GameConfig::default());
        game.place_food((280, 260));

        game.tick();
        assert_eq!(game.snake().head(), (280, 260));
        assert_eq!(game.score(), 1);
        assert_eq!(game.snake().target_length(), 2);

        // The replacement cell is freshly sampled and may, with probability
        // 1/676, land on the very same spot; only alignment is guaranteed.
        let (fx, fy) = game.food().position();
        assert_eq!(fx % 20, 0);
        assert_eq!(fy % 20, 0);
        assert!(fx >= 0 && fx < 520 && fy >= 0 && fy < 520);

        game.tick();
        assert_eq!(game.snake().len(), 2);
    }

    #[test]
    fn missing_the_food_leaves_the_score_alone() {
        let mut game = started_game(GameConfig::default());
        game.place_food((0, 0));

        game.tick();
        assert_eq!(game.score(), 0);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.food().position(), (0, 0));
    }

    #[test]
    fn a_collision_latches_game_over_until_the_next_key() {
        let mut game = started_game(GameConfig::default());
        crash(&mut game);
        assert_eq!(game.mode(), Mode::GameOver);

        // Frozen: further ticks do not move the snake
        let head = game.snake().head();
        game.tick();
        game.tick();
        assert_eq!(game.snake().head(), head);
        assert_eq!(game.snake().len(), 5);

        game.handle_input(Input::AnyKey);
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), (260, 260));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn a_direction_key_restarts_and_steers_after_game_over() {
        let mut game = started_game(GameConfig::default());
        crash(&mut game);
        assert_eq!(game.mode(), Mode::GameOver);

        game.handle_input(Input::Turn(Down));
        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().direction(), Down);
    }

    #[test]
    fn restart_on_collision_resets_in_place_and_keeps_playing() {
        let config = GameConfig {
            restart_on_collision: true,
            ..GameConfig::default()
        };
        let mut game = started_game(config);
        crash(&mut game);

        assert_eq!(game.mode(), Mode::Playing);
        assert_eq!(game.snake().len(), 1);
        assert_eq!(game.snake().head(), (260, 260));
        assert_eq!(game.score(), 0);

        game.tick();
        assert!(game.snake().head() != (260, 260));
    }
}
