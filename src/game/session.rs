//! Game session and main loop
//!
//! A session owns the generated grid and the avatar on it. The loop polls one
//! token per iteration, applies it if it is a legal move, and always renders.

use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use crate::error::GameError;
use crate::world::{generate_cave, Grid, Position};
use super::avatar::{can_move, Avatar};
use super::io::{InputSource, RenderSink, StopSignal};
use super::{Direction, GameConfig};

/// What a single loop iteration did with its input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No token was available
    Idle,
    /// The token was not a direction
    Ignored(char),
    /// The move would leave the grid or hit rock
    Blocked(Direction),
    /// The avatar moved
    Moved(Direction),
}

/// Totals reported when the loop stops
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub moves: u64,
}

/// One play session: a single cave and a single avatar
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    avatar: Avatar,
    seed: Option<u64>,
    frame_time: Duration,
}

impl Session {
    /// Generate a cave with `rng` and drop the avatar in its centre
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let grid = generate_cave(config, rng);
        let start = grid.center();
        let mut session = Self::from_grid(grid, start);
        session.frame_time = Duration::from_millis(config.frame_time_ms);
        session
    }

    /// Start a session from the config's seed, drawing a fresh one if none is
    /// set. The seed is logged so the cave can be regenerated.
    pub fn start(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        log::info!("Generating cave with seed {}", seed);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut session = Self::new(config, &mut rng);
        session.seed = Some(seed);
        session
    }

    /// Wrap an existing grid, placing the avatar at `start`
    pub fn from_grid(mut grid: Grid, start: Position) -> Self {
        let avatar = Avatar::place(&mut grid, start);
        Self {
            grid,
            avatar,
            seed: None,
            frame_time: Duration::ZERO,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    /// Seed the cave was generated from, if it came from [`Session::start`]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Apply one input token
    pub fn step(&mut self, token: Option<char>) -> MoveOutcome {
        let Some(token) = token else {
            return MoveOutcome::Idle;
        };

        let Some(direction) = Direction::from_token(token) else {
            log::debug!("Ignoring non-movement token {:?}", token);
            return MoveOutcome::Ignored(token);
        };

        if !can_move(direction, &self.avatar, &self.grid) {
            log::debug!("Move {:?} from {:?} blocked", direction, self.avatar.position());
            return MoveOutcome::Blocked(direction);
        }

        self.avatar.apply_move(direction, &mut self.grid);
        MoveOutcome::Moved(direction)
    }

    /// Run the game loop until `stop` is raised
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        stop: &StopSignal,
    ) -> Result<RunSummary, GameError> {
        let mut summary = RunSummary::default();
        log::info!("Entering game loop at {:?}", self.avatar.position());

        while !stop.is_stopped() {
            let frame_start = Instant::now();

            let token = take_input(input)?;
            if let MoveOutcome::Moved(_) = self.step(token) {
                summary.moves += 1;
            }
            sink.render(&self.grid)?;
            summary.iterations += 1;

            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_time {
                std::thread::sleep(self.frame_time - elapsed);
            }
        }

        log::info!(
            "Game loop stopped after {} iterations ({} moves)",
            summary.iterations,
            summary.moves
        );
        Ok(summary)
    }
}

/// Read one token if one is ready, without waiting
fn take_input(input: &mut impl InputSource) -> Result<Option<char>, GameError> {
    if input.has_input()? {
        input.next_token()
    } else {
        Ok(None)
    }
}
