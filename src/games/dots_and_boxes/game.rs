//! Dots and Boxes engine implementation.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Coordinate, Direction, GameConfig, GameError, Player, PlayerMap, Result};
use crate::grid::{Board, EdgeSet};
use crate::rules::DotsAndBoxes;

/// What a single `play_edge` call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The edge was new. `false` means it was already drawn and nothing changed.
    pub drawn: bool,
    /// Player who made the move.
    pub mover: Player,
    /// Boxes completed by this move, in the order they were closed.
    pub completed: SmallVec<[Coordinate; 2]>,
    /// Player to move next, or `None` if the move ended the game.
    pub next_player: Option<Player>,
}

impl MoveOutcome {
    fn rejected(mover: Player, next_player: Option<Player>) -> Self {
        Self {
            drawn: false,
            mover,
            completed: SmallVec::new(),
            next_player,
        }
    }

    /// The mover completed at least one box and plays again.
    #[must_use]
    pub fn keeps_turn(&self) -> bool {
        self.drawn && !self.completed.is_empty()
    }
}

/// State of a game in progress.
#[derive(Clone, Debug)]
struct ActiveGame {
    board: Board,
    current_player: Player,
}

/// Dots and Boxes rules engine.
///
/// Created uninitialized; call `init` (or `init_with_config`) before
/// anything else. See `DotsAndBoxes` for the playing surface.
///
/// ## Example
///
/// ```
/// use dots_and_boxes::{Coordinate, Direction, DotsAndBoxes, GameEngine, Player};
///
/// let mut game = GameEngine::new();
/// game.init(2).unwrap();
///
/// assert!(game.draw_edge(Coordinate::new(0, 0), Direction::Bottom).unwrap());
/// assert_eq!(game.current_player().unwrap(), Some(Player::Two));
///
/// // Already drawn: rejected, still Player Two's turn.
/// assert!(!game.draw_edge(Coordinate::new(0, 1), Direction::Top).unwrap());
/// assert_eq!(game.current_player().unwrap(), Some(Player::Two));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameEngine {
    game: Option<ActiveGame>,
}

impl GameEngine {
    /// Create an uninitialized engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and initialize it from `config`.
    pub fn with_config(config: &GameConfig) -> Result<Self> {
        let mut engine = Self::new();
        engine.init_with_config(config)?;
        Ok(engine)
    }

    /// Start a new game from `config`, discarding any previous one.
    pub fn init_with_config(&mut self, config: &GameConfig) -> Result<()> {
        let board = Board::new(config.size)?;

        debug!(
            size = config.size,
            first_player = %config.first_player,
            "initialized grid"
        );

        self.game = Some(ActiveGame {
            board,
            current_player: config.first_player,
        });
        Ok(())
    }

    /// Check whether `init` has succeeded.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.game.is_some()
    }

    fn active(&self) -> Result<&ActiveGame> {
        self.game.as_ref().ok_or(GameError::NotInitialized)
    }

    fn active_mut(&mut self) -> Result<&mut ActiveGame> {
        self.game.as_mut().ok_or(GameError::NotInitialized)
    }

    /// Read-only view of the whole board.
    pub fn board(&self) -> Result<&Board> {
        Ok(&self.active()?.board)
    }

    /// Draw an edge and report what the move did.
    ///
    /// Same rules as `DotsAndBoxes::draw_edge`:
    /// 1. The box at `coord` must exist.
    /// 2. An edge that is already drawn is rejected without any change.
    /// 3. The edge is drawn on the neighbouring box (as `dir.opposite()`),
    ///    if there is one, and on the box at `coord`.
    /// 4. The turn passes only if neither box was completed.
    pub fn play_edge(&mut self, coord: Coordinate, dir: Direction) -> Result<MoveOutcome> {
        let game = self.active_mut()?;
        let mover = game.current_player;

        if game.board.fetch(coord)?.is_drawn_edge_at(dir) {
            trace!(%coord, %dir, player = %mover, "edge already drawn");
            let next_player = (!game.board.is_full()).then_some(mover);
            return Ok(MoveOutcome::rejected(mover, next_player));
        }

        let mut completed: SmallVec<[Coordinate; 2]> = SmallVec::new();

        // Boundary edges have no neighbour.
        if let Some(neighbor) = coord.neighbor(dir) {
            if let Some(neighbor_box) = game.board.get_mut(neighbor) {
                if neighbor_box.draw_edge(dir.opposite(), mover) {
                    completed.push(neighbor);
                }
            }
        }

        if game.board.fetch_mut(coord)?.draw_edge(dir, mover) {
            completed.push(coord);
        }

        trace!(%coord, %dir, player = %mover, "drew edge");
        for c in &completed {
            debug!(coord = %c, owner = %mover, "box completed");
        }

        if completed.is_empty() {
            game.current_player = mover.opponent();
        }

        let next_player = if game.board.is_full() {
            debug!(scores = ?game.board.owned_counts(), "game over");
            None
        } else {
            Some(game.current_player)
        };

        Ok(MoveOutcome {
            drawn: true,
            mover,
            completed,
            next_player,
        })
    }

    /// Draw an edge whose direction came from untyped input.
    ///
    /// A missing direction is rejected before any other check, whether or
    /// not the engine is initialized.
    pub fn draw_edge_at(&mut self, coord: Coordinate, dir: Option<Direction>) -> Result<bool> {
        let dir = dir.ok_or(GameError::MissingDirection)?;
        self.draw_edge(coord, dir)
    }

    /// Number of boxes on the board.
    pub fn box_count(&self) -> Result<usize> {
        Ok(self.active()?.board.box_count())
    }

    /// Number of distinct edges on the board.
    pub fn edge_count(&self) -> Result<usize> {
        Ok(self.active()?.board.edge_count())
    }

    /// Number of distinct edges drawn so far.
    pub fn drawn_edge_total(&self) -> Result<usize> {
        Ok(self.active()?.board.drawn_edge_total())
    }
}

impl DotsAndBoxes for GameEngine {
    fn init(&mut self, size: usize) -> Result<()> {
        self.init_with_config(&GameConfig::new(size))
    }

    fn draw_edge(&mut self, coord: Coordinate, dir: Direction) -> Result<bool> {
        self.play_edge(coord, dir).map(|outcome| outcome.drawn)
    }

    fn current_player(&self) -> Result<Option<Player>> {
        let game = self.active()?;
        if game.board.is_full() {
            return Ok(None);
        }
        Ok(Some(game.current_player))
    }

    fn drawn_edges_at(&self, coord: Coordinate) -> Result<EdgeSet> {
        Ok(self.active()?.board.fetch(coord)?.drawn_edges())
    }

    fn owner_at(&self, coord: Coordinate) -> Result<Option<Player>> {
        Ok(self.active()?.board.fetch(coord)?.owner())
    }

    fn scores(&self) -> Result<PlayerMap<usize>> {
        Ok(self.active()?.board.owned_counts())
    }

    fn size(&self) -> Result<usize> {
        Ok(self.active()?.board.size())
    }
}
