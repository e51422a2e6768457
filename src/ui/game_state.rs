//! Game state management for the dots and boxes GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::board::{Board, Move, Player};
use crate::engine::{AIEngine, EngineConfig, MoveResult};
use crate::error::Result;
use crate::rules::is_valid_move;

/// Smallest board offered in the menu
pub const MIN_GUI_BOXES: usize = 3;
/// Largest board offered in the menu
pub const MAX_GUI_BOXES: usize = 8;
pub const DEFAULT_GUI_BOXES: usize = 4;

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs engine
    PvE { human_first: bool },
    /// Player vs player (hotseat), `Human` is player 1
    PvP { show_suggestions: bool },
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_first: true }
    }
}

impl GameMode {
    /// Who draws the first line
    pub fn first_player(self) -> Player {
        match self {
            GameMode::PvE { human_first: false } => Player::Engine,
            _ => Player::Human,
        }
    }
}

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Player,
    pub last_move: Option<Move>,
    pub move_history: Vec<(Move, Player)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,

    /// Empty board of the current size, replay starts from here
    start: Board,
    config: EngineConfig,
}

impl GameState {
    pub fn new(mode: GameMode, boxes: usize, config: EngineConfig) -> Result<Self> {
        let start = Board::with_boxes(boxes)?;
        Ok(Self {
            board: start.clone(),
            mode,
            current_turn: mode.first_player(),
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
            start,
            config,
        })
    }

    /// Restart with the same mode and size
    pub fn reset(&mut self) {
        self.board = self.start.clone();
        self.current_turn = self.mode.first_player();
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Boxes per side
    pub fn boxes(&self) -> usize {
        self.start.box_rows()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Display name of a side in the current mode
    pub fn player_name(&self, player: Player) -> &'static str {
        match (self.mode, player) {
            (GameMode::PvE { .. }, Player::Human) => "You",
            (GameMode::PvE { .. }, Player::Engine) => "Engine",
            (GameMode::PvP { .. }, Player::Human) => "Player 1",
            (GameMode::PvP { .. }, Player::Engine) => "Player 2",
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Winner once every box is taken
    pub fn outcome(&self) -> Option<GameOutcome> {
        if !self.is_game_over() {
            return None;
        }
        let (engine, human) = (self.board.engine_score(), self.board.human_score());
        Some(match engine.cmp(&human) {
            std::cmp::Ordering::Greater => GameOutcome::Winner(Player::Engine),
            std::cmp::Ordering::Less => GameOutcome::Winner(Player::Human),
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        })
    }

    /// Check if it's a human's turn
    pub fn is_human_turn(&self) -> bool {
        !self.is_ai_turn()
    }

    /// Check if it's the engine's turn
    pub fn is_ai_turn(&self) -> bool {
        matches!(self.mode, GameMode::PvE { .. }) && self.current_turn == Player::Engine
    }

    /// Check if the engine is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to draw a line for the human side
    pub fn try_draw_line(&mut self, mv: Move) -> std::result::Result<(), String> {
        if self.is_game_over() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("Engine is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        if !is_valid_move(&self.board, mv) {
            return Err("Line already drawn".to_string());
        }

        self.execute_move(mv);
        Ok(())
    }

    /// Draw a line for whoever is to move. Closing a box keeps the turn.
    fn execute_move(&mut self, mv: Move) {
        let player = self.current_turn;
        let completed = self.board.apply(mv, player);

        self.move_history.push((mv, player));
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.move_timer.stop();
        debug!(?mv, ?player, completed, "line drawn");

        if completed == 0 {
            self.current_turn = player.opponent();
        }
        if !self.is_game_over() {
            self.move_timer.start();
        }
        self.message = None;
    }

    /// Board as seen by the side to move, for engine queries
    fn board_for_mover(&self) -> Board {
        let mut board = self.board.clone();
        if self.current_turn == Player::Human {
            board.swap_sides();
        }
        board
    }

    /// Start engine thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.is_game_over() {
            return;
        }

        let mut board = self.board.clone();
        let config = self.config;
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.get_move_with_stats(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if the engine has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("engine worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.move_timer.ai_thinking_time = Some(elapsed);
            let best_move = move_result.best_move;
            self.last_ai_result = Some(move_result);

            match best_move {
                Some(mv) if is_valid_move(&self.board, mv) => self.execute_move(mv),
                _ => self.message = Some("Engine could not find a move".to_string()),
            }
        }
    }

    /// Engine thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine for a hint for the side to move
    pub fn request_suggestion(&mut self) {
        if self.is_game_over() || self.is_ai_thinking() {
            return;
        }

        let mut board = self.board_for_mover();
        let mut engine = AIEngine::with_config(self.config);
        let result = engine.get_move_with_stats(&mut board);

        self.suggested_move = result.best_move;
        self.last_ai_result = Some(result);
    }

    /// Undo the last human move and every engine line drawn after it
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let mut keep = self.move_history.len();
        if let GameMode::PvE { .. } = self.mode {
            while keep > 0 && self.move_history[keep - 1].1 == Player::Engine {
                keep -= 1;
            }
        }
        let keep = keep.saturating_sub(1);

        // Reset and replay
        let moves: Vec<_> = self.move_history.drain(..keep).collect();
        self.move_history.clear();
        self.board = self.start.clone();
        self.current_turn = self.mode.first_player();
        self.last_move = None;
        self.suggested_move = None;

        for (mv, player) in moves {
            let completed = self.board.apply(mv, player);
            self.move_history.push((mv, player));
            self.last_move = Some(mv);
            self.current_turn = if completed > 0 { player } else { player.opponent() };
        }

        self.move_timer.start();
    }
}
