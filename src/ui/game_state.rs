//! Game state management for the Pentago GUI

use crate::engine::EngineConfig;
use crate::rules::find_winning_line;
use crate::{AIEngine, Board, Marble, Move, MoveResult, Outcome, Rotation};
use rand::Rng;
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human_color: Marble },
    /// Player vs Player (hotseat)
    PvP,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human_color: Marble::Black }
    }
}

impl GameMode {
    /// PvE with the human's color picked at random
    pub fn random_pve(rng: &mut impl Rng) -> Self {
        let human_color = if rng.gen_bool(0.5) { Marble::Black } else { Marble::White };
        GameMode::PvE { human_color }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    pub winning_line: Option<[(u8, u8); 5]>,
}

impl GameResult {
    fn from_board(board: &Board, outcome: Outcome) -> Self {
        let winning_line = match outcome {
            Outcome::Win(winner) => find_winning_line(board)
                .filter(|&(owner, _)| owner == winner)
                .map(|(_, line)| line),
            _ => None,
        };
        Self { outcome, winning_line }
    }
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub mode: GameMode,
    pub current_turn: Marble,
    pub game_over: Option<GameResult>,
    /// Placement staged by the human, waiting for a rotation
    pub pending: Option<(usize, usize)>,
    pub last_move: Option<Move>,
    pub move_history: Vec<(Move, Marble)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,

    engine_config: EngineConfig,
}

impl GameState {
    /// Black always moves first
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            mode,
            current_turn: Marble::Black,
            game_over: None,
            pending: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            engine_config: EngineConfig::default(),
        }
    }

    /// New game in the same mode
    pub fn reset(&mut self) {
        *self = Self {
            engine_config: self.engine_config,
            ..Self::new(self.mode)
        };
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn == human_color,
            GameMode::PvP => true,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human_color } => self.current_turn != human_color,
            GameMode::PvP => false,
        }
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    fn check_human_can_move(&self) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        Ok(())
    }

    /// Stage a placement. Clicking the staged cell again cancels it.
    pub fn try_place(&mut self, quadrant: usize, cell: usize) -> Result<(), String> {
        self.check_human_can_move()?;

        match self.pending {
            Some(staged) if staged == (quadrant, cell) => {
                self.pending = None;
                return Ok(());
            }
            Some(_) => return Err("Choose a rotation first (Esc to cancel)".to_string()),
            None => {}
        }

        self.board.check_placement(quadrant, cell).map_err(|e| e.to_string())?;
        self.pending = Some((quadrant, cell));
        self.message = None;
        Ok(())
    }

    /// Complete the staged placement with a rotation
    pub fn try_rotate(&mut self, quadrant: usize, rotation: Rotation) -> Result<(), String> {
        self.check_human_can_move()?;

        let (place_quadrant, cell) = self.pending.ok_or_else(|| "Place a marble first".to_string())?;
        let mv = Move::new(place_quadrant as u8, cell as u8, quadrant as u8, rotation);
        self.execute_move(mv)
    }

    /// Drop the staged placement
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, mv: Move) -> Result<(), String> {
        let color = self.current_turn;
        self.board.apply_move(mv, color).map_err(|e| e.to_string())?;

        // Record move
        self.move_history.push((mv, color));
        self.last_move = Some(mv);
        self.pending = None;

        // Stop timer
        self.move_timer.stop();

        let outcome = self.board.outcome();
        if outcome.is_terminal() {
            self.game_over = Some(GameResult::from_board(&self.board, outcome));
            return Ok(());
        }

        // Switch turn
        self.current_turn = color.opponent();
        self.move_timer.start();

        // Clear message
        self.message = None;
        Ok(())
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board;
        let color = self.current_turn;
        let config = self.engine_config;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config);
            let result = engine.choose_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, start_time } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result.clone());
            self.move_timer.set_ai_time(elapsed);

            match move_result.best_move {
                Some(mv) => {
                    if let Err(msg) = self.execute_move(mv) {
                        self.message = Some(format!("AI move rejected: {}", msg));
                    }
                }
                None => self.message = Some("AI could not find a move".to_string()),
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo last move. In PvE this takes back the human's last move and the
    /// AI reply after it; with no human move yet there is nothing to undo.
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let moves_to_keep = match self.mode {
            GameMode::PvE { human_color } => {
                match self.move_history.iter().rposition(|&(_, color)| color == human_color) {
                    Some(index) => index,
                    None => return,
                }
            }
            GameMode::PvP => self.move_history.len() - 1,
        };

        // Simple undo: reset and replay
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();
        self.move_history.clear();

        self.board = Board::new();
        self.current_turn = Marble::Black;
        self.game_over = None;
        self.pending = None;
        self.last_move = None;

        for (mv, color) in moves {
            // History only holds moves that were legal when played
            if self.board.apply_move(mv, color).is_err() {
                break;
            }
            self.move_history.push((mv, color));
            self.last_move = Some(mv);
            self.current_turn = color.opponent();
        }

        self.move_timer.start();
    }
}
