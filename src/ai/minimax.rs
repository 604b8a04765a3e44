use crate::game::{Board, GameState, Player, COLS, ROWS};

use super::agent::Agent;

/// Per-window contribution of a completed line.
pub const WINDOW_WIN: i32 = 1000;
/// Per-window contribution of three pieces with the fourth cell open.
pub const WINDOW_THREE: i32 = 100;
/// Per-window contribution of two pieces with the other two cells open.
pub const WINDOW_TWO: i32 = 20;

/// Trait for evaluating a board position from the AI side's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, ai: Player) -> i32;
}

/// Static evaluator that scores every 4-cell window on the board once.
///
/// Unlike [`Board::check_win`], which examines the overlapping windows
/// around one just-placed piece, this enumerates each canonical window
/// exactly once from its origin. The two scans answer different questions
/// and stay separate.
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(ai_count: u32, opp_count: u32) -> i32 {
        if ai_count > 0 && opp_count > 0 {
            // Mixed windows can never complete for either side
            return 0;
        }
        match (ai_count, opp_count) {
            (4, _) => WINDOW_WIN,
            (3, _) => WINDOW_THREE,
            (2, _) => WINDOW_TWO,
            (_, 4) => -WINDOW_WIN,
            (_, 3) => -WINDOW_THREE,
            (_, 2) => -WINDOW_TWO,
            _ => ai_count as i32 - opp_count as i32,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, ai: Player) -> i32 {
        let ai_cell = ai.to_cell();
        let opp_cell = ai.other().to_cell();
        let mut score = 0;

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                let mut ai_count = 0;
                let mut opp_count = 0;
                for i in 0..4 {
                    match board.get(row, col + i) {
                        c if c == ai_cell => ai_count += 1,
                        c if c == opp_cell => opp_count += 1,
                        _ => {}
                    }
                }
                score += Self::score_window(ai_count, opp_count);
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..ROWS - 3 {
                let mut ai_count = 0;
                let mut opp_count = 0;
                for i in 0..4 {
                    match board.get(row + i, col) {
                        c if c == ai_cell => ai_count += 1,
                        c if c == opp_cell => opp_count += 1,
                        _ => {}
                    }
                }
                score += Self::score_window(ai_count, opp_count);
            }
        }

        // Diagonal (top-left to bottom-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                let mut ai_count = 0;
                let mut opp_count = 0;
                for i in 0..4 {
                    match board.get(row + i, col + i) {
                        c if c == ai_cell => ai_count += 1,
                        c if c == opp_cell => opp_count += 1,
                        _ => {}
                    }
                }
                score += Self::score_window(ai_count, opp_count);
            }
        }

        // Diagonal (bottom-left to top-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                let mut ai_count = 0;
                let mut opp_count = 0;
                for i in 0..4 {
                    match board.get(row - i, col + i) {
                        c if c == ai_cell => ai_count += 1,
                        c if c == opp_cell => opp_count += 1,
                        _ => {}
                    }
                }
                score += Self::score_window(ai_count, opp_count);
            }
        }

        score
    }
}

/// Minimax agent with alpha-beta pruning.
///
/// The search is deterministic: columns are tried in ascending order and
/// ties keep the first best, so identical positions always produce the
/// same move.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    /// `depth` is the number of plies searched below each candidate move,
    /// so the total lookahead is depth + 1 plies. Higher is stronger and
    /// slower; the cost grows exponentially with a branching factor of 7.
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    /// Pick the best column for `ai` on `board`.
    ///
    /// Panics if every column is full; callers must not ask for a move on
    /// a board with no legal moves.
    pub fn choose_move(&self, board: &Board, ai: Player) -> usize {
        let mut best_col: Option<usize> = None;
        let mut best_score = i32::MIN;

        for col in 0..COLS {
            if board.is_column_full(col) {
                continue;
            }
            let mut child = *board;
            child
                .drop_piece(col, ai.to_cell())
                .expect("column was checked to have room");
            // After our own move it is the opponent's turn
            let score = self.minimax(&child, self.depth, false, i32::MIN, i32::MAX, ai);
            if best_col.is_none() || score > best_score {
                best_score = score;
                best_col = Some(col);
            }
        }

        best_col.expect("choose_move called on a full board")
    }

    fn minimax(
        &self,
        board: &Board,
        depth: usize,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        ai: Player,
    ) -> i32 {
        if depth == 0 || board.is_terminal() {
            return self.heuristic.evaluate(board, ai);
        }

        if maximizing {
            let mut best = i32::MIN;
            for col in 0..COLS {
                if board.is_column_full(col) {
                    continue;
                }
                let mut child = *board;
                child
                    .drop_piece(col, ai.to_cell())
                    .expect("column was checked to have room");
                let score = self.minimax(&child, depth - 1, false, alpha, beta, ai);
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for col in 0..COLS {
                if board.is_column_full(col) {
                    continue;
                }
                let mut child = *board;
                child
                    .drop_piece(col, ai.other().to_cell())
                    .expect("column was checked to have room");
                let score = self.minimax(&child, depth - 1, true, alpha, beta, ai);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        self.choose_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
