use crate::{AiLevel, Board, Color, Move, Side};

/// Scores a move by looking at the tiles around its position.
///
/// Each link on a neighbouring tile counts for one point if it belongs to
/// `color`. At [`AiLevel::Hard`], each link belonging to another color also
/// costs one point. The rotation of the move does not matter.
///
/// Moves outside the board score zero.
pub fn evaluate_move(board: &Board, mv: &Move, color: Color, level: AiLevel) -> i32 {
    let mut own = 0;
    let mut others = 0;
    for side in Side::ALL {
        let Ok(Some(neighbor)) = board.adjacent_tile(mv.position, side) else {
            continue;
        };
        for link in neighbor.links() {
            if link.color() == color {
                own += 1;
            } else {
                others += 1;
            }
        }
    }
    match level {
        AiLevel::Easy => own,
        AiLevel::Hard => own - others,
    }
}

/// All the moves sharing the best [score](evaluate_move), in the order they were given.
pub fn best_moves(board: &Board, moves: &[Move], color: Color, level: AiLevel) -> Vec<Move> {
    let mut top_choices: Vec<Move> = Vec::new();
    let mut top_score = i32::MIN;
    for mv in moves {
        let score = evaluate_move(board, mv, color, level);
        match score.cmp(&top_score) {
            std::cmp::Ordering::Less => {}
            std::cmp::Ordering::Equal => {
                top_choices.push(*mv);
            }
            std::cmp::Ordering::Greater => {
                top_choices = vec![*mv];
                top_score = score;
            }
        }
    }
    top_choices
}
