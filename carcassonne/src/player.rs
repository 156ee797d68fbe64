use crate::{Color, GameError};

/// The number of pawns each player starts with.
pub const NUM_PAWNS: u32 = 8;

/// How an AI player evaluates its moves, see [`crate::evaluate_move()`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AiLevel {
    Easy,
    Hard,
}

impl std::fmt::Display for AiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AiLevel::Easy => write!(f, "easy"),
            AiLevel::Hard => write!(f, "hard"),
        }
    }
}

/// Who decides a player's moves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves are typed in on the console.
    Human { name: String },
    /// Moves are picked uniformly at random.
    Random,
    /// Moves are picked with a one-ply heuristic.
    Ai { level: AiLevel },
}

/// The state of a single player during one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    color: Color,
    num_pawns: u32,
    kind: PlayerKind,
}

impl Player {
    /// Fails if a human player's name is blank.
    pub fn new(color: Color, num_pawns: u32, kind: PlayerKind) -> Result<Self, GameError> {
        if let PlayerKind::Human { name } = &kind {
            if name.trim().is_empty() {
                return Err(GameError::UnnamedPlayer(color));
            }
        }
        Ok(Self {
            color,
            num_pawns,
            kind,
        })
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn num_pawns(&self) -> u32 {
        self.num_pawns
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn has_pawns(&self) -> bool {
        self.num_pawns > 0
    }

    /// Uses up one pawn.
    pub fn place_pawn(&mut self) -> Result<(), GameError> {
        self.num_pawns = self
            .num_pawns
            .checked_sub(1)
            .ok_or(GameError::NoPawnsLeft(self.color))?;
        Ok(())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            PlayerKind::Human { name } => write!(f, "{}", name),
            PlayerKind::Random => write!(f, "random"),
            PlayerKind::Ai { level } => write!(f, "AI ({})", level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawns_never_go_below_zero() {
        let mut player = Player::new(Color::Red, 1, PlayerKind::Random).unwrap();
        assert!(player.has_pawns());
        player.place_pawn().unwrap();
        assert_eq!(player.num_pawns(), 0);
        assert_eq!(player.place_pawn(), Err(GameError::NoPawnsLeft(Color::Red)));
        assert_eq!(player.num_pawns(), 0);
    }

    #[test]
    fn display_names() {
        let human = PlayerKind::Human {
            name: String::from("xclerc"),
        };
        assert_eq!(Player::new(Color::Blue, 8, human).unwrap().to_string(), "xclerc");
        assert_eq!(
            Player::new(Color::Red, 8, PlayerKind::Random).unwrap().to_string(),
            "random"
        );
        let ai = PlayerKind::Ai {
            level: AiLevel::Hard,
        };
        assert_eq!(Player::new(Color::Yellow, 8, ai).unwrap().to_string(), "AI (hard)");
    }

    #[test]
    fn humans_need_a_name() {
        for name in ["", "   "] {
            let kind = PlayerKind::Human {
                name: String::from(name),
            };
            assert_eq!(
                Player::new(Color::Purple, 8, kind),
                Err(GameError::UnnamedPlayer(Color::Purple))
            );
        }
    }
}
