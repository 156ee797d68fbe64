use crate::{Color, Coords, Side};

/// The error type for the [`FromStr`](std::str::FromStr) instances of [`Side`] and [`Color`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    pub expected: &'static str,
    pub found: String,
}

impl std::error::Error for UnknownName {}

impl std::fmt::Display for UnknownName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} ({})", self.expected, self.found)
    }
}

/// The error type for [`Board`](crate::Board) accesses and placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    OutOfBounds(Coords),
    CellOccupied(Coords),
    InvalidRotation(i32),
}

impl std::error::Error for BoardError {}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfBounds(coords) => {
                write!(f, "Coordinates {} are outside of the board", coords)
            }
            BoardError::CellOccupied(coords) => {
                write!(f, "There is already a tile at {}", coords)
            }
            BoardError::InvalidRotation(degrees) => {
                write!(f, "A rotation must be a multiple of 90 degrees, got {}", degrees)
            }
        }
    }
}

/// The error type for building a [`Link`](crate::Link) or a [`Tile`](crate::Tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTile {
    TooManyLinks(usize),
    DegenerateLink(Side),
    OverlappingSides(Side),
}

impl std::error::Error for InvalidTile {}

impl std::fmt::Display for InvalidTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidTile::TooManyLinks(n) => {
                write!(f, "A tile holds at most two links, got {}", n)
            }
            InvalidTile::DegenerateLink(side) => {
                write!(f, "A link must join two different sides, got {} twice", side)
            }
            InvalidTile::OverlappingSides(side) => {
                write!(f, "Two links of the same tile both use the {} side", side)
            }
        }
    }
}

/// The error type for one move, and for setting up a [`Game`](crate::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    NoPawnsLeft(Color),
    EmptyDeck,
    NoPlayers,
    DuplicateColor(Color),
    UnnamedPlayer(Color),
    Board(BoardError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::NoPawnsLeft(color) => {
                write!(f, "The {} player has no pawns left", color)
            }
            GameError::EmptyDeck => write!(f, "The deck is empty"),
            GameError::NoPlayers => write!(f, "A game needs at least one player"),
            GameError::DuplicateColor(color) => {
                write!(f, "Two players share the {} color", color)
            }
            GameError::UnnamedPlayer(color) => {
                write!(f, "The {} human player needs a name", color)
            }
            GameError::Board(_) => write!(f, "The tile could not be placed"),
        }
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

/// The error type for [loading a deck](crate::load_deck).
#[derive(Debug)]
pub enum DeckError {
    /// `line` is 1-based; it is 0 for errors about the file as a whole.
    InvalidFormat { line: usize, message: String },
    Io(std::io::Error),
}

impl DeckError {
    pub(crate) fn invalid(line: usize, message: impl Into<String>) -> Self {
        DeckError::InvalidFormat {
            line,
            message: message.into(),
        }
    }
}

impl std::error::Error for DeckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeckError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckError::InvalidFormat { line: 0, message } => write!(f, "{}", message),
            DeckError::InvalidFormat { line, message } => write!(f, "line {}: {}", line, message),
            DeckError::Io(_) => write!(f, "Could not read the deck file"),
        }
    }
}

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        DeckError::Io(err)
    }
}
