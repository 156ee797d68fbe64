use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{Board, BoardError, Color, Coords, Deck, GameError, Player, Rotation, Tile};

/// Place the next tile of the deck, rotated, at a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Coords,
    pub rotation: Rotation,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rotated by {}", self.position, self.rotation)
    }
}

/// Summarizes the outcome of applying a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The player who made the move.
    pub player: Color,
    pub position: Coords,
    /// The tile as it lies on the board, i.e. after rotation.
    pub tile: Tile,
    pub path_closed: bool,
    /// One entry per pawn placed because of a closed path.
    pub pawns_placed: Vec<Color>,
}

/// The state of an in-progress game.
///
/// The only ways to change it are [`Game::apply_move()`] and [`Game::next_turn()`].
#[derive(Clone, Debug)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    deck: Deck,
    current_player_idx: usize,
}

impl Game {
    /// Shuffles the deck, and puts its top tile at the origin of a new board.
    ///
    /// The first player in the list moves first.
    pub fn new<R: Rng + ?Sized>(
        players: Vec<Player>,
        mut deck: Deck,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.color() == player.color()) {
                return Err(GameError::DuplicateColor(player.color()));
            }
        }
        deck.shuffle(rng);
        let first_tile = deck.draw()?;
        let mut board = Board::new();
        board.write(Coords::ORIGIN, first_tile)?;
        debug!(tile = %first_tile, tiles_left = deck.len(), "New game");

        Ok(Self {
            players,
            board,
            deck,
            current_player_idx: 0,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_idx]
    }

    pub fn current_player_idx(&self) -> usize {
        self.current_player_idx
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The tile that the next move will place, before rotation.
    pub fn next_tile(&self) -> Option<&Tile> {
        self.deck.peek()
    }

    /// Hands the turn to the next player.
    pub fn next_turn(&mut self) {
        self.current_player_idx = (self.current_player_idx + 1) % self.players.len();
    }

    /// No more tiles can be drawn, or nobody has a pawn to play with.
    pub fn is_over(&self) -> bool {
        self.deck.is_empty() || self.players.iter().all(|p| !p.has_pawns())
    }

    /// Every candidate position with every rotation.
    ///
    /// Positions come in row-major order; the rotations of one position are
    /// consecutive and ascending.
    pub fn possible_moves(&self) -> Vec<Move> {
        self.board
            .candidate_positions()
            .into_iter()
            .flat_map(|position| {
                Rotation::ALL
                    .into_iter()
                    .map(move |rotation| Move { position, rotation })
            })
            .collect()
    }

    /// Draws the next tile, places it, pays out pawns for a closed path,
    /// and hands the turn to the next player.
    ///
    /// On error, the game is left unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, GameError> {
        let Move { position, rotation } = mv;
        let player = self.current_player();
        if !player.has_pawns() {
            return Err(GameError::NoPawnsLeft(player.color()));
        }
        let player_color = player.color();
        // Checks the bounds, and that the cell is free, before drawing the tile
        if self.board.read(position)?.is_some() {
            return Err(BoardError::CellOccupied(position).into());
        }
        let tile = self.deck.draw()?;
        let tile = self
            .board
            .place_with_rotation(position, tile, rotation.degrees())?;
        debug!(player = %player_color, %position, %rotation, %tile, "Placed tile");

        let path_closed = self.board.is_path_closed(position, &tile);
        let mut pawns_placed = Vec::new();
        if path_closed {
            for link in tile.links() {
                let Some(owner) = self
                    .players
                    .iter_mut()
                    .find(|p| p.color() == link.color())
                else {
                    continue;
                };
                if owner.place_pawn().is_ok() {
                    info!(
                        player = %owner,
                        color = %owner.color(),
                        pawns_left = owner.num_pawns(),
                        "Pawn placed on a closed path"
                    );
                    pawns_placed.push(owner.color());
                } else {
                    debug!(color = %owner.color(), "Closed path, but no pawns left");
                }
            }
        }

        self.next_turn();
        Ok(MoveOutcome {
            player: player_color,
            position,
            tile,
            path_closed,
            pawns_placed,
        })
    }
}
