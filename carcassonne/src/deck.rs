//! The default deck, and loading a deck from a text file.
//!
//! The deck file format is line-oriented:
//!
//! - `%` starts a comment, which ends at the end of the line;
//! - lines with only spaces (once comments are removed) are ignored;
//! - `NO_LINKS` alone on a line is a tile without links;
//! - `ONE_LINK <side>-<side>:<color>` is a tile with one link;
//! - `TWO_LINKS <side>-<side>:<color> & <side>-<side>:<color>` is a tile with
//!   two links, which must use four different sides and two different colors.
//!
//! Sides are `north`, `east`, `south`, `west` and colors are `blue`, `purple`,
//! `red`, `yellow`, in any case.
//!
//! ```
//! use carcassonne::parse_deck;
//! let deck = parse_deck("NO_LINKS % a blank tile\nONE_LINK north-east:red\n").unwrap();
//! assert_eq!(deck.len(), 2);
//! ```

use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Color, DeckError, GameError, Link, Side, Tile};

const COMMENT_SIGN: char = '%';

/// The tiles still to be played. Tiles are drawn from the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The 36 tiles of the game, unshuffled.
    ///
    /// - 4 tiles without links;
    /// - 8 tiles (2 per color) with a link between consecutive sides;
    /// - 12 tiles (3 per color) with a link between opposite sides;
    /// - 12 tiles (2 per pair of different colors) with two links between
    ///   consecutive sides.
    pub fn standard() -> Self {
        let mut tiles = Vec::with_capacity(36);
        tiles.extend((0..4).map(|_| Tile::empty()));
        for color in Color::ALL {
            for _ in 0..2 {
                tiles.push(standard_tile(&[(Side::North, Side::East, color)]));
            }
        }
        for color in Color::ALL {
            for _ in 0..3 {
                tiles.push(standard_tile(&[(Side::North, Side::South, color)]));
            }
        }
        for (i, &first) in Color::ALL.iter().enumerate() {
            for &second in &Color::ALL[i + 1..] {
                for _ in 0..2 {
                    tiles.push(standard_tile(&[
                        (Side::North, Side::East, first),
                        (Side::South, Side::West, second),
                    ]));
                }
            }
        }
        Self { tiles }
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.shuffle(rng);
    }

    /// The tile that [`Self::draw()`] will return next.
    pub fn peek(&self) -> Option<&Tile> {
        self.tiles.last()
    }

    pub fn draw(&mut self) -> Result<Tile, GameError> {
        self.tiles.pop().ok_or(GameError::EmptyDeck)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

// Builds one of the hard-coded tiles of the standard deck.
fn standard_tile(links: &[(Side, Side, Color)]) -> Tile {
    let links: Vec<Link> = links
        .iter()
        .map(|&(side_a, side_b, color)| {
            Link::new(side_a, side_b, color).expect("Standard links join different sides")
        })
        .collect();
    Tile::new(&links).expect("Standard tiles have side-disjoint links")
}

/// Reads and parses a deck file, see the [module docs](self) for the format.
pub fn load_deck(path: impl AsRef<Path>) -> Result<Deck, DeckError> {
    let text = std::fs::read_to_string(path)?;
    parse_deck(&text)
}

/// Parses the contents of a deck file.
///
/// Fails with a 1-based line number on the first malformed line, or with
/// line 0 if the text has no tiles at all.
pub fn parse_deck(text: &str) -> Result<Deck, DeckError> {
    let mut tiles = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_num = idx + 1;
        let content = match line.split_once(COMMENT_SIGN) {
            Some((before, _comment)) => before,
            None => line,
        }
        .trim();
        if !content.is_empty() {
            tiles.push(decode_line(line_num, content)?);
        }
    }
    if tiles.is_empty() {
        return Err(DeckError::invalid(0, "empty deck"));
    }
    Ok(Deck { tiles })
}

fn decode_line(line_num: usize, text: &str) -> Result<Tile, DeckError> {
    let (directive, rest) = match text.split_once(char::is_whitespace) {
        Some((directive, rest)) => (directive, rest.trim()),
        None => (text, ""),
    };
    match directive {
        "NO_LINKS" => {
            if !rest.is_empty() {
                return Err(DeckError::invalid(
                    line_num,
                    "a NO_LINKS should not be followed by anything",
                ));
            }
            Ok(Tile::empty())
        }
        "ONE_LINK" => {
            if rest.is_empty() {
                return Err(DeckError::invalid(
                    line_num,
                    "a ONE_LINK should be followed by a link definition",
                ));
            }
            let link = decode_link(line_num, rest)?;
            tile_from_links(line_num, &[link])
        }
        "TWO_LINKS" => {
            if rest.is_empty() {
                return Err(DeckError::invalid(
                    line_num,
                    "a TWO_LINKS should be followed by link definitions",
                ));
            }
            let parts: Vec<&str> = rest.split('&').collect();
            let &[first, second] = parts.as_slice() else {
                return Err(DeckError::invalid(
                    line_num,
                    "a TWO_LINKS should be followed by 2 link definitions",
                ));
            };
            let first = decode_link(line_num, first)?;
            let second = decode_link(line_num, second)?;
            let tile = tile_from_links(line_num, &[first, second])?;
            if first.color() == second.color() {
                return Err(DeckError::invalid(
                    line_num,
                    "links should have different colors",
                ));
            }
            Ok(tile)
        }
        _ => Err(DeckError::invalid(
            line_num,
            format!("unknown directive {}", directive),
        )),
    }
}

fn tile_from_links(line_num: usize, links: &[Link]) -> Result<Tile, DeckError> {
    Tile::new(links)
        .map_err(|_| DeckError::invalid(line_num, "links should not have overlapping sides"))
}

// `<side>-<side>:<color>`
fn decode_link(line_num: usize, text: &str) -> Result<Link, DeckError> {
    let Some((sides, color)) = text.split_once(':') else {
        return Err(DeckError::invalid(
            line_num,
            "a link should have two sides and a color separated by a colon",
        ));
    };
    if color.contains(':') {
        return Err(DeckError::invalid(
            line_num,
            "a link should have two sides and a color separated by a colon",
        ));
    }
    let parts: Vec<&str> = sides.split('-').collect();
    let &[side_a, side_b] = parts.as_slice() else {
        return Err(DeckError::invalid(
            line_num,
            "a link should have two sides separated by a dash",
        ));
    };
    let decode_side = |text: &str| {
        text.trim()
            .parse::<Side>()
            .map_err(|err| DeckError::invalid(line_num, err.to_string()))
    };
    let side_a = decode_side(side_a)?;
    let side_b = decode_side(side_b)?;
    let color = color
        .trim()
        .parse::<Color>()
        .map_err(|err| DeckError::invalid(line_num, err.to_string()))?;
    Link::new(side_a, side_b, color).map_err(|_| {
        DeckError::invalid(line_num, "a link should be between two different sides")
    })
}
