use crate::{Board, Game, Side, Tile};

pub const TILE_HEIGHT: usize = 5;
pub const TILE_WIDTH: usize = 9;

/// Background of the board, where there is no tile.
pub const EMPTY_SPACE: char = '.';

const EMPTY_TILE: [&str; TILE_HEIGHT] = [
    "+---#---+",
    "|       |",
    "#       #",
    "|       |",
    "+---#---+",
];

/// Where to draw a link, keyed by its (sorted) pair of sides: the row and
/// column of the color letter, and the road segments as `(row, column, text)`.
#[rustfmt::skip]
const LINK_POSITIONS: [([Side; 2], (usize, usize), &[(usize, usize, &str)]); 6] = [
    ([Side::North, Side::West], (2, 2), &[(1, 1, "####"), (2, 1, "#")]),
    ([Side::North, Side::East], (2, 6), &[(1, 4, "####"), (2, 7, "#")]),
    ([Side::South, Side::West], (2, 2), &[(3, 1, "####"), (2, 1, "#")]),
    ([Side::East, Side::South], (2, 6), &[(3, 4, "####"), (2, 7, "#")]),
    ([Side::North, Side::South], (2, 4), &[(1, 4, "#"), (3, 4, "#")]),
    ([Side::East, Side::West], (2, 4), &[(2, 1, "###"), (2, 5, "###")]),
];

/// A rectangle of characters to draw text on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(height: usize, width: usize, background: char) -> Self {
        Self {
            rows: vec![vec![background; width]; height],
        }
    }

    /// Writes `text` from left to right, starting at `(row, column)`.
    ///
    /// Panics if the text does not fit.
    pub fn set_text(&mut self, row: usize, column: usize, text: &str) {
        let line = &mut self.rows[row];
        for (offset, c) in text.chars().enumerate() {
            line[column + offset] = c;
        }
    }

    /// Writes each of `texts` on successive rows, starting at `(row, column)`.
    pub fn set_texts(&mut self, row: usize, column: usize, texts: &[&str]) {
        for (offset, text) in texts.iter().enumerate() {
            self.set_text(row + offset, column, text);
        }
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

impl Tile {
    /// Draws the tile with its top left corner at `(top_row, left_column)`.
    pub fn render(&self, canvas: &mut Canvas, top_row: usize, left_column: usize) {
        canvas.set_texts(top_row, left_column, &EMPTY_TILE);
        for link in self.links() {
            let Some((_, (color_row, color_column), segments)) = LINK_POSITIONS
                .iter()
                .find(|(sides, _, _)| *sides == link.sides())
            else {
                continue;
            };
            let mut letter = [0u8; 4];
            canvas.set_text(
                top_row + color_row,
                left_column + color_column,
                link.color().letter().encode_utf8(&mut letter),
            );
            for &(row, column, text) in segments.iter() {
                canvas.set_text(top_row + row, left_column + column, text);
            }
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (height, width) = (self.height(), self.width());
        let mut canvas = Canvas::new(height * TILE_HEIGHT, width * TILE_WIDTH, EMPTY_SPACE);
        for (idx, cell) in self.cells().iter().enumerate() {
            if let Some(tile) = cell {
                let (row, column) = (idx / width, idx % width);
                tile.render(&mut canvas, row * TILE_HEIGHT, column * TILE_WIDTH);
            }
        }
        write!(f, "{}", canvas)
    }
}

/// The board, followed by the number of pawns left for each player.
pub fn visualize_game(game: &Game) -> String {
    let mut result = game.board().to_string();
    result += "\n";
    for player in game.players() {
        result += &format!(
            "\n{} ({}): {}",
            player,
            player.color(),
            player.num_pawns()
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Coords, Link};

    fn render(tile: &Tile) -> String {
        let mut canvas = Canvas::new(TILE_HEIGHT, TILE_WIDTH, ' ');
        tile.render(&mut canvas, 0, 0);
        canvas.to_string()
    }

    #[test]
    fn every_side_pair_has_a_glyph() {
        for (i, &a) in Side::ALL.iter().enumerate() {
            for &b in &Side::ALL[i + 1..] {
                let sides = Link::new(a, b, Color::Red).unwrap().sides();
                assert!(LINK_POSITIONS.iter().any(|(s, _, _)| *s == sides));
            }
        }
    }

    #[test]
    fn render_empty_tile() {
        assert_eq!(render(&Tile::empty()), EMPTY_TILE.join("\n"));
    }

    #[test]
    fn render_two_links() {
        let tile = Tile::new(&[
            Link::new(Side::North, Side::East, Color::Blue).unwrap(),
            Link::new(Side::South, Side::West, Color::Yellow).unwrap(),
        ])
        .unwrap();
        assert_eq!(
            render(&tile),
            "+---#---+\n\
             |   ####|\n\
             ##Y   B##\n\
             |####   |\n\
             +---#---+"
        );
    }

    #[test]
    fn render_straight_link() {
        let tile = Tile::new(&[Link::new(Side::West, Side::East, Color::Purple).unwrap()]).unwrap();
        assert_eq!(
            render(&tile),
            "+---#---+\n\
             |       |\n\
             ####P####\n\
             |       |\n\
             +---#---+"
        );
    }

    #[test]
    fn render_board_with_margin() {
        let mut board = Board::new();
        board.write(Coords::ORIGIN, Tile::empty()).unwrap();
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3 * TILE_HEIGHT);
        assert!(lines.iter().all(|l| l.chars().count() == 3 * TILE_WIDTH));
        assert_eq!(lines[0], ".".repeat(3 * TILE_WIDTH));
        assert_eq!(lines[TILE_HEIGHT], format!("{0}+---#---+{0}", ".".repeat(TILE_WIDTH)));
    }
}
