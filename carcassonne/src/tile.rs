use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BoardError, InvalidTile, Side, UnknownName};

/// The color of a player, and of the road links that player owns.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Purple,
    Red,
    Yellow,
}

impl Color {
    /// All colors, in alphabetical order.
    pub const ALL: [Color; 4] = [Color::Blue, Color::Purple, Color::Red, Color::Yellow];

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Yellow => "yellow",
        }
    }

    /// The marker drawn on tiles for links of this color.
    pub fn letter(self) -> char {
        match self {
            Color::Blue => 'B',
            Color::Purple => 'P',
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a color name, ignoring case.
impl FromStr for Color {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownName {
                expected: "color",
                found: String::from(s),
            })
    }
}

/// A road segment joining two different sides of a tile, owned by a color.
///
/// The pair of sides is unordered: `Link::new(North, East, c)` and
/// `Link::new(East, North, c)` are the same link.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    // Always sorted, and never equal.
    sides: [Side; 2],
    color: Color,
}

impl Link {
    pub fn new(side_a: Side, side_b: Side, color: Color) -> Result<Self, InvalidTile> {
        if side_a == side_b {
            return Err(InvalidTile::DegenerateLink(side_a));
        }
        Ok(Self {
            sides: [side_a.min(side_b), side_a.max(side_b)],
            color,
        })
    }

    pub fn sides(&self) -> [Side; 2] {
        self.sides
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn touches(&self, side: Side) -> bool {
        self.sides.contains(&side)
    }

    fn map_sides(self, f: impl Fn(Side) -> Side) -> Self {
        let [a, b] = self.sides.map(f);
        Self {
            sides: [a.min(b), a.max(b)],
            color: self.color,
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.sides[0], self.sides[1], self.color)
    }
}

/// A quarter-turn multiple, used to orient a tile before placing it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[serde(rename = "0")]
    None,
    #[serde(rename = "90")]
    Quarter,
    #[serde(rename = "180")]
    Half,
    #[serde(rename = "270")]
    ThreeQuarters,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::None,
        Rotation::Quarter,
        Rotation::Half,
        Rotation::ThreeQuarters,
    ];

    /// Accepts any multiple of 90, including negative ones and full turns.
    pub fn from_degrees(degrees: i32) -> Result<Self, BoardError> {
        if degrees % 90 != 0 {
            return Err(BoardError::InvalidRotation(degrees));
        }
        Ok(Self::ALL[(degrees / 90).rem_euclid(4) as usize])
    }

    pub fn degrees(self) -> i32 {
        90 * self.quarter_turns() as i32
    }

    /// Number of clockwise quarter turns.
    pub fn quarter_turns(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A square tile holding zero, one or two side-disjoint [`Link`]s.
///
/// Tiles are small values: rotating one produces (or overwrites with)
/// another tile, with the same colors and the sides relabeled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    // A second link is only present if there is a first one.
    links: [Option<Link>; 2],
}

impl Tile {
    pub fn empty() -> Self {
        Self { links: [None; 2] }
    }

    pub fn new(links: &[Link]) -> Result<Self, InvalidTile> {
        match links {
            [] => Ok(Self::empty()),
            &[link] => Ok(Self {
                links: [Some(link), None],
            }),
            &[first, second] => {
                if let Some(&shared) = first.sides.iter().find(|&&side| second.touches(side)) {
                    return Err(InvalidTile::OverlappingSides(shared));
                }
                Ok(Self {
                    links: [Some(first), Some(second)],
                })
            }
            _ => Err(InvalidTile::TooManyLinks(links.len())),
        }
    }

    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        self.links.iter().flatten().copied()
    }

    pub fn num_links(&self) -> usize {
        self.links().count()
    }

    /// The link that touches `side`, if any.
    pub fn link_at(&self, side: Side) -> Option<Link> {
        self.links().find(|link| link.touches(side))
    }

    pub fn rotate_clockwise(&mut self) {
        self.map_sides(Side::clockwise);
    }

    pub fn rotate_counterclockwise(&mut self) {
        self.map_sides(Side::counterclockwise);
    }

    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        for _ in 0..rotation.quarter_turns() {
            self.rotate_clockwise();
        }
        self
    }

    fn map_sides(&mut self, f: fn(Side) -> Side) {
        for link in self.links.iter_mut().flatten() {
            *link = link.map_sides(f);
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.links {
            [None, _] => write!(f, "no links"),
            [Some(link), None] => write!(f, "{}", link),
            [Some(first), Some(second)] => write!(f, "{} & {}", first, second),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    fn link(a: Side, b: Side, color: Color) -> Link {
        Link::new(a, b, color).unwrap()
    }

    quickcheck! {
        fn full_turn_restores_tile(tile: Tile) -> bool {
            let mut rotated = tile;
            for _ in 0..4 {
                rotated.rotate_clockwise();
            }
            rotated == tile
        }

        fn counterclockwise_undoes_clockwise(tile: Tile) -> bool {
            let mut rotated = tile;
            rotated.rotate_clockwise();
            rotated.rotate_counterclockwise();
            rotated == tile
        }

        fn rotation_keeps_colors_and_link_count(tile: Tile, rotation: Rotation) -> bool {
            let rotated = tile.rotated(rotation);
            let colors = |t: &Tile| t.links().map(|l| l.color()).collect::<Vec<_>>();
            rotated.num_links() == tile.num_links() && colors(&rotated) == colors(&tile)
        }

        fn link_sides_are_distinct(tile: Tile) -> bool {
            tile.links().all(|link| link.sides()[0] != link.sides()[1])
        }
    }

    #[test]
    fn degenerate_link_is_rejected() {
        assert_eq!(
            Link::new(Side::East, Side::East, Color::Red),
            Err(InvalidTile::DegenerateLink(Side::East))
        );
    }

    #[test]
    fn link_sides_are_unordered() {
        assert_eq!(
            link(Side::West, Side::North, Color::Blue),
            link(Side::North, Side::West, Color::Blue)
        );
    }

    #[test]
    fn overlapping_links_are_rejected() {
        let first = link(Side::North, Side::East, Color::Blue);
        let second = link(Side::East, Side::South, Color::Red);
        assert_eq!(
            Tile::new(&[first, second]),
            Err(InvalidTile::OverlappingSides(Side::East))
        );
    }

    #[test]
    fn three_links_are_rejected() {
        let l = link(Side::North, Side::East, Color::Blue);
        assert_eq!(Tile::new(&[l, l, l]), Err(InvalidTile::TooManyLinks(3)));
    }

    #[test]
    fn rotate_two_links() {
        let mut tile = Tile::new(&[
            link(Side::North, Side::East, Color::Blue),
            link(Side::South, Side::West, Color::Red),
        ])
        .unwrap();
        tile.rotate_clockwise();
        assert_eq!(
            tile.link_at(Side::East),
            Some(link(Side::East, Side::South, Color::Blue))
        );
        assert_eq!(
            tile.link_at(Side::North),
            Some(link(Side::West, Side::North, Color::Red))
        );
    }

    #[test]
    fn link_at_missing_side() {
        let tile = Tile::new(&[link(Side::North, Side::South, Color::Yellow)]).unwrap();
        assert_eq!(tile.link_at(Side::East), None);
        assert_eq!(tile.link_at(Side::South).map(|l| l.color()), Some(Color::Yellow));
        assert_eq!(Tile::empty().link_at(Side::North), None);
    }

    #[test]
    fn rotation_from_degrees() {
        assert_eq!(Rotation::from_degrees(0), Ok(Rotation::None));
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::ThreeQuarters));
        assert_eq!(Rotation::from_degrees(450), Ok(Rotation::Quarter));
        assert_eq!(Rotation::from_degrees(-90), Ok(Rotation::ThreeQuarters));
        assert_eq!(
            Rotation::from_degrees(45),
            Err(BoardError::InvalidRotation(45))
        );
    }

    #[test]
    fn display_uses_deck_notation() {
        let tile = Tile::new(&[
            link(Side::East, Side::North, Color::Blue),
            link(Side::South, Side::West, Color::Purple),
        ])
        .unwrap();
        assert_eq!(tile.to_string(), "north-east:blue & south-west:purple");
        assert_eq!(Tile::empty().to_string(), "no links");
    }

    #[test]
    fn parse_color_ignores_case() {
        assert_eq!("Purple".parse::<Color>(), Ok(Color::Purple));
        assert!("green".parse::<Color>().is_err());
    }
}
