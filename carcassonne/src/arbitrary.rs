use quickcheck::{Arbitrary, Gen};

use crate::{Color, Coords, Link, Rotation, Side, Tile};

impl Arbitrary for Side {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Side::ALL).unwrap()
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Color::ALL).unwrap()
    }
}

impl Arbitrary for Rotation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rotation::ALL).unwrap()
    }
}

impl Arbitrary for Coords {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep away from the i32 limits, neighbours must not overflow
        Coords {
            row: i16::arbitrary(g) as i32,
            column: i16::arbitrary(g) as i32,
        }
    }
}

impl Arbitrary for Tile {
    fn arbitrary(g: &mut Gen) -> Self {
        // Pick a random pairing of the four sides, and use some of the pairs
        let mut sides = Side::ALL;
        let first = *g.choose(&[1, 2, 3]).unwrap();
        sides.swap(1, first);
        let pairs = [[sides[0], sides[1]], [sides[2], sides[3]]];
        let links: Vec<Link> = match *g.choose(&[0, 1, 2]).unwrap() {
            0 => vec![],
            1 => {
                let [a, b] = *g.choose(&pairs).unwrap();
                vec![Link::new(a, b, Color::arbitrary(g)).unwrap()]
            }
            _ => pairs
                .iter()
                .map(|&[a, b]| Link::new(a, b, Color::arbitrary(g)).unwrap())
                .collect(),
        };
        Tile::new(&links).unwrap()
    }
}

#[test]
fn generated_tiles_cover_every_single_link() {
    let mut g = Gen::new(10);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..2000 {
        let tile = Tile::arbitrary(&mut g);
        if tile.num_links() == 1 {
            seen.extend(tile.links().map(|link| link.sides()));
        }
    }
    assert_eq!(seen.len(), 6);
}
