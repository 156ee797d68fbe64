use std::io::{BufRead, Write};
use std::str::FromStr;

use carcassonne::{best_moves, AiLevel, Color, Game, GameError, Move, Player, PlayerKind};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

/// Where human players read their moves from, and where prompts go.
pub struct Console<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    buf: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> anyhow::Result<&str> {
        self.buf.clear();
        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            anyhow::bail!("Input was closed while waiting for a move");
        }
        Ok(self.buf.trim())
    }
}

/// Asks the current player of `game` to pick one of `moves`.
///
/// `moves` must not be empty.
pub fn choose_move<R: BufRead, W: Write, G: Rng + ?Sized>(
    game: &Game,
    moves: &[Move],
    rng: &mut G,
    console: &mut Console<R, W>,
) -> anyhow::Result<Move> {
    let player = game.current_player();
    if moves.is_empty() {
        anyhow::bail!("No possible moves for {}", player);
    }
    let mv = match player.kind() {
        PlayerKind::Human { .. } => ask_human(game, player, moves, console)?,
        PlayerKind::Random => *moves.choose(rng).expect("moves is not empty"),
        PlayerKind::Ai { level } => {
            let top_choices = best_moves(game.board(), moves, player.color(), *level);
            *top_choices
                .choose(rng)
                .expect("one of the moves scores best")
        }
    };
    trace!(player = %player, %mv, "Chose move");
    Ok(mv)
}

fn ask_human<R: BufRead, W: Write>(
    game: &Game,
    player: &Player,
    moves: &[Move],
    console: &mut Console<R, W>,
) -> anyhow::Result<Move> {
    if let Some(tile) = game.next_tile() {
        writeln!(console.output, "{}, your tile is: {}", player, tile)?;
    }
    writeln!(console.output, "Possible moves:")?;
    for (idx, mv) in moves.iter().enumerate() {
        writeln!(console.output, "{:>3}: {}", idx, mv)?;
    }
    loop {
        write!(console.output, "Enter the number of your move: ")?;
        console.output.flush()?;
        let answer = console.read_line()?;
        match answer.parse::<usize>() {
            Ok(idx) if idx < moves.len() => return Ok(moves[idx]),
            _ => {
                let answer = String::from(answer);
                writeln!(
                    console.output,
                    "Invalid choice '{}', expected a number between 0 and {}",
                    answer,
                    moves.len() - 1
                )?;
            }
        }
    }
}

/// A player as given on the command line: `<kind>:<color>[:<name>]`.
///
/// The kinds are `human` (which needs a name), `random`, `ai-easy` and `ai-hard`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSpec {
    pub color: Color,
    pub kind: PlayerKind,
}

impl PlayerSpec {
    pub fn into_player(self, num_pawns: u32) -> Result<Player, GameError> {
        Player::new(self.color, num_pawns, self.kind)
    }
}

impl FromStr for PlayerSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = parts.next().unwrap_or_default();
        let Some(color) = parts.next() else {
            anyhow::bail!("Expected <kind>:<color>[:<name>], got '{}'", s);
        };
        let color = color.parse::<Color>()?;
        let name = parts.next();
        let kind = match (kind, name) {
            ("human", Some(name)) if !name.trim().is_empty() => PlayerKind::Human {
                name: String::from(name.trim()),
            },
            ("human", _) => anyhow::bail!("A human player needs a name, e.g. human:blue:alice"),
            ("random", None) => PlayerKind::Random,
            ("ai-easy", None) => PlayerKind::Ai {
                level: AiLevel::Easy,
            },
            ("ai-hard", None) => PlayerKind::Ai {
                level: AiLevel::Hard,
            },
            (_, Some(_)) => anyhow::bail!("Only human players have a name, got '{}'", s),
            (other, None) => anyhow::bail!(
                "Unknown player kind '{}', expected human, random, ai-easy or ai-hard",
                other
            ),
        };
        Ok(Self { color, kind })
    }
}

/// The lineup used when no players are given: a human, an easy AI and a random player.
pub fn default_players() -> Vec<PlayerSpec> {
    vec![
        PlayerSpec {
            color: Color::Blue,
            kind: PlayerKind::Human {
                name: String::from("xclerc"),
            },
        },
        PlayerSpec {
            color: Color::Red,
            kind: PlayerKind::Ai {
                level: AiLevel::Easy,
            },
        },
        PlayerSpec {
            color: Color::Yellow,
            kind: PlayerKind::Random,
        },
    ]
}
