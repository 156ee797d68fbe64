use std::io::{BufRead, Write};

use carcassonne::{visualize_game, Color, Game, PlayerKind};
use rand::Rng;
use tracing::{debug, info, warn};

use crate::player::{choose_move, Console};
use crate::recording::Recorder;

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// The number of tiles placed after setup.
    pub num_moves: usize,
    /// The pawns left for each player, in turn order.
    pub pawns_left: Vec<(Color, u32)>,
}

/// Plays until the deck runs out or nobody has pawns left.
///
/// Players without pawns are skipped. A human whose move is rejected is asked
/// again; for any other player, a rejected move ends the game with an error.
pub fn play_game<R: BufRead, W: Write, G: Rng + ?Sized>(
    game: &mut Game,
    rng: &mut G,
    console: &mut Console<R, W>,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<GameSummary> {
    let mut num_moves = 0;
    while !game.is_over() {
        let player = game.current_player();
        if !player.has_pawns() {
            debug!(player = %player, "No pawns left, skipping turn");
            game.next_turn();
            continue;
        }
        let is_human = matches!(player.kind(), PlayerKind::Human { .. });

        writeln!(console.output(), "{}\n", visualize_game(game))?;
        let moves = game.possible_moves();
        let mv = choose_move(game, &moves, rng, console)?;
        match game.apply_move(mv) {
            Ok(outcome) => {
                num_moves += 1;
                if outcome.path_closed {
                    writeln!(console.output(), "Path closed at {}!", outcome.position)?;
                }
                if let Some(rec) = recorder {
                    rec.store_move(mv.rotation, &outcome);
                }
            }
            Err(err) => {
                warn!(player = %game.current_player(), %mv, "Illegal move");
                let mut err_dyn = &err as &dyn std::error::Error;
                while let Some(src_err) = err_dyn.source() {
                    warn!("{}", err_dyn);
                    err_dyn = src_err;
                }
                warn!("{}", err_dyn);
                if !is_human {
                    return Err(err.into());
                }
                writeln!(console.output(), "*** {}", err_dyn)?;
            }
        }
    }

    writeln!(console.output(), "{}\n", visualize_game(game))?;
    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    let pawns_left: Vec<(Color, u32)> = game
        .players()
        .iter()
        .map(|p| (p.color(), p.num_pawns()))
        .collect();
    info!(num_moves, tiles_left = game.deck().len(), "Game over");
    Ok(GameSummary {
        num_moves,
        pawns_left,
    })
}
