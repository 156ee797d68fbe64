use std::io::{stdin, stdout};
use std::path::PathBuf;

use carcassonne::{load_deck, Deck, Game, Player, NUM_PAWNS};
use clap::Parser;
use mfc::{default_players, play_game, Console, PlayerSpec, Recorder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Plays a game of My First Carcassonne on the console
#[derive(Parser)]
struct Args {
    /// Path to a deck file, the standard 36-tile deck is used otherwise
    deck: Option<PathBuf>,

    /// A player as <kind>:<color>[:<name>], where kind is one of
    /// "human", "random", "ai-easy", "ai-hard". Can be repeated, in turn order
    #[arg(short, long = "player")]
    players: Vec<PlayerSpec>,

    /// How many pawns each player starts with
    #[arg(long, default_value_t = NUM_PAWNS)]
    pawns: u32,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Record the moves of the game as JSON into this file
    #[arg(short, long)]
    record: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let deck = match &args.deck {
        Some(path) => load_deck(path)?,
        None => Deck::standard(),
    };
    info!(tiles = deck.len(), "Loaded deck");

    let player_specs = if args.players.is_empty() {
        default_players()
    } else {
        args.players
    };
    let players = player_specs
        .into_iter()
        .map(|spec| spec.into_player(args.pawns))
        .collect::<Result<Vec<Player>, _>>()?;

    let mut recorder = if let Some(path) = args.record {
        Some(Recorder::new(path, seed)?)
    } else {
        None
    };

    let mut game = Game::new(players, deck, &mut rng)?;
    let mut console = Console::new(stdin().lock(), stdout().lock());
    let summary = play_game(&mut game, &mut rng, &mut console, &mut recorder)?;
    drop(console);

    println!("End result after {} moves:", summary.num_moves);
    for (player, (color, pawns)) in game.players().iter().zip(summary.pawns_left) {
        println!("- {} ({}): {} pawns left", player, color, pawns);
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
