use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use game_2048::{Direction, EngineError, GameConfig, GameState};
use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Debug, Parser)]
#[command(author, version, about = "Play the 4x4 sliding-tile merge puzzle from the terminal")]
struct Args {
    /// Seed for tile spawns (and for random play); omit for a fresh game
    #[arg(long)]
    seed: Option<u64>,

    /// Moves to play, as WASD letters ("wasd") or words ("up,left down")
    #[arg(long, value_name = "SCRIPT")]
    moves: Option<String>,

    /// Stop after this many moves
    #[arg(long, value_name = "N")]
    max_moves: Option<u64>,

    /// Print only the final board and result
    #[arg(long)]
    quiet: bool,
}

/// Split a move script into directions. Tokens are separated by commas or
/// whitespace; a token that is not a direction word is read letter by letter.
fn parse_script(script: &str) -> Result<Vec<Direction>, EngineError> {
    let mut directions = Vec::new();
    for token in script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token.parse::<Direction>() {
            Ok(dir) => directions.push(dir),
            Err(_) => {
                for key in token.chars() {
                    directions.push(key.to_string().parse()?);
                }
            }
        }
    }
    Ok(directions)
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = GameConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut game = GameState::new(&config);
    let mut script = args.moves.as_deref().map(parse_script).transpose()?.map(Vec::into_iter);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
        None => StdRng::from_entropy(),
    };

    if !args.quiet {
        println!("{}", game.board());
    }
    let mut move_count: u64 = 0;
    while !game.is_done() {
        if args.max_moves.is_some_and(|cap| move_count >= cap) {
            break;
        }
        let direction = match script.as_mut() {
            Some(moves) => match moves.next() {
                Some(dir) => dir,
                None => break,
            },
            None => match game.available_moves().choose(&mut rng) {
                Some(&dir) => dir,
                None => break,
            },
        };
        let outcome = game.apply_move(direction);
        move_count += 1;
        if outcome.moved && !args.quiet {
            println!("{direction} (+{})\n{}", outcome.score_delta, game.board());
        }
    }

    if args.quiet {
        println!("{}", game.board());
    }
    info!("Moves made: {}, highest tile: {}", move_count, game.board().highest_tile());
    println!("Score: {}\n", game.current_score());
    println!("{}", game.status());
    Ok(())
}
