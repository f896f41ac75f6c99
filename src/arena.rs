//! Plays batches of self-play episodes and tallies the outcomes
use clap::Parser;
use dropfour::engine::{DropResult, GameState};
use env_logger::fmt::Formatter;
use log::Record;
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::io::Write;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Deserialize)]
struct ArenaSettings {
    height: usize,
    width: usize,
    episodes: usize,
}

/// Win tallies per player id, draws under `draws`.
#[derive(Debug, Default)]
struct Tally {
    wins: [usize; 2],
    draws: usize,
}

fn run_episode(mut state: GameState) -> DropResult {
    loop {
        let legal = state.legal_columns();
        let column = legal[rand::thread_rng().gen_range(0..legal.len())];
        match state.drop_piece(column).expect("drop on an open column") {
            DropResult::Continue { .. } => {}
            DropResult::ColumnFull => unreachable!("column came from legal_columns"),
            terminal => return terminal,
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let timestamp = buf.timestamp_millis();
            writeln!(buf, "[{}] [{}] - {}", timestamp, record.level(), record.args())
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config_file = fs::read_to_string(&args.config_file).expect("Failed to read config file");
    let arena_settings: ArenaSettings =
        serde_json::from_str(&config_file).expect("Failed to parse config file");

    let state = match GameState::new(arena_settings.height, arena_settings.width) {
        Ok(state) => state,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let mut tally = Tally::default();
    for episode in 0..arena_settings.episodes {
        log::info!("Starting episode {}", episode);
        match run_episode(state.reset()) {
            DropResult::Win { player, .. } => tally.wins[(player - 1) as usize] += 1,
            DropResult::Draw => tally.draws += 1,
            _ => unreachable!("episodes end in a win or a draw"),
        }
    }

    println!("Player\tWins\tPercentage");
    for (i, wins) in tally.wins.iter().enumerate() {
        println!(
            "{}\t{}\t{:>5.2}%",
            i + 1,
            wins,
            (100.0 * *wins as f64) / arena_settings.episodes as f64
        );
    }
    println!(
        "Draws\t{}\t{:>5.2}%",
        tally.draws,
        (100.0 * tally.draws as f64) / arena_settings.episodes as f64
    );
}
