use clap::{Parser, ValueEnum};
use dropfour::board::Cell;
use dropfour::engine::{DropResult, GameState, PLAYER_ONE};
use rand::Rng;
use std::io;

#[derive(Debug, Clone, ValueEnum)]
enum PlayerType {
    H,
    R,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Players participating in the game, in turn order
    #[arg(short, long, value_delimiter = ',', value_enum, default_value = "h,h")]
    players: Vec<PlayerType>,

    /// Board height in rows
    #[arg(long, default_value_t = 6)]
    height: usize,

    /// Board width in columns
    #[arg(long, default_value_t = 7)]
    width: usize,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn visualise(state: &GameState) {
    for x in 0..state.board().width() {
        print!("{}", x % 10);
    }
    print!("\n");
    for y in 0..state.board().height() {
        for x in 0..state.board().width() {
            print!(
                "{}",
                match state.board().cell(y, x) {
                    Cell::Empty => "◦",
                    Cell::Piece(PLAYER_ONE) => "●",
                    Cell::Piece(_) => "◯",
                }
            )
        }
        print!("\n");
    }
}

fn human_turn(state: &GameState) -> usize {
    loop {
        println!("Player {}, pick a column:", state.current_player());
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        match input.trim().parse() {
            Ok(column) => return column,
            Err(_) => println!("That's not a column number"),
        }
    }
}

fn random_turn(state: &GameState) -> usize {
    let legal = state.legal_columns();
    legal[rand::thread_rng().gen_range(0..legal.len())]
}

fn play(mut state: GameState, players: &[PlayerType]) -> GameState {
    loop {
        visualise(&state);
        let player_index = (state.current_player() - 1) as usize;
        let column = match players.get(player_index) {
            Some(PlayerType::R) => random_turn(&state),
            _ => human_turn(&state),
        };
        match state.drop_piece(column) {
            Ok(DropResult::Continue { .. }) => {}
            Ok(DropResult::ColumnFull) => {
                println!("Column {} is full", column);
            }
            Ok(DropResult::Win { player, .. }) => {
                visualise(&state);
                println!("Player {} won!", player);
                return state;
            }
            Ok(DropResult::Draw) => {
                visualise(&state);
                println!("You have tied!");
                return state;
            }
            Err(error) => {
                println!("{}", error);
            }
        }
    }
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut state = match GameState::new(args.height, args.width) {
        Ok(state) => state,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    loop {
        let finished = play(state, &args.players);
        println!("Play again? (y/n)");
        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .expect("Failed to read line");
        if !input.trim().eq_ignore_ascii_case("y") {
            break;
        }
        state = finished.reset();
    }
}
