use std::fs;
use std::path::PathBuf;
use std::process;

use log::{debug, info};
use structopt::StructOpt;

use matgame::csv::parse_csv_input;
use matgame::evaluate::evaluate_pure_strategies;
use matgame::game::{GameInputUi, GameResult};
use matgame::parse::{clamp_game_input_ui, parse_game_input};
use matgame::presets;

use zero_sum_solving::minimax::solve_game;
use zero_sum_solving::simplex::SimplexSolver;

#[derive(StructOpt, Debug)]
#[structopt(name = "solve_matrix_game")]
struct Opt {
    /// Payoff table as CSV: header row is an empty cell plus Player 2's
    /// labels, each data row is a Player 1 label plus payoff cells.
    #[structopt(short = "g", long = "input_csv_file", parse(from_os_str))]
    input_file: Option<PathBuf>,

    /// Built-in example game (rps, weighted_rps, okizeme,
    /// matching_pennies).
    #[structopt(short = "p", long = "preset")]
    preset: Option<String>,

    /// Clamp valid payoff cells into [-1e6, 1e6] before validating.
    #[structopt(long = "clamp")]
    clamp: bool,

    /// Emit the full GameResult as JSON instead of a text summary.
    #[structopt(long = "json")]
    json: bool,
}

fn load_input(opt: &Opt) -> Result<GameInputUi, String> {
    match (&opt.input_file, &opt.preset) {
        (Some(path), None) => {
            let text = fs::read_to_string(path)
                .map_err(|err| format!("cannot read {}: {}", path.display(), err))?;
            parse_csv_input(&text).map_err(|err| err.to_string())
        }
        (None, Some(name)) => presets::by_name(name).ok_or_else(|| {
            format!(
                "unknown preset {:?}; available: {}",
                name,
                presets::PRESET_NAMES.join(", ")
            )
        }),
        _ => Err("pass exactly one of --input_csv_file or --preset".to_string()),
    }
}

fn print_summary(result: &GameResult) {
    println!("game value (expected payoff to Player 1): {:.6}", result.game_value);

    println!("\nPlayer 1 equilibrium strategy:");
    let payoffs1 = evaluate_pure_strategies(&result.payoff_matrix12, &result.player2_strategy);
    for (entry, payoff) in result.player1_strategy.iter().zip(payoffs1.iter()) {
        println!(
            "  {:<20} p = {:.6}   pure-strategy payoff = {:.6}",
            entry.label, entry.probability, payoff
        );
    }

    println!("\nPlayer 2 equilibrium strategy:");
    let payoffs2 = evaluate_pure_strategies(&result.payoff_matrix21, &result.player1_strategy);
    for (entry, payoff) in result.player2_strategy.iter().zip(payoffs2.iter()) {
        println!(
            "  {:<20} p = {:.6}   pure-strategy payoff = {:.6}",
            entry.label, entry.probability, payoff
        );
    }
}

fn main() {
    env_logger::init();

    let opt = Opt::from_args();
    debug!("{:?}", opt);

    let mut input = match load_input(&opt) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    if opt.clamp {
        input = clamp_game_input_ui(&input);
    }

    let game = match parse_game_input(&input) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("invalid game input: {}", err);
            process::exit(1);
        }
    };
    info!(
        "solving a {}x{} matrix game",
        game.payoff_matrix.len(),
        game.payoff_matrix[0].len()
    );

    let backend = SimplexSolver::default();
    match solve_game(&backend, &game) {
        Ok(result) => {
            if opt.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(encoded) => println!("{}", encoded),
                    Err(err) => {
                        eprintln!("cannot serialize result: {}", err);
                        process::exit(1);
                    }
                }
            } else {
                print_summary(&result);
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
