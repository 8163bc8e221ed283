//! Run seeded policy-versus-policy games and print the results.
//!
//! Usage: cargo run --bin azul-selfplay -- --games 100 --seed 7

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use rust_azul::core::{GameConfig, PlayerId, PlayerMap};
use rust_azul::display::render_state;
use rust_azul::play::{MatchConfig, MatchRunner};
use rust_azul::policy::{FirstMovePolicy, MovePolicy, UniformPolicy};
use rust_azul::rules::{GameResult, RulesEngine};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    /// Uniformly random legal move
    Uniform,
    /// First legal move in enumeration order
    First,
}

impl PolicyKind {
    fn build(self) -> Box<dyn MovePolicy> {
        match self {
            PolicyKind::Uniform => Box::new(UniformPolicy),
            PolicyKind::First => Box::new(FirstMovePolicy),
        }
    }
}

/// Play two-player tile-drafting games between move policies
#[derive(Parser, Debug)]
#[command(name = "azul-selfplay")]
#[command(about = "Play seeded games between move policies", long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Seed of the first game; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Abandon a game after this many moves
    #[arg(long, default_value_t = 1000)]
    max_moves: usize,

    /// Print the final boards of every game
    #[arg(long)]
    show_boards: bool,

    /// Policy for player 0
    #[arg(long, value_enum, default_value_t = PolicyKind::Uniform)]
    player0: PolicyKind,

    /// Policy for player 1
    #[arg(long, value_enum, default_value_t = PolicyKind::Uniform)]
    player1: PolicyKind,

    /// Number of factory displays
    #[arg(long, default_value_t = 5)]
    factories: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if args.games == 0 {
        bail!("--games must be at least 1");
    }

    let config = GameConfig::new().with_factory_count(args.factories);
    let engine = RulesEngine::new(config).context("invalid game configuration")?;
    let runner = MatchRunner::new(
        engine,
        args.player0.build(),
        args.player1.build(),
        MatchConfig::new()
            .with_seed(args.seed)
            .with_max_moves(args.max_moves),
    );

    info!(
        games = args.games,
        seed = args.seed,
        player0 = runner.policy_name(PlayerId::new(0)),
        player1 = runner.policy_name(PlayerId::new(1)),
        "starting"
    );

    let mut wins: PlayerMap<usize> = PlayerMap::with_value(0);
    let mut ties = 0;
    let mut unfinished = 0;
    let mut total_score: PlayerMap<i64> = PlayerMap::with_value(0);

    for i in 0..args.games {
        let seed = args.seed.wrapping_add(i as u64);
        let (record, state) = runner
            .play(seed)
            .with_context(|| format!("game with seed {seed} failed"))?;

        let outcome = match record.result {
            Some(GameResult::Winner(p)) => {
                wins[p] += 1;
                format!("{p} wins")
            }
            Some(GameResult::TieBreak(p)) => {
                wins[p] += 1;
                ties += 1;
                format!("{p} wins on tie-break")
            }
            None => {
                unfinished += 1;
                "unfinished".to_string()
            }
        };
        for (p, score) in record.scores.iter() {
            total_score[p] += i64::from(*score);
        }

        println!(
            "seed {:>6}  rounds {:>2}  moves {:>3}  score {:>3} - {:<3}  {}",
            record.seed,
            record.rounds,
            record.moves,
            record.scores[PlayerId::new(0)],
            record.scores[PlayerId::new(1)],
            outcome
        );
        if args.show_boards {
            println!("{}", render_state(&state));
        }
    }

    let games = args.games as f64;
    println!();
    for p in PlayerId::all() {
        println!(
            "{p} ({}): {} wins, mean score {:.1}",
            runner.policy_name(p),
            wins[p],
            total_score[p] as f64 / games
        );
    }
    println!("tie-breaks: {ties}, unfinished: {unfinished}");

    Ok(())
}
