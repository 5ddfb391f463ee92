use clap::Parser;
use holdem_advisor::advice::{Position, SizingScheme, StrategyMode};
use holdem_advisor::advisor::{Advisor, AdvisorConfig};
use holdem_advisor::equity::{SimulationConfig, DEFAULT_TRIALS};
use holdem_advisor::hand::{Board, HoleCards};
use holdem_advisor::lookup::Language;
use holdem_advisor::snapshot::HandSnapshot;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "poker-advisor", version)]
#[command(about = "Texas Hold'em equity and action advice for one decision point")]
struct Cli {
    /// Hero's hole cards, e.g. "As Kd"
    #[arg(long)]
    hero: HoleCards,
    /// Revealed community cards, e.g. "Qh 7c 2d"
    #[arg(long, default_value = "")]
    board: Board,
    /// Number of 52-card decks in the shoe
    #[arg(long, default_value_t = 1)]
    decks: usize,
    /// Active opponents (defaults to the number of opponent bets, at least 1)
    #[arg(long)]
    opponents: Option<usize>,
    #[arg(long, default_value_t = 0)]
    main_pot: u64,
    /// Hero's bet in the current round
    #[arg(long, default_value_t = 0)]
    hero_bet: u64,
    /// Opponents' bets in the current round, comma separated
    #[arg(long, value_delimiter = ',')]
    opponent_bets: Vec<u64>,
    #[arg(long, default_value_t = 1000)]
    stack: u64,
    /// conservative, aggressive or maniac
    #[arg(long, default_value = "aggressive")]
    strategy: StrategyMode,
    /// early, middle, late or blinds
    #[arg(long)]
    position: Option<Position>,
    /// en or zh
    #[arg(long, default_value = "en")]
    lang: Language,
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,
    #[arg(long)]
    seed: Option<u64>,
    /// standard or texture
    #[arg(long, default_value = "standard")]
    sizing: SizingScheme,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut simulation = SimulationConfig::default().with_trials(cli.trials);
    if let Some(seed) = cli.seed {
        simulation = simulation.with_seed(seed);
    }
    let config = AdvisorConfig::default()
        .with_simulation(simulation)
        .with_sizing(cli.sizing)
        .with_language(cli.lang);

    let snapshot = HandSnapshot {
        deck_count: cli.decks,
        opponents: cli.opponents,
        main_pot: cli.main_pot,
        hero_bet: cli.hero_bet,
        opponent_bets: cli.opponent_bets,
        stack: cli.stack,
        strategy: cli.strategy,
        position: cli.position,
        ..HandSnapshot::new(cli.hero, &cli.board)
    };

    match Advisor::new(config).calculate(&snapshot) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
