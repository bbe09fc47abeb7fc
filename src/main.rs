use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seastrike::{init_logging, play, Game, GameConfig, BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, PIECE_LENGTHS};

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet", long_about = None)]
struct Cli {
    /// Width and height of the square board.
    #[arg(long, default_value_t = BOARD_SIZE)]
    size: usize,
    /// Comma-separated piece lengths, placed in order.
    #[arg(long, value_delimiter = ',', default_values_t = PIECE_LENGTHS.to_vec())]
    pieces: Vec<usize>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Random draws allowed per piece before setup fails.
    #[arg(long, default_value_t = MAX_PLACEMENT_ATTEMPTS)]
    max_attempts: usize,
    /// Show unhit pieces on the board.
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };
    let config = GameConfig::new(cli.size, cli.pieces).with_max_placement_attempts(cli.max_attempts);
    let mut game = Game::new(&config, &mut rng)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(&mut game, &mut stdin.lock(), &mut stdout.lock(), cli.reveal)
}
