use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use seastrike::{init_logging, Game, GameConfig};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", env!("CARGO_BIN_NAME"));
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let config = GameConfig::default();
    let mut game = Game::new(&config, &mut rng)?;

    let size = config.board_size as isize;
    let mut targets: Vec<(isize, isize)> = (0..size)
        .flat_map(|r| (0..size).map(move |c| (r, c)))
        .collect();
    targets.shuffle(&mut rng);

    for (r, c) in targets {
        if game.is_over() {
            break;
        }
        game.attack(r, c);
    }

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
