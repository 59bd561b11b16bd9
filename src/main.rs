use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use word_hunt::{Puzzle, PuzzleConfig};

const DEFAULT_WORDS: [&str; 12] = [
    "PUZZLE",
    "SEARCH",
    "WORD",
    "GAME",
    "BRAIN",
    "LOGIC",
    "FIND",
    "HIDDEN",
    "LETTERS",
    "GRID",
    "SOLVE",
    "CHALLENGE",
];

/// Generate a word search puzzle and print it.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows in the grid.
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of columns in the grid.
    #[arg(long, default_value_t = 12)]
    cols: usize,

    /// Random placements tried for each word before giving up on it.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_attempts: usize,

    /// Seed to regenerate a puzzle.
    #[arg(long)]
    seed: Option<u64>,

    /// Only place words left to right or top to bottom.
    #[arg(long)]
    forward_only: bool,

    /// Fill the empty cells with letters from the words only.
    #[arg(long)]
    word_letters: bool,

    /// Print where each word is hidden.
    #[arg(long)]
    key: bool,

    /// Words to hide. Defaults to a built-in list.
    words: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let words: Vec<String> = if args.words.is_empty() {
        DEFAULT_WORDS.iter().map(|word| word.to_string()).collect()
    } else {
        args.words.iter().map(|word| word.to_uppercase()).collect()
    };

    let config = PuzzleConfig {
        num_rows: args.rows,
        num_columns: args.cols,
        max_attempts: args.max_attempts,
        allow_backward_words: !args.forward_only,
        use_only_given_letters_in_grid: args.word_letters,
    };

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let puzzle = Puzzle::generate(&words, &config, &mut StdRng::seed_from_u64(seed))?;

    println!("{puzzle}");

    if !puzzle.is_complete() {
        eprintln!("Could not fit: {}", puzzle.dropped().join(", "));
    }

    if args.key {
        println!("Key:");
        for placement in puzzle.placements() {
            println!(
                "  {}: {:?} -> {:?} ({})",
                placement.word, placement.start, placement.end, placement.direction
            );
        }
        println!();
    }

    eprintln!("Seed: {seed}");

    Ok(())
}
