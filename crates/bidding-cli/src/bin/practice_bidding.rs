use anyhow::{Context, Result};
use bidding_cli::logging::init_logging;
use bidding_cli::repl::Repl;
use bidding_cli::terminal::Terminal;
use bidding_core::RandomDealer;
use bidding_engine::{DoubleDummyOracle, Mode, Session, Settings, System};
use bidding_solver::DdsOracle;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Practise bidding with a partner while the opponents stay silent",
    long_about = None
)]
struct Args {
    /// YAML bid system to use instead of the built-in one
    #[arg(long, env = "PRACTICE_BIDDING_SYSTEM")]
    system: Option<PathBuf>,

    /// Seed for dealing and for automatic bid choices
    #[arg(short, long, env = "PRACTICE_BIDDING_SEED")]
    seed: Option<u64>,

    /// Let the engine bid South's hand too
    #[arg(short, long)]
    automatic: bool,

    /// Stop after this many finished boards (automatic mode defaults to 1)
    #[arg(short = 'n', long)]
    boards: Option<u32>,

    /// Give up after this many unrecognised answers in a row
    #[arg(long)]
    max_tries: Option<usize>,

    /// Print one JSON line per finished board
    #[arg(long)]
    json: bool,

    /// Skip the double-dummy analysis of the final contract
    #[arg(long)]
    no_solver: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn load_system(path: Option<&Path>) -> Result<System> {
    match path {
        Some(path) => {
            let yaml = fs::read_to_string(path)
                .with_context(|| format!("reading bid system {}", path.display()))?;
            System::from_yaml(&yaml).with_context(|| format!("parsing bid system {}", path.display()))
        }
        None => System::standard().context("parsing built-in bid system"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let system = load_system(args.system.as_deref())?;
    let tree = system.build().context("building bid tree")?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, system = %system.name, bids = tree.len(), "starting practice session");

    let settings = Settings {
        mode: if args.automatic { Mode::Automatic } else { Mode::Interactive },
        ..Settings::default()
    };
    let dealer = RandomDealer::new(StdRng::seed_from_u64(seed));
    let session = Session::new(tree, Box::new(dealer), StdRng::seed_from_u64(seed.wrapping_add(1)))
        .with_settings(settings);

    let solver = DdsOracle;
    let oracle: Option<&dyn DoubleDummyOracle> = if args.no_solver { None } else { Some(&solver) };
    let boards = args.boards.or(args.automatic.then_some(1));

    let mut terminal = Terminal;
    let reports = Repl::new(session, &mut terminal, oracle)
        .with_max_tries(args.max_tries)
        .with_json(args.json)
        .run(boards)?;
    info!(boards = reports.len(), "session finished");
    Ok(())
}
