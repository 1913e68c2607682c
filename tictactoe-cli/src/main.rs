use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tictactoe::{Board, Move, Notation, Player};
use tictactoe_ai::{AiConfig, AiEngine, Evaluator, OpeningPolicy};
use tictactoe_cli::{play_game, EngineSource, HumanSource};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tictactoe-cli")]
#[command(version, about = "Minimax Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    /// JSON engine config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// RNG seed for the opening move (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// How X picks its first move (overrides the config file)
    #[arg(long, global = true, value_enum)]
    opening: Option<Opening>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Let the engine play both sides
    Selfplay {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: usize,
    },

    /// Play against the engine on the terminal
    Play {
        /// Side the human plays
        #[arg(long, value_enum, default_value = "x")]
        human: Side,
    },

    /// Show the minimax value of every legal move, e.g. `XX./OO./...`
    Analyze {
        notation: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Opening {
    Random,
    Search,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tictactoe_cli=info".parse()?)
                .add_directive("tictactoe_ai=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Selfplay { games } => selfplay(config, games),
        Commands::Play { human } => play(config, human),
        Commands::Analyze { notation } => analyze(config, &notation),
    }
}

/// 读取配置文件并应用命令行覆盖
fn load_config(cli: &Cli) -> Result<AiConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            AiConfig::from_json(&text)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => AiConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(opening) = cli.opening {
        config.opening = match opening {
            Opening::Random => OpeningPolicy::Random,
            Opening::Search => OpeningPolicy::Search,
        };
    }

    Ok(config)
}

fn selfplay(config: AiConfig, games: usize) -> Result<()> {
    // 随机开局只发生在 X 一方，随机数序列在对局之间延续
    let x_engine = AiEngine::new(config.clone());
    info!(
        "Self-play with opening {:?}, seed {:?}",
        x_engine.config().opening,
        x_engine.config().seed
    );
    let mut x = EngineSource::new(x_engine);
    let mut o = EngineSource::new(AiEngine::new(config));
    let mut draws = 0;

    for game in 1..=games {
        let record = play_game(Board::initial(), &mut x, &mut o, |_, _, _| {})?;

        println!("Game {}: {}", game, record.result);
        print!("{}", record.board);
        println!();

        if record.result.winner().is_none() {
            draws += 1;
        } else {
            warn!("Game {} was not a draw: {}", game, record.result);
        }
    }

    info!("{} games, {} draws", games, draws);
    Ok(())
}

fn play(config: AiConfig, human: Side) -> Result<()> {
    let stdin = io::stdin();
    let mut person = HumanSource::new(stdin.lock(), io::stdout());
    let mut engine = EngineSource::new(AiEngine::new(config));

    print!("{}", Board::initial());
    let record = match human {
        Side::X => play_game(Board::initial(), &mut person, &mut engine, report_move)?,
        Side::O => play_game(Board::initial(), &mut engine, &mut person, report_move)?,
    };

    println!();
    println!("{} (utility {})", record.result, Evaluator::result_value(record.result));
    Ok(())
}

fn report_move(board: &Board, player: Player, mv: Move) {
    println!();
    println!("{} played {}", player, mv);
    print!("{}", board);
}

fn analyze(config: AiConfig, notation: &str) -> Result<()> {
    let board = Notation::parse(notation).context("invalid board notation")?;
    print!("{}", board);

    if let Some(result) = board.outcome() {
        println!("Game over: {} (utility {})", result, Evaluator::utility(&board));
        return Ok(());
    }

    let player = board.player();
    println!("{} to move", player);

    let mut engine = AiEngine::new(config);
    for (mv, value) in engine.evaluate_moves(&board) {
        let verdict = match (player, value) {
            (_, 0) => "draw",
            (Player::X, v) if v > 0 => "win",
            (Player::O, v) if v < 0 => "win",
            _ => "loss",
        };
        println!("  {}  value {:>2}  {}", mv, value, verdict);
    }
    println!("{} nodes searched", engine.nodes_searched());
    Ok(())
}
