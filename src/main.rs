use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use connect_four::config::AppConfig;
use connect_four::game::{GameOutcome, GameState, MoveError, Player, COLS};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a friend or the computer")]
struct Cli {
    /// Opponent: pvp (local two-player), easy (random computer), smart (minimax computer)
    #[arg(long, default_value = "smart")]
    mode: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the computer's search depth
    #[arg(long)]
    depth: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.ai.search_depth = depth;
    }
    config.validate()?;

    let mut computer: Option<Box<dyn Agent>> = match cli.mode.as_str() {
        "pvp" => None,
        "easy" => Some(Box::new(RandomAgent::new())),
        "smart" => Some(Box::new(MinimaxAgent::new(config.ai.search_depth))),
        other => bail!("unknown mode '{}' (expected 'pvp', 'easy', or 'smart')", other),
    };
    if let Some(agent) = &computer {
        log::info!(
            "starting {} game (depth {})",
            agent.name(),
            config.ai.search_depth
        );
    }

    run_game(computer.as_deref_mut())
}

/// Host a game to completion. The human plays Red (and also Yellow in pvp
/// mode); the computer, when present, plays Yellow.
fn run_game(mut computer: Option<&mut (dyn Agent + 'static)>) -> Result<()> {
    let stdin = io::stdin();
    let mut state = GameState::initial();

    loop {
        println!("\n{}", state.board());

        if let Some(outcome) = state.outcome() {
            match outcome {
                GameOutcome::Winner(player) => println!("{} wins!", player.name()),
                GameOutcome::Draw => println!("It's a draw!"),
            }
            return Ok(());
        }

        let current = state.current_player();
        let column = match computer.as_mut() {
            Some(agent) if current == Player::Yellow => {
                let col = agent.select_action(&state);
                log::debug!("{} plays column {col}", agent.name());
                println!("{} plays column {col}", agent.name());
                col
            }
            _ => prompt_column(&stdin, current)?,
        };

        match state.apply_move_mut(column) {
            Ok(()) => {}
            Err(MoveError::ColumnFull) => {
                println!("Column {column} is full, choose another.");
            }
            Err(MoveError::InvalidColumn) => {
                println!("Enter a column between 0 and {}.", COLS - 1);
            }
            // Unreachable: the outcome check above ends the loop first
            Err(MoveError::GameOver) => {}
        }
    }
}

fn prompt_column(stdin: &io::Stdin, player: Player) -> Result<usize> {
    loop {
        print!("{} > ", player.name());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            bail!("input closed before the game finished");
        }
        match line.trim().parse::<usize>() {
            Ok(col) => return Ok(col),
            Err(_) => println!("Enter a column between 0 and {}.", COLS - 1),
        }
    }
}
