use chess_bot::agent::player::Player;
use chess_bot::game_repr::START_FEN;
use chess::ChessMove;
use chess_bot::{ChessPosition, Difficulty, EvalStyle, NegamaxPlayer, PositionResult, SearchConfig, SearchPosition, TurnTimer};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EvalArg {
    Tapered,
    Discrete,
}

impl From<EvalArg> for EvalStyle {
    fn from(arg: EvalArg) -> Self {
        match arg {
            EvalArg::Tapered => EvalStyle::Tapered,
            EvalArg::Discrete => EvalStyle::Discrete,
        }
    }
}

/// Pick a move for a chess position
#[derive(Debug, Parser)]
#[command(name = "chess_bot", version, about)]
struct Cli {
    /// Starting position in FEN
    #[arg(long, default_value = START_FEN)]
    fen: String,

    /// Moves to play from the starting position, in UCI notation (e2e4,e7e5)
    #[arg(long, value_delimiter = ',')]
    moves: Vec<String>,

    /// Milliseconds left on the clock of the side to move
    #[arg(long, default_value_t = 60_000)]
    remaining_ms: u64,

    /// Preset depth ceiling; --depth overrides it
    #[arg(long, value_enum)]
    difficulty: Option<DifficultyArg>,

    /// Iterative deepening ceiling in plies
    #[arg(long)]
    depth: Option<i32>,

    /// Leaf evaluator
    #[arg(long, value_enum, default_value_t = EvalArg::Tapered)]
    eval: EvalArg,

    /// Transposition table buckets
    #[arg(long)]
    tt_capacity: Option<usize>,

    /// Plies of capture-only search past the horizon
    #[arg(long)]
    quiescence_limit: Option<u8>,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let mut config = self
            .difficulty
            .map(|d| Difficulty::from(d).config())
            .unwrap_or_default()
            .with_eval_style(self.eval.into());

        if let Some(depth) = self.depth {
            config = config.with_max_depth(depth);
        }
        if let Some(capacity) = self.tt_capacity {
            config = config.with_tt_capacity(capacity);
        }
        if let Some(limit) = self.quiescence_limit {
            config = config.with_quiescence_limit(limit);
        }
        config
    }

    fn position(&self) -> PositionResult<ChessPosition> {
        let mut pos = ChessPosition::from_fen(&self.fen)?;
        for uci in &self.moves {
            let mv = pos.parse_move(uci)?;
            pos.make_move(mv);
        }
        Ok(pos)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut pos = match cli.position() {
        Ok(pos) => pos,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let config = cli.config();
    log::debug!("search config: {:?}", config);

    let mut bot: NegamaxPlayer<ChessMove> = NegamaxPlayer::new(config, "chess_bot".to_string());
    let timer = TurnTimer::start(cli.remaining_ms);

    match bot.get_move(&mut pos, &timer) {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }

    ExitCode::SUCCESS
}
