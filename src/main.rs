use std::time::Duration;

use broadside::transport::tcp;
use broadside::{
    init_logging, play_local, AiPlayer, CliPlayer, EngineConfig, GameError, GameSummary, Outcome, Player, ShipSizes,
    TurnEngine, DEFAULT_PORT, HANDSHAKE_TOKEN,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::Rng;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Args, Clone, Debug)]
struct SessionArgs {
    #[arg(long, value_enum, default_value_t = PlayerType::Human)]
    player: PlayerType,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Give up if the peer sends nothing for this many milliseconds")]
    read_timeout_ms: Option<u64>,
    #[arg(long, default_value_t = HANDSHAKE_TOKEN, help = "Handshake sentinel byte both peers must agree on")]
    token: u8,
}

impl SessionArgs {
    fn engine_config(&self) -> EngineConfig {
        let config = EngineConfig::default().with_handshake_token(self.token);
        match self.read_timeout_ms {
            Some(ms) => config.with_read_timeout(Duration::from_millis(ms)),
            None => config,
        }
    }

    fn player(&self) -> Box<dyn Player> {
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        match self.player {
            PlayerType::Human => Box::new(CliPlayer::stdio(seed)),
            PlayerType::Ai => Box::new(AiPlayer::seeded(seed)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play AI against AI on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = ShipSizes::default())]
        ships: ShipSizes,
    },
    /// Dial a waiting peer, send the fleet configuration and attack first.
    Active {
        #[arg(long, default_value_t = format!("127.0.0.1:{}", DEFAULT_PORT))]
        connect: String,
        #[arg(long, default_value_t = ShipSizes::default(), help = "Comma separated ship sizes")]
        ships: ShipSizes,
        #[command(flatten)]
        session: SessionArgs,
    },
    /// Wait for a peer to dial in and receive its fleet configuration.
    Passive {
        #[arg(long, default_value_t = format!("0.0.0.0:{}", DEFAULT_PORT))]
        bind: String,
        #[command(flatten)]
        session: SessionArgs,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, ships } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            println!("Starting local AI vs AI game (seed {})...", seed);
            let (active, passive) = play_local(seed, seed.wrapping_add(1), &ships, EngineConfig::default()).await?;
            report("active", &active);
            report("passive", &passive);
        }
        Commands::Active {
            connect,
            ships,
            session,
        } => {
            println!("Connecting to {}...", connect);
            let stream = tcp::dial(&connect).await?;
            println!("Connected. Sending fleet [{}].", ships);
            let mut engine = TurnEngine::with_config(session.player(), session.engine_config());
            conclude(engine.run_active(stream, &ships).await)?;
        }
        Commands::Passive { bind, session } => {
            let listener = TcpListener::bind(&bind).await?;
            println!("Waiting for a player to connect on {}...", bind);
            let stream = tcp::accept(&listener).await?;
            let mut engine = TurnEngine::with_config(session.player(), session.engine_config());
            conclude(engine.run_passive(stream).await)?;
        }
    }
    Ok(())
}

fn conclude(result: Result<GameSummary, GameError>) -> anyhow::Result<()> {
    match result {
        Ok(summary) => {
            report("you", &summary);
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Game ended with an error: {}", e)),
    }
}

fn report(side: &str, summary: &GameSummary) {
    let verdict = match summary.outcome {
        Outcome::Victory => "won",
        Outcome::Defeat => "lost",
        Outcome::PeerDisconnected => "won (opponent left)",
    };
    println!(
        "{} ({:?}) {} after {} attacks sent, {} received",
        side, summary.role, verdict, summary.attacks_sent, summary.attacks_received
    );
}
