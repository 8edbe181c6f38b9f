use clap::{Parser, Subcommand};
use leaderboard_client::{ClientConfig, ClientError, LeaderboardClient};
use tracing::debug;

#[derive(Subcommand)]
enum Command {
    /// Show the leaderboard
    Top {
        /// Maximum number of rows (0 or omitted shows all)
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// List every score recorded for a game
    Scores { game: String },
    /// Submit a score; only improvements on the gamer's best are kept
    Submit {
        nickname: String,
        game: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },
}

#[derive(Parser)]
#[command(name = "leaderboard")]
#[command(about = "Leaderboard API command line client")]
struct Args {
    /// Base URL of the leaderboard API
    #[arg(
        long,
        env = "LEADERBOARD_API_URL",
        default_value = "http://localhost:3001"
    )]
    api_url: String,

    /// Extra attempts for transient failures
    #[arg(long)]
    retries: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leaderboard_client=warn,leaderboard=info".into()),
        )
        .init();

    let args = Args::parse();

    let client = match build_client(&args) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&client, args.command).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

fn build_client(args: &Args) -> Result<LeaderboardClient, ClientError> {
    let mut config = ClientConfig::new(&args.api_url)?;
    if let Some(retries) = args.retries {
        config = config.with_max_retries(retries);
    }
    debug!(base_url = %config.base_url, "client_configured");
    LeaderboardClient::new(config)
}

async fn run(client: &LeaderboardClient, command: Command) -> Result<(), ClientError> {
    match command {
        Command::Top { limit } => {
            let rows = client.high_scores(limit).await?;
            if rows.is_empty() {
                println!("No scores yet");
            }
            for row in rows {
                println!("{:<24} {:<20} {:>10}", row.game, row.nickname, row.points);
            }
        }
        Command::Scores { game } => {
            let rows = client.scores_for_game(&game).await?;
            if rows.is_empty() {
                println!("No scores for '{game}'");
            }
            for row in rows {
                println!("{:<20} {:>10}", row.gamer.nickname, row.points);
            }
        }
        Command::Submit {
            nickname,
            game,
            points,
        } => {
            client.submit_score(&nickname, &game, points).await?;
            println!("✅ Recorded {points} for {nickname} on '{game}'");
        }
    }
    Ok(())
}
