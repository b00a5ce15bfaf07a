use campus::cli::{DEMO_USERS, seed_demo_users};
use campus_auth::create_access_token;
use campus_config::JwtConfig;
use campus_db::{init_db_pool, run_migrations};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "campus-cli")]
#[command(about = "Campus CLI - Administrative tools for the Campus API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a bearer token for an email, signed with JWT_SECRET
    IssueToken {
        /// Email address the token resolves to
        #[arg(short = 'e', long)]
        email: String,
    },
    /// Insert the demo students and teachers
    Seed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken { email } => handle_issue_token(&email),
        Commands::Seed => handle_seed().await,
    }
}

fn handle_issue_token(email: &str) {
    match create_access_token(email, &JwtConfig::from_env()) {
        Ok(token) => println!("{token}"),
        Err(e) => {
            eprintln!("❌ Error issuing token: {e}");
            std::process::exit(1);
        }
    }
}

async fn handle_seed() {
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        eprintln!("❌ DATABASE_URL must be set");
        std::process::exit(1);
    });

    let pool = match init_db_pool(&database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {e}");
        std::process::exit(1);
    }

    match seed_demo_users(&pool).await {
        Ok(inserted) => {
            println!("✅ Seeded {inserted} of {} demo users", DEMO_USERS.len());
            for user in &DEMO_USERS {
                println!("   {} ({}) {}", user.email, user.role, user.reference);
            }
        }
        Err(e) => {
            eprintln!("❌ Error seeding database: {e}");
            std::process::exit(1);
        }
    }
}
