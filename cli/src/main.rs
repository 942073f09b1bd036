use std::path::Path;

use clap::{Parser, Subcommand};
use learnhub::auth::hash_password;
use learnhub::model::entity::{UserEntity, UserEntityCreate};
use learnhub::model::{DatabaseError, DbConnection, ModelManager, seed};

#[derive(Parser, Debug)]
#[command(about = "CLI tool for managing the learnhub DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migrations, then seed the demo catalog and demo student.
    /// Safe to run repeatedly.
    Seed,

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}

/// User management
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
}

#[tokio::main]
async fn main() -> learnhub::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_url = std::env::var("DATABASE_URL").expect("DATABASE_URL is not set");
    let db_con = DbConnection::connect(&db_url)?;
    let mm = ModelManager::new(db_con);

    match args.command {
        Commands::Seed => {
            let migrator = sqlx::migrate::Migrator::new(Path::new("./migrations"))
                .await
                .map_err(DatabaseError::from)?;
            migrator.run(mm.executor()).await.map_err(DatabaseError::from)?;

            seed::seed_demo(&mm).await?;
            println!("Seeding finished.");
        }
        Commands::User { action } => match action {
            UserCommands::Add {
                email,
                password,
                name,
            } => {
                let hash = hash_password(&password).map_err(DatabaseError::from)?;
                let user = UserEntity::create(
                    &mm,
                    UserEntityCreate {
                        email,
                        password_hash: hash,
                        name,
                    },
                )
                .await?;

                println!("Created user {} ({})", user.email(), user.id());
            }
        },
    }

    Ok(())
}
