//! `seed-user`: create a user or rotate their password hash.
//!
//! ```text
//! SEED_PASSWORD=... seed-user --email admin@example.com --name Admin
//! ```
//!
//! The database comes from the same configuration as the web server
//! (`DATABASE_URL`, `FORMCRAFT__DATABASE__URL` or `formcraft.toml`).

use anyhow::{Context, Result};
use backend::password::WorkFactor;
use backend::seed::{seed_credentials, SeedRequest};
use backend::{Database, PgStore, Settings};
use clap::Parser;
use store::UpsertOutcome;

#[derive(Debug, Parser)]
#[command(name = "seed-user", about = "Create a user or replace their password hash")]
struct Args {
    /// Email address identifying the user.
    #[arg(long, env = "SEED_EMAIL")]
    email: String,

    /// Display name, only used when the user is created.
    #[arg(long, env = "SEED_NAME")]
    name: String,

    /// Plaintext password. Prefer the environment variable over the flag.
    #[arg(long, env = "SEED_PASSWORD", hide_env_values = true)]
    password: String,

    /// Argon2 memory cost in KiB.
    #[arg(long, default_value_t = WorkFactor::default().memory_kib)]
    memory_kib: u32,

    /// Argon2 passes.
    #[arg(long, default_value_t = WorkFactor::default().iterations)]
    iterations: u32,

    /// Argon2 lanes.
    #[arg(long, default_value_t = WorkFactor::default().parallelism)]
    parallelism: u32,
}

impl Args {
    fn work_factor(&self) -> WorkFactor {
        WorkFactor {
            memory_kib: self.memory_kib,
            iterations: self.iterations,
            parallelism: self.parallelism,
        }
    }

    fn request(&self) -> SeedRequest {
        SeedRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::new().context("Failed to load configuration")?;
    backend::telemetry::init_tracing(&settings.log.filter);

    let request = args.request();
    let work = args.work_factor();

    let result = Database::scoped(&settings.database, |db| async move {
        let store = PgStore::new(&db);
        let report = seed_credentials(&store, &request, work).await?;
        Ok(report)
    })
    .await;

    match result {
        Ok(report) => {
            let verb = match report.outcome {
                UpsertOutcome::Created => "Created",
                UpsertOutcome::Updated => "Updated password for",
            };
            println!("{verb} {}", report.user.email);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "seeding failed");
            Err(e)
        }
    }
}
