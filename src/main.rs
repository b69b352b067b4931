//! FitTrack CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use uuid::Uuid;

use fittrack::adapters::badge_api::HttpBadgeStore;
use fittrack::adapters::sqlite::{
    all_embedded_migrations, create_pool, Migrator, PoolConfig, SqliteGoalRepository,
    SqliteUserRepository,
};
use fittrack::infrastructure::config::ConfigLoader;
use fittrack::infrastructure::logging::LoggerGuard;
use fittrack::services::{
    BadgeAwardService, HousekeepingScheduler, HousekeepingService, Job,
};

#[derive(Parser)]
#[command(name = "fittrack", about = "FitTrack award pipeline and housekeeping", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the housekeeping scheduler and run until interrupted
    Run,
    /// Run a single housekeeping job once
    Housekeeping {
        #[arg(value_enum)]
        job: JobArg,
    },
    /// Operate directly on the remote badge store
    Badges {
        #[command(subcommand)]
        command: BadgeCommands,
    },
}

#[derive(Subcommand)]
enum BadgeCommands {
    /// List a user's badges
    List { user_id: Uuid },
    /// Best-effort revoke of a badge by id
    Revoke { badge_id: Uuid },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum JobArg {
    WeeklySummary,
    InactivitySweep,
    GoalArchival,
    CompletionReport,
}

impl From<JobArg> for Job {
    fn from(arg: JobArg) -> Self {
        match arg {
            JobArg::WeeklySummary => Job::WeeklySummary,
            JobArg::InactivitySweep => Job::InactivitySweep,
            JobArg::GoalArchival => Job::GoalArchival,
            JobArg::CompletionReport => Job::CompletionReport,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::load()?;
    let _logger = LoggerGuard::init(&config.logging)?;

    match cli.command {
        Commands::Run => {
            let service = build_housekeeping(&config).await?;
            let scheduler = HousekeepingScheduler::new(Arc::new(service));
            let handle = scheduler.spawn();

            tokio::signal::ctrl_c().await?;
            info!("shutdown requested");
            handle.shutdown().await;
        }
        Commands::Housekeeping { job } => {
            let service = build_housekeeping(&config).await?;
            let affected = service.run_job(job.into()).await?;
            println!("{affected}");
        }
        Commands::Badges { command } => {
            let store = Arc::new(HttpBadgeStore::from_config(&config.badge_service)?);
            let awards = BadgeAwardService::new(store);
            match command {
                BadgeCommands::List { user_id } => {
                    for badge in awards.badges_for_user(user_id).await {
                        println!("{}\t{}\t{}", badge.id, badge.name, badge.icon_url);
                    }
                }
                BadgeCommands::Revoke { badge_id } => {
                    awards.revoke(badge_id).await;
                }
            }
        }
    }

    Ok(())
}

async fn build_housekeeping(
    config: &fittrack::Config,
) -> Result<HousekeepingService<SqliteGoalRepository, SqliteUserRepository>> {
    let pool = create_pool(
        &config.database.url,
        Some(PoolConfig {
            max_connections: config.database.max_connections,
            ..PoolConfig::default()
        }),
    )
    .await?;

    let migrator = Migrator::new(pool.clone());
    let applied = migrator.run_embedded_migrations(all_embedded_migrations()).await?;
    if applied > 0 {
        info!(applied, "applied database migrations");
    }

    Ok(HousekeepingService::new(
        Arc::new(SqliteGoalRepository::new(pool.clone())),
        Arc::new(SqliteUserRepository::new(pool)),
        config.housekeeping.clone(),
    ))
}
