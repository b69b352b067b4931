//! Periodic housekeeping: four independent maintenance sweeps.
//!
//! Each job derives its own cutoff from the clock at invocation time, so a
//! run is stateless and idempotent against its own window: re-running
//! immediately either matches nothing new or re-applies a state the rows
//! already hold. Jobs are isolated from one another; one failing run is
//! logged and the ticker keeps going.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::domain::errors::DomainResult;
use crate::domain::models::HousekeepingConfig;
use crate::domain::ports::{GoalRepository, UserRepository};

/// The four housekeeping jobs, by name (used for logging and the CLI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    WeeklySummary,
    InactivitySweep,
    GoalArchival,
    CompletionReport,
}

impl Job {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeeklySummary => "weekly_summary",
            Self::InactivitySweep => "inactivity_sweep",
            Self::GoalArchival => "goal_archival",
            Self::CompletionReport => "completion_report",
        }
    }
}

/// Housekeeping sweeps over goals and users.
///
/// Every job is an ordinary `Result`-returning method so it can be invoked
/// once from tests or the CLI; the scheduler only adds cadence on top.
pub struct HousekeepingService<G, U>
where
    G: GoalRepository,
    U: UserRepository,
{
    goals: Arc<G>,
    users: Arc<U>,
    config: HousekeepingConfig,
}

impl<G, U> HousekeepingService<G, U>
where
    G: GoalRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(goals: Arc<G>, users: Arc<U>, config: HousekeepingConfig) -> Self {
        Self { goals, users, config }
    }

    /// Report-only: count goals completed inside the summary window.
    pub async fn weekly_summary(&self) -> DomainResult<u64> {
        let now = Utc::now();
        let window_start = now - chrono::Duration::days(self.config.summary_window_days);
        let completed = self.goals.count_completed_between(window_start, now).await?;
        info!(
            completed,
            window_days = self.config.summary_window_days,
            "weekly summary: goals completed in window"
        );
        Ok(completed)
    }

    /// Flip the logged-in flag off for users idle past the window. Saves
    /// per user; zero matches is a normal outcome.
    pub async fn sweep_inactive_users(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - chrono::Duration::minutes(self.config.inactivity_window_mins);
        let logged_in = self.users.find_logged_in().await?;

        let mut swept = 0u64;
        for mut user in logged_in {
            if user.is_idle_since(cutoff) {
                user.logged_in = false;
                self.users.update(&user).await?;
                info!(username = %user.username, "logged out due to inactivity");
                swept += 1;
            }
        }
        debug!(swept, "inactivity sweep finished");
        Ok(swept)
    }

    /// Archive completed goals whose completion has aged past the archive
    /// window. Bulk persist; a second immediate run finds nothing to do.
    pub async fn archive_old_goals(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - chrono::Duration::days(self.config.archive_after_days);
        let to_archive = self.goals.find_completed_unarchived_before(cutoff).await?;

        if to_archive.is_empty() {
            info!("no goals to archive");
            return Ok(0);
        }

        let ids: Vec<_> = to_archive.iter().map(|g| g.id).collect();
        let archived = self.goals.archive(&ids).await?;
        info!(archived, "archived old goals");
        Ok(archived)
    }

    /// Report-only: count goals completed inside the report window.
    pub async fn recent_completion_report(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - chrono::Duration::minutes(self.config.report_window_mins);
        let completed = self.goals.count_completed_after(cutoff).await?;
        info!(
            completed,
            window_mins = self.config.report_window_mins,
            "recent-completion report"
        );
        Ok(completed)
    }

    /// Run one named job once.
    pub async fn run_job(&self, job: Job) -> DomainResult<u64> {
        match job {
            Job::WeeklySummary => self.weekly_summary().await,
            Job::InactivitySweep => self.sweep_inactive_users().await,
            Job::GoalArchival => self.archive_old_goals().await,
            Job::CompletionReport => self.recent_completion_report().await,
        }
    }
}

/// Handle to a running scheduler: signals stop and awaits the job tasks.
pub struct SchedulerHandle {
    stop_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Signal all job tickers to stop and wait for them to wind down.
    pub async fn shutdown(self) {
        let _ = self.stop_tx.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
        info!("housekeeping scheduler stopped");
    }
}

/// Spawns one ticker task per housekeeping job.
pub struct HousekeepingScheduler<G, U>
where
    G: GoalRepository + 'static,
    U: UserRepository + 'static,
{
    service: Arc<HousekeepingService<G, U>>,
}

impl<G, U> HousekeepingScheduler<G, U>
where
    G: GoalRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(service: Arc<HousekeepingService<G, U>>) -> Self {
        Self { service }
    }

    /// Start all four jobs, each on its own interval ticker.
    ///
    /// Jobs never share state; a panic-free failure in one run is logged and
    /// the ticker continues. A non-reentrant guard skips a tick when the
    /// previous run of the same job is still in flight.
    pub fn spawn(&self) -> SchedulerHandle {
        let (stop_tx, stop_rx) = watch::channel(false);
        let cadence = |secs: u64| Duration::from_secs(secs.max(1));
        let config = &self.service.config;

        let tasks = vec![
            self.spawn_job(
                Job::WeeklySummary,
                cadence(config.weekly_summary_interval_secs),
                stop_rx.clone(),
            ),
            self.spawn_job(
                Job::InactivitySweep,
                cadence(config.inactivity_sweep_interval_secs),
                stop_rx.clone(),
            ),
            self.spawn_job(
                Job::GoalArchival,
                cadence(config.goal_archival_interval_secs),
                stop_rx.clone(),
            ),
            self.spawn_job(
                Job::CompletionReport,
                cadence(config.completion_report_interval_secs),
                stop_rx,
            ),
        ];

        info!("housekeeping scheduler started");
        SchedulerHandle { stop_tx, tasks }
    }

    fn spawn_job(
        &self,
        job: Job,
        period: Duration,
        mut stop_rx: watch::Receiver<bool>,
    ) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let busy = Arc::new(AtomicBool::new(false));

        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick of a tokio interval fires immediately; consume
            // it so the job first runs one full period after startup.
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if busy.swap(true, Ordering::AcqRel) {
                            debug!(job = job.as_str(), "previous run still in flight, skipping tick");
                            continue;
                        }
                        match service.run_job(job).await {
                            Ok(affected) => {
                                debug!(job = job.as_str(), affected, "housekeeping run finished");
                            }
                            Err(err) => {
                                warn!(job = job.as_str(), error = %err, "housekeeping run failed");
                            }
                        }
                        busy.store(false, Ordering::Release);
                    }
                    changed = stop_rx.changed() => {
                        // A closed channel means the handle is gone; stop too.
                        if changed.is_err() || *stop_rx.borrow() {
                            debug!(job = job.as_str(), "stopping");
                            break;
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_names_are_stable() {
        assert_eq!(Job::WeeklySummary.as_str(), "weekly_summary");
        assert_eq!(Job::InactivitySweep.as_str(), "inactivity_sweep");
        assert_eq!(Job::GoalArchival.as_str(), "goal_archival");
        assert_eq!(Job::CompletionReport.as_str(), "completion_report");
    }

    #[test]
    fn default_cadences_reproduce_the_deployed_schedule() {
        let config = HousekeepingConfig::default();
        assert_eq!(config.weekly_summary_interval_secs, 7 * 24 * 60 * 60);
        assert_eq!(config.inactivity_sweep_interval_secs, 30 * 60);
        assert_eq!(config.goal_archival_interval_secs, 24 * 60 * 60);
        assert_eq!(config.completion_report_interval_secs, 10 * 60);
    }
}
