//! Freshness scheduler for inflation data.
//!
//! Triggers [`InflationSyncService::ensure_recent_inflation_data`] on a cron
//! schedule so every active source carries last month's index value. Each
//! run is wrapped in a timeout; failures are logged and the schedule keeps
//! going.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use wagearc_core::InflationSyncService;
//! use wagearc_domain::SyncConfig;
//! use wagearc_infra::scheduling::{FreshnessScheduler, FreshnessSchedulerConfig, SchedulerResult};
//!
//! # async fn example(sync: Arc<InflationSyncService>) -> SchedulerResult<()> {
//! let config = FreshnessSchedulerConfig::from(&SyncConfig::default());
//! let mut scheduler = FreshnessScheduler::new(config, sync);
//!
//! scheduler.start().await?;
//! // ... application runs ...
//! scheduler.stop().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_cron_scheduler::{Job, JobScheduler};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};
use wagearc_core::InflationSyncService;
use wagearc_domain::constants::DEFAULT_SYNC_CRON;
use wagearc_domain::SyncConfig;

use crate::errors::InfraError;
use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Work performed on every tick.
#[async_trait]
pub trait FreshnessJob: Send + Sync {
    /// Refresh stale data, returning how many sources received records.
    async fn run(&self) -> Result<usize, InfraError>;
}

#[async_trait]
impl FreshnessJob for InflationSyncService {
    async fn run(&self) -> Result<usize, InfraError> {
        Ok(self.ensure_recent_inflation_data().await?)
    }
}

/// Configuration for the freshness scheduler.
#[derive(Debug, Clone)]
pub struct FreshnessSchedulerConfig {
    /// When false, `start` is a no-op.
    pub enabled: bool,
    /// Six-field cron expression (with seconds).
    pub cron_expression: String,
    /// Timeout applied to a single job execution.
    pub job_timeout: Duration,
    /// Timeout for starting the underlying scheduler.
    pub start_timeout: Duration,
    /// Timeout for stopping the scheduler.
    pub stop_timeout: Duration,
    /// Timeout for awaiting the monitor task join handle.
    pub join_timeout: Duration,
}

impl Default for FreshnessSchedulerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cron_expression: DEFAULT_SYNC_CRON.into(),
            job_timeout: Duration::from_secs(120),
            start_timeout: Duration::from_secs(5),
            stop_timeout: Duration::from_secs(5),
            join_timeout: Duration::from_secs(5),
        }
    }
}

impl From<&SyncConfig> for FreshnessSchedulerConfig {
    fn from(config: &SyncConfig) -> Self {
        Self {
            enabled: config.enabled,
            cron_expression: config.cron_expression.clone(),
            job_timeout: Duration::from_secs(config.job_timeout_seconds),
            ..Self::default()
        }
    }
}

/// Freshness scheduler with explicit lifecycle management.
pub struct FreshnessScheduler {
    scheduler: Arc<RwLock<Option<JobScheduler>>>,
    config: FreshnessSchedulerConfig,
    monitor_handle: Option<JoinHandle<()>>,
    cancellation: CancellationToken,
    job: Arc<dyn FreshnessJob>,
}

impl FreshnessScheduler {
    /// Create a stopped scheduler.
    pub fn new(config: FreshnessSchedulerConfig, job: Arc<dyn FreshnessJob>) -> Self {
        Self {
            scheduler: Arc::new(RwLock::new(None)),
            config,
            monitor_handle: None,
            cancellation: CancellationToken::new(),
            job,
        }
    }

    /// Start the scheduler, spawning the monitoring task.
    ///
    /// # Errors
    /// Returns [`SchedulerError::AlreadyRunning`] on a second start and
    /// [`SchedulerError::JobRegistrationFailed`] for an invalid cron
    /// expression.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> SchedulerResult<()> {
        if !self.config.enabled {
            info!("Inflation freshness scheduler disabled");
            return Ok(());
        }
        if self.is_running() {
            return Err(SchedulerError::AlreadyRunning);
        }

        self.cancellation = CancellationToken::new();

        let scheduler_instance = self.build_scheduler().await?;
        let start_timeout = self.config.start_timeout;

        tokio::time::timeout(start_timeout, scheduler_instance.start())
            .await
            .map_err(|source| SchedulerError::Timeout { duration: start_timeout, source })?
            .map_err(|source| SchedulerError::StartFailed { source })?;

        *self.scheduler.write().await = Some(scheduler_instance);

        let cancel = self.cancellation.clone();
        self.monitor_handle = Some(tokio::spawn(async move {
            cancel.cancelled().await;
            debug!("Freshness scheduler monitor cancelled");
        }));

        info!(cron = %self.config.cron_expression, "Inflation freshness scheduler started");
        Ok(())
    }

    /// Stop the scheduler and wait for the monitor task to finish.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NotRunning`] when not started.
    #[instrument(skip(self))]
    pub async fn stop(&mut self) -> SchedulerResult<()> {
        if !self.is_running() {
            return Err(SchedulerError::NotRunning);
        }

        self.cancellation.cancel();

        let Some(mut scheduler) = self.scheduler.write().await.take() else {
            return Err(SchedulerError::NotRunning);
        };

        let stop_timeout = self.config.stop_timeout;
        tokio::time::timeout(stop_timeout, scheduler.shutdown())
            .await
            .map_err(|source| SchedulerError::Timeout { duration: stop_timeout, source })?
            .map_err(|source| SchedulerError::StopFailed { source })?;

        if let Some(handle) = self.monitor_handle.take() {
            let join_timeout = self.config.join_timeout;
            tokio::time::timeout(join_timeout, handle)
                .await
                .map_err(|source| SchedulerError::Timeout { duration: join_timeout, source })??;
        }

        info!("Inflation freshness scheduler stopped");
        Ok(())
    }

    /// Returns true when the monitor task is active.
    pub fn is_running(&self) -> bool {
        self.monitor_handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Run the job once, outside the schedule, under the job timeout.
    ///
    /// # Errors
    /// Returns [`SchedulerError::Timeout`] or [`SchedulerError::JobFailed`].
    #[instrument(skip(self))]
    pub async fn run_once(&self) -> SchedulerResult<usize> {
        let job_timeout = self.config.job_timeout;
        let refreshed = tokio::time::timeout(job_timeout, self.job.run())
            .await
            .map_err(|source| SchedulerError::Timeout { duration: job_timeout, source })?
            .map_err(SchedulerError::JobFailed)?;
        info!(refreshed, "Manual inflation freshness run finished");
        Ok(refreshed)
    }

    async fn build_scheduler(&self) -> SchedulerResult<JobScheduler> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|source| SchedulerError::CreationFailed { source })?;
        let job = Arc::clone(&self.job);
        let job_timeout = self.config.job_timeout;

        let job_definition = Job::new_async(self.config.cron_expression.as_str(), move |_id, _lock| {
            let job = Arc::clone(&job);

            Box::pin(async move {
                let started = Instant::now();
                match tokio::time::timeout(job_timeout, job.run()).await {
                    Ok(Ok(refreshed)) => {
                        let elapsed_ms = saturating_millis(started.elapsed());
                        debug!(refreshed, elapsed_ms, "Freshness job finished");
                    }
                    Ok(Err(err)) => {
                        error!(error = %err, "Freshness job failed");
                    }
                    Err(_) => {
                        warn!(timeout_secs = job_timeout.as_secs(), "Freshness job timed out");
                    }
                }
            })
        })
        .map_err(|source| SchedulerError::JobRegistrationFailed { source })?;

        let job_id = job_definition.guid();
        scheduler
            .add(job_definition)
            .await
            .map_err(|source| SchedulerError::JobRegistrationFailed { source })?;

        debug!(cron = %self.config.cron_expression, job_id = %job_id, "Registered freshness job");
        Ok(scheduler)
    }
}

/// Whole milliseconds of `elapsed`, saturating at `u64::MAX`.
fn saturating_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

impl Drop for FreshnessScheduler {
    fn drop(&mut self) {
        if self.is_running() {
            warn!("FreshnessScheduler dropped while running; cancelling tasks");
            self.cancellation.cancel();
        }
    }
}
