use std::sync::Arc;
use std::time::Duration;

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::event_reminder::EventReminderService};

/// Starts the event refresh scheduler
///
/// This scheduler refreshes the story and show reminders every `interval`. A refresh never
/// fails as a whole; feed problems are logged by the refresh itself and the job keeps
/// running on schedule.
///
/// # Arguments
/// - `service`: Reminder service to refresh
/// - `interval`: Time between refreshes
///
/// # Returns
/// - `Ok(JobScheduler)` - The started scheduler
/// - `Err(AppError::SchedulerErr)` - Failed to create, add or start the job
pub async fn start_scheduler(
    service: Arc<EventReminderService>,
    interval: Duration,
) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let service = service.clone();

        Box::pin(async move {
            tracing::info!("Running scheduled event refresh");
            service.refresh().await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!(
        "Event refresh scheduler started, refreshing every {}s",
        interval.as_secs()
    );

    Ok(scheduler)
}
