//! Daily deadline sweep.
//!
//! [`DeadlineScheduler`] runs as a background task that wakes once a day at
//! a fixed wall-clock time, scans for pending data-subject requests whose
//! due date falls within the warning window, and emits one deadline alert
//! plus a reminder email per request. A failed email to one recipient is
//! logged and never aborts the rest of the batch.
//!
//! The sweep keeps no memory of previous runs: a request still pending
//! tomorrow produces a fresh alert tomorrow.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use privacyguard_core::alerts::{
    deadline_severity, deadline_window, AlertKind, JURISDICTION_GLOBAL,
};
use privacyguard_core::requests::days_until_due;
use privacyguard_db::models::alert::NewAlert;
use privacyguard_db::repositories::{AlertRepo, DataRequestRepo, UserRepo};
use privacyguard_db::DbPool;
use tokio_util::sync::CancellationToken;

use crate::delivery::email::EmailDelivery;

/// Wall-clock hour (UTC) at which the daily sweep runs.
const SWEEP_HOUR_UTC: u32 = 9;

/// The next instant at or after `now` that falls on the daily sweep time.
pub fn next_sweep_after(now: DateTime<Utc>) -> DateTime<Utc> {
    let sweep_time =
        NaiveTime::from_hms_opt(SWEEP_HOUR_UTC, 0, 0).unwrap_or(NaiveTime::MIN);
    let today_run = now.date_naive().and_time(sweep_time).and_utc();
    if now < today_run {
        today_run
    } else {
        today_run + Duration::days(1)
    }
}

// ---------------------------------------------------------------------------
// DeadlineScheduler
// ---------------------------------------------------------------------------

/// Background service that sweeps for approaching request deadlines once a
/// day at [`SWEEP_HOUR_UTC`].
pub struct DeadlineScheduler {
    pool: DbPool,
    mailer: Option<EmailDelivery>,
}

impl DeadlineScheduler {
    /// Create a new scheduler. `mailer` is `None` when SMTP is not
    /// configured; alerts are still recorded, only emails are skipped.
    pub fn new(pool: DbPool, mailer: Option<EmailDelivery>) -> Self {
        Self { pool, mailer }
    }

    /// Run the sweep loop until the provided [`CancellationToken`] fires.
    pub async fn run(&self, cancel: CancellationToken) {
        loop {
            let now = Utc::now();
            let next = next_sweep_after(now);
            let wait = (next - now).to_std().unwrap_or_default();
            tracing::debug!(next_sweep = %next, "Deadline sweep sleeping");

            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Deadline scheduler cancelled");
                    break;
                }
                _ = tokio::time::sleep(wait) => {
                    if let Err(e) = run_deadline_sweep(&self.pool, self.mailer.as_ref()).await {
                        tracing::error!(error = %e, "Deadline sweep failed");
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Sweep body
// ---------------------------------------------------------------------------

/// Scan pending requests due within the warning window and emit one
/// deadline alert (plus an owner reminder email) per request.
///
/// Returns the number of alerts emitted. Duplicate alerts across
/// consecutive runs are expected: the sweep performs no de-duplication.
pub async fn run_deadline_sweep(
    pool: &DbPool,
    mailer: Option<&EmailDelivery>,
) -> Result<usize, sqlx::Error> {
    let today = Utc::now().date_naive();
    let (start, end) = deadline_window(today);

    let due_requests = DataRequestRepo::list_pending_due_between(pool, start, end).await?;

    let mut emitted = 0;
    for request in &due_requests {
        let days = days_until_due(request.due_date, today);
        let severity = deadline_severity(days);

        let title = "Data Request Deadline Approaching".to_string();
        let description = format!(
            "You have a {} request from {} due in {} days.",
            request.request_type, request.requester_name, days
        );

        let alert = NewAlert {
            alert_type: AlertKind::Deadline.as_str().to_string(),
            title: title.clone(),
            description: description.clone(),
            severity: severity.as_str().to_string(),
            jurisdiction: JURISDICTION_GLOBAL.to_string(),
            due_date: Some(request.due_date),
            action_required: true,
            link: None,
        };

        AlertRepo::create(pool, Some(request.user_id), &alert).await?;
        emitted += 1;

        // Reminder email to the owning account; failures are isolated per
        // recipient.
        if let Some(mailer) = mailer {
            if request.email_alerts {
                if let Err(e) = mailer
                    .send_alert(&request.owner_email, &request.owner_company, &title, &description)
                    .await
                {
                    tracing::error!(
                        request_id = request.id,
                        to = %request.owner_email,
                        error = %e,
                        "Failed to send deadline reminder email"
                    );
                }
            }
        }
    }

    if emitted > 0 {
        tracing::info!(count = emitted, "Deadline sweep emitted alerts");
    }
    Ok(emitted)
}

/// Insert a global (broadcast) alert and email every account subscribed to
/// its jurisdiction. Used for manually published regulatory alerts.
pub async fn broadcast_alert(
    pool: &DbPool,
    mailer: Option<&EmailDelivery>,
    alert: &NewAlert,
) -> Result<privacyguard_db::models::alert::ComplianceAlert, sqlx::Error> {
    let created = AlertRepo::create(pool, None, alert).await?;

    let contacts = UserRepo::list_contacts_for_jurisdiction(pool, &alert.jurisdiction).await?;
    if let Some(mailer) = mailer {
        for contact in &contacts {
            if let Err(e) = mailer
                .send_alert(
                    &contact.email,
                    &contact.company_name,
                    &alert.title,
                    &alert.description,
                )
                .await
            {
                tracing::error!(
                    user_id = contact.id,
                    to = %contact.email,
                    error = %e,
                    "Failed to send broadcast alert email"
                );
            }
        }
    }

    tracing::info!(
        alert_id = created.id,
        recipients = contacts.len(),
        jurisdiction = %alert.jurisdiction,
        "Broadcast alert published"
    );
    Ok(created)
}
