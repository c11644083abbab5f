//! Outbound notification side of the platform: SMTP email delivery and the
//! daily deadline sweep that turns approaching data-request due dates into
//! compliance alerts and reminder emails.

pub mod deadlines;
pub mod delivery;

pub use deadlines::{broadcast_alert, run_deadline_sweep, DeadlineScheduler};
pub use delivery::email::{EmailConfig, EmailDelivery, EmailError};
