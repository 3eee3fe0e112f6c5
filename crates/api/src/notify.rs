use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use eyre::Result;
use hackhub_db::models::{DbMentorshipSlot, DbUser};

/// Outbound notification boundary for booking events.
///
/// Email delivery is an external collaborator; implementations are
/// best-effort and the engine logs failures instead of surfacing them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn booking_booked(&self, mentor: &DbUser, slot: &DbMentorshipSlot) -> Result<()>;

    async fn booking_cancelled(&self, mentor: &DbUser, slot: &DbMentorshipSlot) -> Result<()>;
}

/// Logs the would-be email through `tracing`. Stands in for the external
/// mail dispatcher in environments without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

fn start_label(slot: &DbMentorshipSlot) -> String {
    match Utc.timestamp_opt(slot.start_time, 0).single() {
        Some(start) => start.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => slot.start_time.to_string(),
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn booking_booked(&self, mentor: &DbUser, slot: &DbMentorshipSlot) -> Result<()> {
        tracing::info!(
            "Notify {} <{}>: slot {} at {} booked by {} ({})",
            mentor.name,
            mentor.email,
            slot.id,
            start_label(slot),
            slot.hacker_name.as_deref().unwrap_or("unknown"),
            slot.team_name.as_deref().unwrap_or("no team"),
        );
        Ok(())
    }

    async fn booking_cancelled(&self, mentor: &DbUser, slot: &DbMentorshipSlot) -> Result<()> {
        tracing::info!(
            "Notify {} <{}>: booking on slot {} at {} was cancelled",
            mentor.name,
            mentor.email,
            slot.id,
            start_label(slot),
        );
        Ok(())
    }
}
