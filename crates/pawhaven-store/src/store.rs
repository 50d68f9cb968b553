use async_trait::async_trait;
use pawhaven_care::Reminder;

use crate::error::Result;

/// Contract the persistence collaborator implements.
///
/// Both operations are asynchronous from the scheduler's point of view, but
/// the care core never calls them itself — the surrounding application
/// loads the collection, runs the scheduler over it, and saves the result
/// after any mutation.
#[async_trait]
pub trait ReminderStore: Send + Sync {
    /// Fetch the full reminder collection.
    async fn load(&self) -> Result<Vec<Reminder>>;

    /// Replace the stored collection with `reminders`.
    async fn save(&self, reminders: &[Reminder]) -> Result<()>;
}
