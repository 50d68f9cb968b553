use async_trait::async_trait;
use pawhaven_care::Reminder;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::{Result, StoreError};
use crate::store::ReminderStore;

/// In-memory reminder store preserving insertion order.
///
/// Reference implementation of [`ReminderStore`], used by tests and as the
/// application's cache in front of its document database. Writers serialize
/// on the internal `RwLock`; concurrent readers are unrestricted, matching
/// the single-writer discipline the scheduler core assumes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    reminders: RwLock<Vec<Reminder>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a single reminder by id.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Option<Reminder>> {
        let reminders = self.reminders.read().await;
        Ok(reminders.iter().find(|r| r.id == id).cloned())
    }

    /// Insert a new reminder or replace the one sharing its id.
    ///
    /// Validation happens here, at the boundary — a malformed reminder is
    /// rejected rather than repaired.
    #[instrument(skip(self, reminder), fields(reminder_id = %reminder.id))]
    pub async fn upsert(&self, reminder: Reminder) -> Result<()> {
        reminder.validate()?;
        let mut reminders = self.reminders.write().await;
        match reminders.iter_mut().find(|r| r.id == reminder.id) {
            Some(slot) => *slot = reminder,
            None => reminders.push(reminder),
        }
        debug!("reminder upserted");
        Ok(())
    }

    /// Delete a reminder by id. Returns `NotFound` if no entry matches.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: &str) -> Result<()> {
        let mut reminders = self.reminders.write().await;
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        debug!("reminder removed");
        Ok(())
    }
}

#[async_trait]
impl ReminderStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Reminder>> {
        Ok(self.reminders.read().await.clone())
    }

    async fn save(&self, reminders: &[Reminder]) -> Result<()> {
        for reminder in reminders {
            reminder.validate()?;
        }
        *self.reminders.write().await = reminders.to_vec();
        debug!(count = reminders.len(), "collection saved");
        Ok(())
    }
}
