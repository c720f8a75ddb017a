use chrono::{DateTime, Utc};

/// Source of the current time; publication and modification timestamps come from here.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
