/// Schedule primary keys are UUIDs assigned by the store adapter.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
