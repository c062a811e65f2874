/// Skill and challenge primary keys are random UUIDs.
pub type RecordId = uuid::Uuid;

/// Owner identifier. Opaque string, there is no user table.
pub type UserId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
