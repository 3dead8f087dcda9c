/// All primary keys are UUIDs generated app-side.
///
/// Uses `Uuid::now_v7()` at creation sites: time-ordered for index locality
/// and collision-free under uncoordinated concurrent inserts.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
