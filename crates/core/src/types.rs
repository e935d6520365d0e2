/// Performer, work, and account identities are random v4 UUIDs assigned at creation.
pub type EntityId = uuid::Uuid;

/// Calendar dates (birth and release dates) carry no time-of-day component.
pub type Date = chrono::NaiveDate;
