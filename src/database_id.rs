//! Type aliases for database row IDs.

/// The integer type used for database row IDs.
pub type DatabaseId = i64;

/// The ID of a spending record.
pub type SpendingId = DatabaseId;
