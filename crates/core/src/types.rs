/// Content-cache identifiers are opaque strings assigned by the game.
pub type AssetId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
