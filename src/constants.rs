//! Application-wide constants
//!
//! Constants are grouped by their purpose.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when neither RUST_LOG nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Upper bound on a single request, batch commands included
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default time to wait for a pooled connection
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

// =============================================================================
// RACE CLASS GENERATION
// =============================================================================

/// Presentation group every generated race class is placed in
pub const GENERATED_RACECLASS_GROUP: i32 = 1;

/// First `order` value handed out by generation
pub const FIRST_RACECLASS_ORDER: i32 = 1;

/// Ranking flag of a newly created race class
pub const NEW_RACECLASS_RANKING: bool = true;

/// Seeding flag of a newly created race class
pub const NEW_RACECLASS_SEEDING: bool = false;

// =============================================================================
// BIB ASSIGNMENT
// =============================================================================

/// First bib number handed out in an event
pub const FIRST_BIB: i32 = 1;

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum event name length
pub const MAX_EVENT_NAME_LENGTH: usize = 128;

/// Maximum ageclass label length
pub const MAX_AGECLASS_LENGTH: usize = 64;

/// Maximum race class name length
pub const MAX_RACECLASS_NAME_LENGTH: usize = 32;

/// Maximum contestant name part length
pub const MAX_PERSON_NAME_LENGTH: u64 = 100;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
