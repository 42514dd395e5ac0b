// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display)
pub const APP_NAME: &str = "Traderboard";

/// Application name in lowercase (for paths and identifiers)
pub const APP_NAME_LOWER: &str = "traderboard";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".traderboard";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "traderboard.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "TRADERBOARD_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "TRADERBOARD_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "TRADERBOARD_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "TRADERBOARD_LOG";

// =============================================================================
// Environment Variables - Mock Data
// =============================================================================

/// Environment variable for the mock RNG seed
pub const ENV_MOCK_SEED: &str = "TRADERBOARD_MOCK_SEED";

/// Environment variable to disable the artificial response delay
pub const ENV_NO_DELAY: &str = "TRADERBOARD_NO_DELAY";

/// Environment variable for strict filter bound validation
pub const ENV_STRICT_FILTERS: &str = "TRADERBOARD_STRICT_FILTERS";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 5390;

// =============================================================================
// Mock Data Defaults
// =============================================================================

/// Traders returned by the leaderboard endpoint
pub const DEFAULT_TRADERS_COUNT: usize = 30;

/// Trades returned by the trade history endpoint
pub const DEFAULT_TRADES_COUNT: usize = 30;

/// Upper bound for either record count
pub const MAX_RECORD_COUNT: usize = 1000;

/// Artificial latency of the leaderboard endpoint
pub const DEFAULT_TRADERS_DELAY_MS: u64 = 1000;

/// Artificial latency of the profile endpoint
pub const DEFAULT_PROFILE_DELAY_MS: u64 = 1000;

/// Artificial latency of the trade history endpoint
pub const DEFAULT_TRADES_DELAY_MS: u64 = 1500;

/// Upper bound for any artificial latency
pub const MAX_DELAY_MS: u64 = 60_000;

// =============================================================================
// Request Limits
// =============================================================================

/// Maximum accepted length of a trader address path segment
pub const MAX_ADDRESS_LENGTH: usize = 128;
