//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// The single role every account carries
pub const ROLE_USER: &str = "user";

// =============================================================================
// Validation
// =============================================================================

/// Maximum email length, measured after trimming
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Minimum raw password length, measured after trimming
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Maximum raw password length, measured after trimming
pub const MAX_PASSWORD_LENGTH: usize = 100;

// =============================================================================
// Notification keys
// =============================================================================

pub const FIELD_ID: &str = "id";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";
pub const FIELD_USER: &str = "user";

/// Business rule message for a taken address
pub const EMAIL_ALREADY_USED: &str = "email already used";

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
