//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum length for an algorithm identifier (16 bytes)
/// Algorithm names are short (e.g., "HS256", "RS256")
pub(crate) const MAX_ALG_LENGTH: usize = 16;

// ============================================================================
// Validation bounds
// ============================================================================

/// Maximum leeway for temporal claims (300 seconds = 5 minutes)
/// Prevents leeway from effectively disabling expiration checks
pub(crate) const MAX_LEEWAY_SECONDS: u64 = 300;
