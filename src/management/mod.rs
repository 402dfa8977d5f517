//! High-level credential management.
//!
//! Currently holds the process-wide service token cache used for read-only
//! catalog queries. User-level tokens are never managed here; they belong to
//! the browser client and only pass through individual requests.

mod token;

pub use token::ServiceTokenCache;
