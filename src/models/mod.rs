//! Document models for the Creel fishing log.
//!
//! These are the stored shapes; the GraphQL layer maps them onto its own object types.

mod station;
mod trip;
mod water;

pub use station::*;
pub use trip::*;
pub use water::*;

/// Fresh document identity: 32 lowercase hex characters.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
