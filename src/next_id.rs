//! Record id generation.

use uuid::Uuid;

/// A fresh record id: 32 lowercase hex characters.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}
