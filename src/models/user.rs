use serde::{Deserialize, Serialize};

/// Authenticated user as returned by the mock auth flow. Decoupled from the
/// data layer; its id is only the soft key a roommate profile hangs off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}
