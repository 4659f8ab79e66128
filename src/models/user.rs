use serde::{Deserialize, Serialize};

/// The signed-in user's record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Remaining generation credits
    #[serde(default)]
    pub credits: i64,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, credits: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            credits,
        }
    }

    /// Subtract `cost` credits.
    ///
    /// The backend refuses requests once credits run out, so the balance is
    /// not clamped here.
    pub fn debit(&mut self, cost: i64) {
        self.credits -= cost;
    }
}
