use serde::{Deserialize, Serialize};

/// Display name used when a post's author is missing from the directory.
pub const UNKNOWN_USER_NAME: &str = "Unknown User";

/// A user from the remote directory.
///
/// The id is kept as the directory key string; posts refer to their author
/// by the numeric value of that string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Placeholder author for a `userid` that has no directory entry.
    pub fn unknown(userid: u64) -> Self {
        Self::new(userid.to_string(), UNKNOWN_USER_NAME)
    }

    /// Numeric form of the id, if it parses.
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.trim().parse().ok()
    }
}

/// A user with the number of posts they authored in the current cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithCount {
    #[serde(flatten)]
    pub user: User,
    pub post_count: usize,
    pub profile_image: String,
}
