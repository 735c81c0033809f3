//! Wire payloads of the remote API.

use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Comment, Post, User};

/// `GET /users` → `{ "users": { "<id>": "<name>" } }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsersResponse {
    pub users: HashMap<String, String>,
}

impl UsersResponse {
    /// The directory as users ordered by ascending numeric id.
    ///
    /// Ids that do not parse as numbers sort after all numeric ids, in
    /// lexicographic order. This ordering is the tie-break for rankings.
    pub fn into_users(self) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .into_iter()
            .map(|(id, name)| User::new(id, name))
            .collect();
        users.sort_by(directory_order);
        users
    }
}

fn directory_order(a: &User, b: &User) -> Ordering {
    match (a.numeric_id(), b.numeric_id()) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.id.cmp(&b.id)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.id.cmp(&b.id),
    }
}

/// `GET /users/{id}/posts` → `{ "posts": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

/// `GET /posts/{id}/comments` → `{ "comments": [...] }`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_response_orders_by_numeric_id() {
        let response: UsersResponse = serde_json::from_str(
            r#"{"users": {"10": "Jay", "2": "Bob", "x": "Xan", "1": "Alice"}}"#,
        )
        .unwrap();
        let ids: Vec<String> = response.into_users().into_iter().map(|u| u.id).collect();
        assert_eq!(ids, vec!["1", "2", "10", "x"]);
    }

    #[test]
    fn test_posts_response_parses() {
        let response: PostsResponse = serde_json::from_str(
            r#"{"posts": [{"id": 10, "userid": 1, "content": "hello"}]}"#,
        )
        .unwrap();
        assert_eq!(response.posts, vec![Post::new(10, 1, "hello")]);
    }

    #[test]
    fn test_missing_wrapper_key_is_an_error() {
        assert!(serde_json::from_str::<CommentsResponse>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<UsersResponse>(r#"{"people": {}}"#).is_err());
    }
}
