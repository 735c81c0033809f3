//! Aggregation over one fetch cycle's users, posts and comment counts.
//!
//! All functions are pure apart from the decorative images drawn from the
//! supplied [`ImageSource`]. They never fail: callers only invoke them once
//! every input of the cycle has been fetched successfully.

use std::collections::HashMap;

use crate::models::{EnrichedPost, Post, User, UserWithCount};
use crate::traits::ImageSource;

/// Number of posts authored by each `userid`.
pub fn post_counts(posts: &[Post]) -> HashMap<u64, usize> {
    let mut counts = HashMap::new();
    for post in posts {
        *counts.entry(post.userid).or_insert(0) += 1;
    }
    counts
}

/// The `limit` users with the most posts, most prolific first.
///
/// Users without posts count as zero. The sort is stable, so equal counts
/// keep the order of `users`.
pub fn compute_top_users(
    users: &[User],
    posts: &[Post],
    limit: usize,
    images: &dyn ImageSource,
) -> Vec<UserWithCount> {
    let counts = post_counts(posts);

    let mut ranked: Vec<(&User, usize)> = users
        .iter()
        .map(|user| {
            let count = user
                .numeric_id()
                .and_then(|id| counts.get(&id).copied())
                .unwrap_or(0);
            (user, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(limit)
        .map(|(user, post_count)| UserWithCount {
            user: user.clone(),
            post_count,
            profile_image: images.avatar(),
        })
        .collect()
}

/// Join every post with its author and comment count, newest (highest id)
/// first.
///
/// Authors missing from `users` are replaced by [`User::unknown`]; posts
/// missing from `comment_counts` count as zero comments.
pub fn enrich_posts(
    users: &[User],
    posts: &[Post],
    comment_counts: &HashMap<u64, usize>,
    images: &dyn ImageSource,
    image_size: (u32, u32),
) -> Vec<EnrichedPost> {
    let authors: HashMap<u64, &User> = users
        .iter()
        .filter_map(|user| user.numeric_id().map(|id| (id, user)))
        .collect();

    let mut enriched: Vec<EnrichedPost> = posts
        .iter()
        .map(|post| EnrichedPost {
            user: authors
                .get(&post.userid)
                .map(|user| (*user).clone())
                .unwrap_or_else(|| User::unknown(post.userid)),
            comment_count: comment_counts.get(&post.id).copied().unwrap_or(0),
            image_url: images.post_image(image_size.0, image_size.1),
            post: post.clone(),
        })
        .collect();
    enriched.sort_by(|a, b| b.post.id.cmp(&a.post.id));
    enriched
}

/// Every post sharing the highest comment count, in input order.
pub fn compute_trending(posts: &[EnrichedPost]) -> Vec<EnrichedPost> {
    let Some(max) = posts.iter().map(|p| p.comment_count).max() else {
        return Vec::new();
    };
    posts
        .iter()
        .filter(|p| p.comment_count == max)
        .cloned()
        .collect()
}
