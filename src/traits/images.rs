//! Decorative image source abstraction.
//!
//! View rows carry an image reference that has no bearing on aggregation.
//! Keeping the generator behind a trait lets the aggregation functions stay
//! deterministic under test.

/// Produces image references for post cards and user avatars.
pub trait ImageSource: Send + Sync {
    /// Image reference for a post card of the given size.
    fn post_image(&self, width: u32, height: u32) -> String;

    /// Image reference for a user avatar.
    fn avatar(&self) -> String;
}
