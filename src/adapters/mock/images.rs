//! Deterministic image source for tests.

use crate::traits::ImageSource;

/// [`ImageSource`] that always returns the same references.
#[derive(Debug, Clone)]
pub struct StaticImages {
    pub post_image: String,
    pub avatar: String,
}

impl StaticImages {
    pub fn new(post_image: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            post_image: post_image.into(),
            avatar: avatar.into(),
        }
    }
}

impl Default for StaticImages {
    fn default() -> Self {
        Self::new("image://post", "image://avatar")
    }
}

impl ImageSource for StaticImages {
    fn post_image(&self, _width: u32, _height: u32) -> String {
        self.post_image.clone()
    }

    fn avatar(&self) -> String {
        self.avatar.clone()
    }
}
