//! Placeholder image references backed by public image services.

use rand::Rng;

use crate::traits::ImageSource;

const PICSUM_BASE_URL: &str = "https://picsum.photos";
const PRAVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";

/// Number of distinct avatars the avatar service serves.
pub const AVATAR_COUNT: u32 = 70;

/// Reference to a random photo of the given size.
pub fn synthetic_image_url(width: u32, height: u32) -> String {
    format!("{}/{}/{}", PICSUM_BASE_URL, width, height)
}

/// Reference to a pseudo-randomly chosen avatar. Not seeded, not idempotent.
pub fn synthetic_avatar_url() -> String {
    let index = rand::thread_rng().gen_range(0..AVATAR_COUNT);
    format!("{}?img={}", PRAVATAR_BASE_URL, index)
}

/// [`ImageSource`] producing picsum photo and pravatar avatar references.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderImages;

impl PlaceholderImages {
    pub fn new() -> Self {
        Self
    }
}

impl ImageSource for PlaceholderImages {
    fn post_image(&self, width: u32, height: u32) -> String {
        synthetic_image_url(width, height)
    }

    fn avatar(&self) -> String {
        synthetic_avatar_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_image_url_uses_dimensions() {
        assert_eq!(synthetic_image_url(400, 300), "https://picsum.photos/400/300");
        assert_eq!(synthetic_image_url(1, 2), "https://picsum.photos/1/2");
    }

    #[test]
    fn test_synthetic_avatar_url_stays_in_range() {
        for _ in 0..200 {
            let url = synthetic_avatar_url();
            let index: u32 = url
                .strip_prefix("https://i.pravatar.cc/150?img=")
                .and_then(|n| n.parse().ok())
                .expect("avatar url should end in a numeric index");
            assert!(index < AVATAR_COUNT);
        }
    }

    #[test]
    fn test_placeholder_images_delegates() {
        let images = PlaceholderImages::new();
        assert_eq!(images.post_image(400, 300), "https://picsum.photos/400/300");
        assert!(images.avatar().starts_with("https://i.pravatar.cc/150?img="));
    }
}
