//! Shared data types for the registration page
//!
//! Carousel slides are sample data only. The page does not render them yet.

use serde::{Deserialize, Serialize};

/// A carousel slide
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    pub url_image: String,
    pub url_destination: String,
    pub order: u32,
}

const SLIDE_DESTINATION: &str =
    "https://www.youtube.com/watch?v=dQw4w9WgXcQ&ab_channel=RickAstley";

/// Hardcoded sample slides
pub fn sample_slides() -> Vec<Slide> {
    [
        "https://cdn.pixabay.com/photo/2015/12/06/09/15/maple-1079235_1280.jpg",
        "https://cdn.pixabay.com/photo/2016/09/22/10/44/banner-1686943_1280.jpg",
        "https://cdn.pixabay.com/photo/2017/10/03/17/53/nature-2813487_1280.jpg",
    ]
    .into_iter()
    .zip(1u32..)
    .map(|(url_image, n)| Slide {
        id: n,
        title: format!("slide hardcoded {}", n),
        url_image: url_image.to_string(),
        url_destination: SLIDE_DESTINATION.to_string(),
        order: n,
    })
    .collect()
}

/// Slides in display order
pub fn sorted_by_order(mut slides: Vec<Slide>) -> Vec<Slide> {
    slides.sort_by_key(|s| (s.order, s.id));
    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_slides() {
        let slides = sample_slides();
        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "slide hardcoded 1");
        assert_eq!(slides[2].order, 3);
        assert!(slides[1].url_image.ends_with("banner-1686943_1280.jpg"));
        assert!(slides.iter().all(|s| s.url_destination == SLIDE_DESTINATION));
    }

    #[test]
    fn test_sorted_by_order() {
        let mut slides = sample_slides();
        slides.reverse();
        let ids: Vec<u32> = sorted_by_order(slides).iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_slide_keys_are_snake_case() {
        let json = serde_json::to_value(&sample_slides()[0]).unwrap();
        assert!(json.get("url_image").is_some());
        assert!(json.get("url_destination").is_some());
    }
}
