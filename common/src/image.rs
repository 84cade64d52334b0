use crate::format::js_number;

/// Append the image service's resize parameter: `url?param=WyH`.
pub fn clip_image(url: &str, width: f64, height: f64) -> String {
    format!("{}?param={}y{}", url, js_number(width), js_number(height))
}

/// Solid-colour placeholder request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    pub color: String,
}

impl ImageSpec {
    /// Falls back to `default_color` when no colour is given.
    pub fn new(width: u32, height: u32, color: Option<String>, default_color: &str) -> Self {
        Self {
            width,
            height,
            color: color.unwrap_or_else(|| default_color.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_image() {
        assert_eq!(
            clip_image("http://p1.music.126.net/a.jpg", 200.0, 100.0),
            "http://p1.music.126.net/a.jpg?param=200y100"
        );
        assert_eq!(clip_image("a.png", 1.5, 2.0), "a.png?param=1.5y2");
    }

    #[test]
    fn test_image_spec_default_color() {
        let spec = ImageSpec::new(10, 20, None, "rgba(0, 0, 0, 0)");
        assert_eq!(spec.color, "rgba(0, 0, 0, 0)");
        assert!(!spec.is_empty());

        let spec = ImageSpec::new(0, 20, Some("#f00".into()), "rgba(0, 0, 0, 0)");
        assert_eq!(spec.color, "#f00");
        assert!(spec.is_empty());
    }
}
