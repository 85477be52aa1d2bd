use druid::kurbo::{Point, Rect};

use crate::font::BitmapFont;

/// A single line of text placed in world space. Its bounds come from the
/// font metrics when it is built and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    bounds: Rect,
}

impl Label {
    pub fn new(text: impl Into<String>, font: &BitmapFont, x: f64, y: f64) -> Self {
        let text = text.into();
        let width = font.text_width(&text);
        let height = font.line_height as f64;
        Self::with_size(text, x, y, width, height)
    }

    pub fn with_size(text: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Label {
            text: text.into(),
            bounds: Rect::new(x, y, x + width, y + height),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Bottom-left corner in world space
    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// True when the point lies on or inside the label's rectangle.
    pub fn hit_test(&self, px: f64, py: f64) -> bool {
        px >= self.bounds.x0 && px <= self.bounds.x1 && py >= self.bounds.y0 && py <= self.bounds.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn edges_are_inclusive() {
        let label = Label::with_size("Mikan", 50.0, 250.0, 80.0, 30.0);
        assert!(label.hit_test(50.0, 250.0));
        assert!(label.hit_test(130.0, 280.0));
        assert!(label.hit_test(50.0, 280.0));
        assert!(label.hit_test(130.0, 250.0));
        assert!(label.hit_test(90.0, 265.0));
    }

    #[test]
    fn just_outside_misses() {
        let label = Label::with_size("Mikan", 50.0, 250.0, 80.0, 30.0);
        assert!(!label.hit_test(49.0, 250.0));
        assert!(!label.hit_test(50.0, 249.0));
        assert!(!label.hit_test(131.0, 260.0));
        assert!(!label.hit_test(60.0, 281.0));
        assert!(!label.hit_test(49.9, 249.9));
    }

    #[test]
    fn size_comes_from_font() {
        let font = BitmapFont::parse(
            "common lineHeight=20 base=16\npage id=0 file=\"f.png\"\n\
             char id=77 x=0 y=0 width=9 height=12 xoffset=0 yoffset=4 xadvance=10 page=0\n\
             char id=105 x=10 y=0 width=3 height=12 xoffset=0 yoffset=4 xadvance=4 page=0\n\
             char id=117 x=14 y=0 width=7 height=12 xoffset=0 yoffset=4 xadvance=8 page=0\n",
            Path::new("f.fnt"),
        )
        .unwrap();
        let label = Label::new("Miu", &font, 400.0, 150.0);
        assert_eq!(label.bounds(), Rect::new(400.0, 150.0, 422.0, 170.0));
        assert_eq!(label.origin(), Point::new(400.0, 150.0));
        assert_eq!(label.text(), "Miu");
        assert!(label.hit_test(422.0, 170.0));
        assert!(!label.hit_test(422.5, 170.0));
    }
}
