use druid::kurbo::{Affine, Point, Rect, Size, Vec2};
use druid::piet::{Error as PietError, InterpolationMode, RenderContext};
use druid::Color;

use crate::font::BitmapFont;
use crate::label::Label;

/// Highlight colour for a pressed portrait
pub const PINK: Color = Color::rgb8(255, 105, 180);

/// Multiplies a straight-alpha RGBA pixel by a colour, leaving alpha alone.
pub fn apply_tint(pixel: [u8; 4], tint: Color) -> [u8; 4] {
    let (tr, tg, tb, _) = tint.as_rgba8();
    let mul = |c: u8, t: u8| ((c as u16 * t as u16 + 127) / 255) as u8;
    [
        mul(pixel[0], tr),
        mul(pixel[1], tg),
        mul(pixel[2], tb),
        pixel[3],
    ]
}

/// Returns a tinted copy of a tightly packed RGBA8 buffer.
pub fn tint_rgba(pixels: &[u8], tint: Color) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len());
    for px in pixels.chunks_exact(4) {
        out.extend_from_slice(&apply_tint([px[0], px[1], px[2], px[3]], tint));
    }
    out
}

/// Transform from an image's own y-down pixel space to window pixels when
/// the image's bottom-left corner sits at `pos` in the y-up world.
pub fn sprite_transform(projection: Affine, pos: Point, size: Size) -> Affine {
    projection * Affine::translate((pos.x, pos.y + size.height)) * Affine::FLIP_Y
}

/// Draws an image with its bottom-left corner at `pos` in world space.
pub fn draw_sprite<R: RenderContext>(
    rc: &mut R,
    image: &R::Image,
    projection: Affine,
    pos: Point,
    size: Size,
) -> Result<(), PietError> {
    rc.with_save(|rc| {
        rc.transform(sprite_transform(projection, pos, size));
        rc.draw_image(image, size.to_rect(), InterpolationMode::NearestNeighbor);
        Ok(())
    })
}

/// Draws an image rotated by `degrees` around `origin`, which is relative
/// to the image's bottom-left corner.
pub fn draw_sprite_rotated<R: RenderContext>(
    rc: &mut R,
    image: &R::Image,
    projection: Affine,
    pos: Point,
    origin: Vec2,
    size: Size,
    degrees: f64,
) -> Result<(), PietError> {
    let pivot = Affine::translate(pos.to_vec2() + origin)
        * Affine::rotate(degrees.to_radians())
        * Affine::translate(-origin);
    draw_sprite(rc, image, projection * pivot, Point::ZERO, size)
}

/// Draws a label glyph by glyph from the font's page images.
pub fn draw_label<R: RenderContext>(
    rc: &mut R,
    pages: &[R::Image],
    font: &BitmapFont,
    projection: Affine,
    label: &Label,
) -> Result<(), PietError> {
    let line = Size::new(label.bounds().width(), font.line_height as f64);
    rc.with_save(|rc| {
        rc.transform(sprite_transform(projection, label.origin(), line));
        for (pen, glyph) in font.layout(label.text()) {
            if glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let Some(page) = pages.get(glyph.page) else {
                continue;
            };
            let src = Rect::new(
                glyph.x as f64,
                glyph.y as f64,
                (glyph.x + glyph.width) as f64,
                (glyph.y + glyph.height) as f64,
            );
            let dst = Rect::from_origin_size(
                (pen + glyph.x_offset as f64, glyph.y_offset as f64),
                (glyph.width as f64, glyph.height as f64),
            );
            rc.draw_image_area(page, src, dst, InterpolationMode::NearestNeighbor);
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_takes_the_tint_colour() {
        assert_eq!(apply_tint([255, 255, 255, 200], PINK), [255, 105, 180, 200]);
    }

    #[test]
    fn black_stays_black() {
        assert_eq!(apply_tint([0, 0, 0, 255], PINK), [0, 0, 0, 255]);
    }

    #[test]
    fn tint_buffer_keeps_length_and_alpha() {
        let src = [255, 255, 255, 10, 128, 128, 128, 20];
        let out = tint_rgba(&src, PINK);
        assert_eq!(out.len(), src.len());
        assert_eq!(out[3], 10);
        assert_eq!(out[7], 20);
        assert_eq!(&out[4..7], &[128, 53, 90]);
    }

    #[test]
    fn sprite_transform_places_image_corners() {
        // world y-up 100 high, window y-down
        let projection = Affine::translate((0.0, 100.0)) * Affine::FLIP_Y;
        let t = sprite_transform(projection, Point::new(10.0, 20.0), Size::new(30.0, 40.0));
        // image top-left lands at world (10, 60) which is window (10, 40)
        assert_eq!(t * Point::ZERO, Point::new(10.0, 40.0));
        // image bottom-right lands at world (40, 20) which is window (40, 80)
        assert_eq!(t * Point::new(30.0, 40.0), Point::new(40.0, 80.0));
    }
}
