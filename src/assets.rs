use std::path::{Path, PathBuf};
use std::sync::Arc;

use druid::kurbo::Size;

use crate::error::{AssetError, SoundBoardResult};
use crate::font::BitmapFont;
use crate::graphics::{tint_rgba, PINK};
use crate::roster::{self, CHARACTERS};
use crate::sound::SoundItem;

/// Decoded image, straight-alpha RGBA8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Arc<[u8]>,
}

impl Sprite {
    pub fn decode(bytes: &[u8], origin: &Path) -> SoundBoardResult<Self> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|source| AssetError::Image {
                path: origin.to_path_buf(),
                source,
            })?
            .to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Sprite {
            width,
            height,
            rgba: rgba.into_raw().into(),
        })
    }

    pub fn load(path: &Path) -> SoundBoardResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| AssetError::io(path, e))?;
        Self::decode(&bytes, path)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f64, self.height as f64)
    }

    pub fn tinted(&self) -> Sprite {
        Sprite {
            width: self.width,
            height: self.height,
            rgba: tint_rgba(&self.rgba, PINK).into(),
        }
    }
}

/// A character portrait in its normal and pressed look.
#[derive(Clone, Debug)]
pub struct Portrait {
    pub normal: Sprite,
    pub pressed: Sprite,
}

/// Everything read from disk at startup.
pub struct Assets {
    pub background: Sprite,
    pub icon: Sprite,
    pub overlay: Sprite,
    pub volume_down: Sprite,
    pub volume_up: Sprite,
    pub portraits: Vec<Portrait>,
    pub font: BitmapFont,
    pub font_pages: Vec<Sprite>,
    pub items: Vec<SoundItem>,
}

impl Assets {
    /// Loads the fixed asset set below `root`. The first missing or broken
    /// file aborts the load.
    pub fn load(root: &Path) -> SoundBoardResult<Self> {
        let at = |rel: &str| -> PathBuf { root.join(rel) };

        let background = Sprite::load(&at(roster::BACKGROUND))?;
        let icon = Sprite::load(&at(roster::ICON))?;
        let overlay = Sprite::load(&at(roster::OVERLAY))?;
        let volume_down = Sprite::load(&at(roster::VOLUME_DOWN))?;
        let volume_up = Sprite::load(&at(roster::VOLUME_UP))?;

        let portraits = CHARACTERS
            .iter()
            .map(|c| {
                let normal = Sprite::load(&at(c.portrait))?;
                let pressed = normal.tinted();
                Ok(Portrait { normal, pressed })
            })
            .collect::<SoundBoardResult<Vec<_>>>()?;

        let font_path = at(roster::LABEL_FONT);
        let font = BitmapFont::load(&font_path)?;
        let font_dir = font_path.parent().unwrap_or(root);
        let font_pages = font
            .pages
            .iter()
            .map(|page| Sprite::load(&font_dir.join(page)))
            .collect::<SoundBoardResult<Vec<_>>>()?;

        let items = CHARACTERS
            .iter()
            .map(|c| {
                let (x, y) = c.label_pos;
                SoundItem::load(&at(c.audio), c.label, &font, x, y)
            })
            .collect::<SoundBoardResult<Vec<_>>>()?;

        tracing::info!(
            root = %root.display(),
            portraits = portraits.len(),
            clips = items.len(),
            font_pages = font_pages.len(),
            "assets loaded"
        );

        Ok(Assets {
            background,
            icon,
            overlay,
            volume_down,
            volume_up,
            portraits,
            font,
            font_pages,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn png(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba(px));
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn decode_keeps_dimensions_and_straight_alpha() {
        let sprite = Sprite::decode(&png(3, 2, [100, 50, 200, 128]), Path::new("a.png")).unwrap();
        assert_eq!((sprite.width, sprite.height), (3, 2));
        assert_eq!(sprite.rgba.len(), 3 * 2 * 4);
        assert_eq!(&sprite.rgba[..4], &[100, 50, 200, 128]);
        assert_eq!(sprite.size(), Size::new(3.0, 2.0));
    }

    #[test]
    fn tinted_copy_is_pink() {
        let sprite = Sprite::decode(&png(1, 1, [255, 255, 255, 255]), Path::new("a.png")).unwrap();
        let pressed = sprite.tinted();
        assert_eq!(&pressed.rgba[..], &[255, 105, 180, 255]);
        assert_eq!(&sprite.rgba[..], &[255, 255, 255, 255]);
    }

    #[test]
    fn corrupt_image_names_the_file() {
        let err = Sprite::decode(b"not a png", Path::new("mikan.png")).unwrap_err();
        assert!(matches!(err, AssetError::Image { .. }));
        assert_eq!(err.path(), Path::new("mikan.png"));
    }

    #[test]
    fn missing_asset_root_fails_on_first_file() {
        let err = Assets::load(Path::new("/nonexistent/soundboard-assets")).err().unwrap();
        assert!(matches!(err, AssetError::Io { .. }));
        assert!(err.path().ends_with(roster::BACKGROUND));
    }
}
