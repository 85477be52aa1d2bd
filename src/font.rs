//! Reader for the text variant of the AngelCode BMFont format (`.fnt`).
//!
//! Only the lines needed to lay out and draw single-line labels are read:
//! `common`, `page`, `char` and `kerning`. Everything else is skipped.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{AssetError, SoundBoardResult};

/// Placement of one glyph on its page, in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub x_offset: i32,
    pub y_offset: i32,
    pub x_advance: i32,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BitmapFont {
    pub line_height: u32,
    pub base: u32,
    /// Page image files, relative to the `.fnt` file
    pub pages: Vec<String>,
    glyphs: HashMap<char, Glyph>,
    kerning: HashMap<(char, char), i32>,
}

impl BitmapFont {
    /// Parses `.fnt` text. `origin` is only used in error messages.
    pub fn parse(src: &str, origin: &Path) -> SoundBoardResult<Self> {
        let mut line_height = None;
        let mut base = 0;
        let mut pages: Vec<(usize, String)> = Vec::new();
        let mut glyphs = HashMap::new();
        let mut kerning = HashMap::new();

        for (lineno, line) in src.lines().enumerate() {
            let mut tokens = tokenize(line).into_iter();
            let Some((tag, _)) = tokens.next() else {
                continue;
            };
            let attrs: HashMap<String, String> = tokens.collect();
            let int = |key: &str| -> SoundBoardResult<i64> {
                let raw = attrs.get(key).ok_or_else(|| {
                    AssetError::font(origin, format!("line {}: missing `{key}`", lineno + 1))
                })?;
                raw.parse().map_err(|_| {
                    AssetError::font(
                        origin,
                        format!("line {}: `{key}` is not a number: {raw}", lineno + 1),
                    )
                })
            };

            match tag.as_str() {
                "common" => {
                    line_height = Some(int("lineHeight")?.max(0) as u32);
                    base = int("base").unwrap_or(0).max(0) as u32;
                }
                "page" => {
                    let file = attrs.get("file").cloned().ok_or_else(|| {
                        AssetError::font(origin, format!("line {}: page without file", lineno + 1))
                    })?;
                    pages.push((int("id")?.max(0) as usize, file));
                }
                "char" => {
                    let id = int("id")?;
                    let Some(ch) = u32::try_from(id).ok().and_then(char::from_u32) else {
                        continue;
                    };
                    glyphs.insert(
                        ch,
                        Glyph {
                            x: int("x")?.max(0) as u32,
                            y: int("y")?.max(0) as u32,
                            width: int("width")?.max(0) as u32,
                            height: int("height")?.max(0) as u32,
                            x_offset: int("xoffset")? as i32,
                            y_offset: int("yoffset")? as i32,
                            x_advance: int("xadvance")? as i32,
                            page: int("page").unwrap_or(0).max(0) as usize,
                        },
                    );
                }
                "kerning" => {
                    let first = u32::try_from(int("first")?).ok().and_then(char::from_u32);
                    let second = u32::try_from(int("second")?).ok().and_then(char::from_u32);
                    if let (Some(first), Some(second)) = (first, second) {
                        kerning.insert((first, second), int("amount")? as i32);
                    }
                }
                _ => {}
            }
        }

        let line_height =
            line_height.ok_or_else(|| AssetError::font(origin, "missing `common` line"))?;
        if pages.is_empty() {
            return Err(AssetError::font(origin, "no `page` lines"));
        }
        pages.sort_by_key(|(id, _)| *id);
        let pages: Vec<String> = pages.into_iter().map(|(_, file)| file).collect();
        if let Some(glyph) = glyphs.values().find(|g| g.page >= pages.len()) {
            return Err(AssetError::font(
                origin,
                format!("glyph refers to missing page {}", glyph.page),
            ));
        }

        Ok(BitmapFont {
            line_height,
            base,
            pages,
            glyphs,
            kerning,
        })
    }

    pub fn load(path: &Path) -> SoundBoardResult<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        Self::parse(&src, path)
    }

    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    pub fn kerning(&self, first: char, second: char) -> i32 {
        self.kerning.get(&(first, second)).copied().unwrap_or(0)
    }

    /// Pen positions for each drawable glyph of `text`, left to right.
    /// Characters missing from the font are skipped.
    pub fn layout<'a>(&'a self, text: &str) -> Vec<(f64, &'a Glyph)> {
        let mut pen = 0i32;
        let mut prev = None;
        let mut placed = Vec::with_capacity(text.len());
        for ch in text.chars() {
            let Some(glyph) = self.glyph(ch) else {
                continue;
            };
            if let Some(prev) = prev {
                pen += self.kerning(prev, ch);
            }
            placed.push((pen as f64, glyph));
            pen += glyph.x_advance;
            prev = Some(ch);
        }
        placed
    }

    /// Width of `text` on one line: the sum of advances plus kerning.
    pub fn text_width(&self, text: &str) -> f64 {
        self.layout(text)
            .last()
            .map(|(pen, glyph)| pen + glyph.x_advance as f64)
            .unwrap_or(0.0)
    }
}

/// Splits a `.fnt` line into its tag and `key=value` pairs. Quoted values
/// may contain spaces.
fn tokenize(line: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut chars = line.trim().chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        if chars.peek().is_none() {
            break;
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            key.push(c);
            chars.next();
        }

        let mut value = String::new();
        if chars.peek() == Some(&'=') {
            chars.next();
            if chars.peek() == Some(&'"') {
                chars.next();
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                    value.push(c);
                }
            } else {
                while let Some(&c) = chars.peek() {
                    if c.is_whitespace() {
                        break;
                    }
                    value.push(c);
                    chars.next();
                }
            }
        }
        out.push((key, value));
    }
    out
}
