use std::path::Path;

use crate::audio::{Clip, Playback};
use crate::error::SoundBoardResult;
use crate::font::BitmapFont;
use crate::label::Label;

/// A label that plays its clip when clicked.
#[derive(Debug, Clone)]
pub struct SoundItem {
    label: Label,
    clip: Clip,
}

impl SoundItem {
    /// Loads the clip at `audio_path` and places a label at `(x, y)`.
    pub fn load(
        audio_path: &Path,
        text: &str,
        font: &BitmapFont,
        x: f64,
        y: f64,
    ) -> SoundBoardResult<Self> {
        let clip = Clip::load(audio_path)?;
        Ok(Self::new(Label::new(text, font, x, y), clip))
    }

    pub fn new(label: Label, clip: Clip) -> Self {
        SoundItem { label, clip }
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn hit_test(&self, px: f64, py: f64) -> bool {
        self.label.hit_test(px, py)
    }

    /// Starts the clip at `volume`. Earlier plays keep running.
    pub fn play(&self, out: &impl Playback, volume: f32) {
        tracing::debug!(item = self.label.text(), volume, "play");
        out.play(&self.clip, volume);
    }
}
