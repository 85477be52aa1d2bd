//! Fixed layout and asset table of the board. World coordinates are y-up
//! with the origin in the bottom-left corner of the window.

use druid::Color;

pub const WINDOW_WIDTH: f64 = 800.0;
pub const WINDOW_HEIGHT: f64 = 480.0;
pub const WINDOW_TITLE: &str = "Sound Board";

pub const CLEAR_COLOR: Color = Color::rgb8(98, 102, 101);

pub const DEFAULT_VOLUME: f32 = 0.5;
pub const VOLUME_STEP: f32 = 0.1;

pub const BACKGROUND: &str = "trialBackground.png";
pub const ICON: &str = "musicNote.png";
pub const OVERLAY: &str = "junko.png";
pub const LABEL_FONT: &str = "fonts/labelFont.fnt";

pub const VOLUME_DOWN: &str = "volDown.png";
pub const VOLUME_UP: &str = "volUp.png";
pub const VOLUME_DOWN_POS: (f64, f64) = (550.0, -10.0);
pub const VOLUME_UP_POS: (f64, f64) = (600.0, 0.0);
pub const OVERLAY_POS: (f64, f64) = (100.0, 100.0);

/// Click regions in window x and inverted y, inclusive: `(x0, x1, y0, y1)`
pub const VOLUME_DOWN_REGION: (f64, f64, f64, f64) = (500.0, 599.0, 0.0, 50.0);
pub const VOLUME_UP_REGION: (f64, f64, f64, f64) = (600.0, 700.0, 0.0, 50.0);

/// Startup flourish: frames, intensity, frames between half turns
pub const INTRO_DURATION: u32 = 100;
pub const INTRO_INTENSITY: i32 = 2;
pub const INTRO_SPEED: i32 = 10;

/// One clickable character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub label: &'static str,
    pub audio: &'static str,
    pub portrait: &'static str,
    pub label_pos: (f64, f64),
    pub portrait_pos: (f64, f64),
}

/// Hit priority follows this order.
pub const CHARACTERS: [Character; 8] = [
    Character {
        label: "Mikan",
        audio: "audio/mikanName.mp3",
        portrait: "mikan.png",
        label_pos: (50.0, 250.0),
        portrait_pos: (150.0, 250.0),
    },
    Character {
        label: "Ibuki",
        audio: "audio/ibuki.mp3",
        portrait: "ibuki.png",
        label_pos: (50.0, 150.0),
        portrait_pos: (150.0, 150.0),
    },
    Character {
        label: "Chiaki",
        audio: "audio/chiaki.mp3",
        portrait: "chiaki.png",
        label_pos: (50.0, 50.0),
        portrait_pos: (150.0, 50.0),
    },
    Character {
        label: "Nagito",
        audio: "audio/nagito.mp3",
        portrait: "nagito.png",
        label_pos: (400.0, 50.0),
        portrait_pos: (320.0, 50.0),
    },
    Character {
        label: "Miu",
        audio: "audio/miu.mp3",
        portrait: "miu.png",
        label_pos: (400.0, 150.0),
        portrait_pos: (320.0, 150.0),
    },
    Character {
        label: "Kiibo",
        audio: "audio/kiibo.mp3",
        portrait: "kiibo.png",
        label_pos: (400.0, 250.0),
        portrait_pos: (320.0, 240.0),
    },
    Character {
        label: "Monokuma",
        audio: "audio/monokuma.mp3",
        portrait: "monokuma.png",
        label_pos: (400.0, 350.0),
        portrait_pos: (330.0, 350.0),
    },
    Character {
        label: "Monomi",
        audio: "audio/usami.mp3",
        portrait: "usami.png",
        label_pos: (50.0, 350.0),
        portrait_pos: (175.0, 350.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_character_has_its_own_assets() {
        let audio: HashSet<_> = CHARACTERS.iter().map(|c| c.audio).collect();
        let portraits: HashSet<_> = CHARACTERS.iter().map(|c| c.portrait).collect();
        assert_eq!(audio.len(), CHARACTERS.len());
        assert_eq!(portraits.len(), CHARACTERS.len());
    }

    #[test]
    fn volume_regions_sit_side_by_side() {
        assert!(VOLUME_DOWN_REGION.1 < VOLUME_UP_REGION.0);
        assert!(VOLUME_UP_REGION.1 <= WINDOW_WIDTH);
    }
}
