use druid::kurbo::{Point, Size, Vec2};

use crate::audio::Playback;
use crate::camera::{Camera, Surface};
use crate::effect::CameraMove;
use crate::input::InputSnapshot;
use crate::roster::{
    self, INTRO_DURATION, INTRO_INTENSITY, INTRO_SPEED, VOLUME_DOWN_REGION, VOLUME_STEP,
    VOLUME_UP_REGION,
};
use crate::sound::SoundItem;

/// Where the decorative icon is drawn. `origin` is the rotation pivot
/// relative to `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconPose {
    pub pos: Point,
    pub origin: Vec2,
    pub size: Size,
    pub angle: f64,
}

impl IconPose {
    pub fn new(size: Size) -> Self {
        IconPose {
            pos: Point::ZERO,
            origin: Vec2::new(size.width / 2.0, size.height / 2.0),
            size,
            angle: 0.0,
        }
    }
}

/// What a frame decided, for the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    /// Index of the item whose clip started this frame
    pub played: Option<usize>,
    /// Index of the item held down, drawn highlighted
    pub pressed: Option<usize>,
    pub show_overlay: bool,
}

/// Whole application state, advanced once per frame.
pub struct Board {
    items: Vec<SoundItem>,
    volume: f32,
    icon: IconPose,
    camera: Camera,
    effect: CameraMove,
    /// Background, portraits, icon and labels
    sprites: Surface,
    /// Highlights and the overlay image
    overlay: Surface,
    frames: u64,
}

impl Board {
    pub fn new(items: Vec<SoundItem>, icon_size: Size, volume: f32) -> Self {
        let mut camera = Camera::new(roster::WINDOW_WIDTH, roster::WINDOW_HEIGHT);
        camera.translate(roster::WINDOW_WIDTH / 2.0, roster::WINDOW_HEIGHT / 2.0);
        let mut sprites = Surface::new();
        let mut overlay = Surface::new();
        camera.push_to(&mut [&mut sprites, &mut overlay]);

        Board {
            items,
            volume: clamp_volume(volume),
            icon: IconPose::new(icon_size),
            camera,
            effect: CameraMove::new(INTRO_DURATION, INTRO_INTENSITY, INTRO_SPEED),
            sprites,
            overlay,
            frames: 0,
        }
    }

    /// Starts the camera flourish and runs its first tick.
    pub fn start_intro(&mut self) {
        self.effect
            .start(&mut self.camera, &mut [&mut self.sprites, &mut self.overlay]);
        self.effect
            .tick(&mut self.camera, &mut [&mut self.sprites, &mut self.overlay]);
        tracing::debug!("intro started");
    }

    pub fn items(&self) -> &[SoundItem] {
        &self.items
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn icon(&self) -> &IconPose {
        &self.icon
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn effect(&self) -> &CameraMove {
        &self.effect
    }

    pub fn sprites(&self) -> &Surface {
        &self.sprites
    }

    pub fn overlay(&self) -> &Surface {
        &self.overlay
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one frame: icon, camera, clicks, highlight, overlay.
    pub fn frame(&mut self, input: &InputSnapshot, out: &impl Playback) -> FrameOutcome {
        self.frames += 1;
        self.move_icon(input);

        self.effect
            .tick(&mut self.camera, &mut [&mut self.sprites, &mut self.overlay]);

        let px = input.pointer.x;
        let py = roster::WINDOW_HEIGHT - input.pointer.y;
        let mut outcome = FrameOutcome {
            show_overlay: input.space,
            ..FrameOutcome::default()
        };

        if input.left_just_pressed {
            if in_region(VOLUME_DOWN_REGION, px, py) {
                self.set_volume(self.volume - VOLUME_STEP);
            } else if in_region(VOLUME_UP_REGION, px, py) {
                self.set_volume(self.volume + VOLUME_STEP);
            } else if let Some(index) = self.item_at(px, py) {
                self.items[index].play(out, self.volume);
                outcome.played = Some(index);
            }
        }

        if input.left {
            outcome.pressed = self.item_at(px, py);
        }

        outcome
    }

    /// First item, in roster order, whose label contains the world point
    pub fn item_at(&self, px: f64, py: f64) -> Option<usize> {
        self.items.iter().position(|item| item.hit_test(px, py))
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        tracing::debug!(volume = self.volume, "volume changed");
    }

    fn move_icon(&mut self, input: &InputSnapshot) {
        if input.touched() {
            let x = input.pointer.x;
            let y = roster::WINDOW_HEIGHT - input.pointer.y;
            if input.left {
                self.icon.pos = Point::new(
                    x - self.icon.size.width / 2.0,
                    y - self.icon.size.height / 2.0,
                );
            } else {
                self.icon.origin = Vec2::new(x, y);
            }
        }
        self.camera.push_to(&mut [&mut self.sprites]);
    }
}

fn in_region((x0, x1, y0, y1): (f64, f64, f64, f64), px: f64, py: f64) -> bool {
    px >= x0 && px <= x1 && py >= y0 && py <= y1
}

fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0)
}
