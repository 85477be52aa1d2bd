use crate::camera::{Camera, ProjectionTarget};

/// Degrees applied to the camera on every pulse
const PULSE_DEGREES: f64 = 180.0;

/// Bounded camera flourish: flips the view every `speed` ticks until
/// `duration` ticks have elapsed since the last [`CameraMove::start`].
///
/// The driver is idle when `progress >= duration` or `speed == 0`. A freshly
/// built driver is idle until started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraMove {
    duration: u32,
    progress: u32,
    intensity: u32,
    speed: u32,
}

impl CameraMove {
    pub fn new(duration: u32, intensity: i32, speed: i32) -> Self {
        let mut effect = CameraMove {
            duration,
            progress: duration,
            intensity: 0,
            speed: 0,
        };
        effect.set_intensity(intensity);
        effect.set_speed(speed);
        effect
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn intensity(&self) -> u32 {
        self.intensity
    }

    /// Negative values clamp to zero.
    pub fn set_intensity(&mut self, intensity: i32) {
        self.intensity = intensity.max(0) as u32;
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Negative values clamp to zero, which leaves the driver idle for good.
    /// A period longer than the duration becomes `duration / 2`.
    pub fn set_speed(&mut self, speed: i32) {
        self.speed = if speed < 0 {
            0
        } else if speed as u32 > self.duration {
            self.duration / 2
        } else {
            speed as u32
        };
    }

    pub fn is_active(&self) -> bool {
        self.progress < self.duration && self.speed > 0
    }

    /// Rewinds progress and pushes the current camera state right away.
    pub fn start(&mut self, cam: &mut Camera, targets: &mut [&mut dyn ProjectionTarget]) {
        self.progress = 0;
        cam.push_to(targets);
    }

    /// Advances one frame. Does nothing while idle.
    pub fn tick(&mut self, cam: &mut Camera, targets: &mut [&mut dyn ProjectionTarget]) {
        if !self.is_active() {
            return;
        }

        if self.progress % self.speed == 0 {
            tracing::trace!(progress = self.progress, "camera pulse");
            cam.rotate(PULSE_DEGREES);
        }

        self.progress += 1;

        if !self.is_active() {
            // settle
            cam.translate(0.0, 0.0);
            tracing::debug!(duration = self.duration, "camera flourish finished");
        }

        cam.push_to(targets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Surface;

    fn rig() -> (Camera, Surface) {
        let mut cam = Camera::new(800.0, 480.0);
        cam.translate(400.0, 240.0);
        cam.update();
        (cam, Surface::new())
    }

    #[test]
    fn idle_until_started() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 10);
        assert!(!effect.is_active());

        effect.tick(&mut cam, &mut [&mut surface]);
        assert_eq!(surface.updates(), 0);
        assert_eq!(cam.rotation(), 0.0);
    }

    #[test]
    fn start_pushes_projection_and_activates() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 10);
        effect.start(&mut cam, &mut [&mut surface]);
        assert!(effect.is_active());
        assert_eq!(effect.progress(), 0);
        assert_eq!(surface.updates(), 1);
        assert_eq!(surface.projection(), cam.combined());
    }

    #[test]
    fn start_with_zero_speed_stays_idle() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 0);
        effect.start(&mut cam, &mut [&mut surface]);
        assert!(!effect.is_active());
        effect.tick(&mut cam, &mut [&mut surface]);
        assert_eq!(effect.progress(), 0);
    }

    #[test]
    fn first_ten_ticks_pulse_once() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 10);
        effect.start(&mut cam, &mut [&mut surface]);

        for _ in 0..10 {
            effect.tick(&mut cam, &mut [&mut surface]);
        }
        assert_eq!(cam.rotation(), 180.0);
        assert_eq!(effect.progress(), 10);
        assert!(effect.is_active());
        // one push from start, one per tick
        assert_eq!(surface.updates(), 11);
    }

    #[test]
    fn still_active_after_nine_ticks() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 10);
        effect.start(&mut cam, &mut [&mut surface]);
        for _ in 0..9 {
            effect.tick(&mut cam, &mut [&mut surface]);
        }
        assert_eq!(effect.progress(), 9);
        assert!(effect.is_active());
    }

    #[test]
    fn finishes_after_duration_ticks_and_stays_idle() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, 10);
        effect.start(&mut cam, &mut [&mut surface]);

        for _ in 0..99 {
            effect.tick(&mut cam, &mut [&mut surface]);
        }
        assert!(effect.is_active());
        effect.tick(&mut cam, &mut [&mut surface]);
        assert!(!effect.is_active());
        // ten half turns bring the view back upright
        assert_eq!(cam.rotation(), 0.0);

        let pushes = surface.updates();
        for _ in 0..50 {
            effect.tick(&mut cam, &mut [&mut surface]);
        }
        assert!(!effect.is_active());
        assert_eq!(effect.progress(), 100);
        assert_eq!(surface.updates(), pushes);
    }

    #[test]
    fn restart_rewinds_progress() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(4, 0, 2);
        effect.start(&mut cam, &mut [&mut surface]);
        for _ in 0..4 {
            effect.tick(&mut cam, &mut [&mut surface]);
        }
        assert!(!effect.is_active());
        effect.start(&mut cam, &mut [&mut surface]);
        assert!(effect.is_active());
        assert_eq!(effect.progress(), 0);
    }

    #[test]
    fn speed_setter_edge_cases() {
        let mut effect = CameraMove::new(100, 2, 10);
        effect.set_speed(250);
        assert_eq!(effect.speed(), 50);

        effect.set_speed(100);
        assert_eq!(effect.speed(), 100);

        effect.set_speed(-3);
        assert_eq!(effect.speed(), 0);

        let odd = CameraMove::new(7, 0, 8);
        assert_eq!(odd.speed(), 3);
    }

    #[test]
    fn negative_speed_never_activates() {
        let (mut cam, mut surface) = rig();
        let mut effect = CameraMove::new(100, 2, -5);
        effect.start(&mut cam, &mut [&mut surface]);
        assert!(!effect.is_active());
    }

    #[test]
    fn negative_intensity_clamps_to_zero() {
        let mut effect = CameraMove::new(100, -4, 10);
        assert_eq!(effect.intensity(), 0);
        effect.set_intensity(3);
        assert_eq!(effect.intensity(), 3);
        effect.set_intensity(-1);
        assert_eq!(effect.intensity(), 0);
    }
}
