use druid::kurbo::{Affine, Point, Vec2};

/// Anything that draws through the camera and needs its projection.
pub trait ProjectionTarget {
    fn set_projection(&mut self, combined: Affine);
}

/// A drawing layer. Sprites queued on a layer are painted with the last
/// projection it received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    projection: Affine,
    updates: u64,
}

impl Surface {
    pub fn new() -> Self {
        Surface {
            projection: Affine::IDENTITY,
            updates: 0,
        }
    }

    pub fn projection(&self) -> Affine {
        self.projection
    }

    /// Number of projection updates received since creation
    pub fn updates(&self) -> u64 {
        self.updates
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectionTarget for Surface {
    fn set_projection(&mut self, combined: Affine) {
        self.projection = combined;
        self.updates += 1;
    }
}

/// Orthographic 2D camera over a y-up world.
///
/// `combined` maps world coordinates to window pixels (y-down). It is only
/// refreshed by [`Camera::update`], so moves and rotations are batched until
/// the next update.
#[derive(Debug, Clone)]
pub struct Camera {
    viewport: Vec2,
    position: Point,
    /// Rotation of the view around its centre, in degrees
    rotation: f64,
    combined: Affine,
}

impl Camera {
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        let mut cam = Camera {
            viewport: Vec2::new(viewport_width, viewport_height),
            position: Point::ZERO,
            rotation: 0.0,
            combined: Affine::IDENTITY,
        };
        cam.update();
        cam
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position += Vec2::new(dx, dy);
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.rotation = (self.rotation + degrees).rem_euclid(360.0);
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Recomputes the world to window transform.
    pub fn update(&mut self) {
        let half = self.viewport / 2.0;
        self.combined = Affine::translate(half)
            * Affine::FLIP_Y
            * Affine::rotate(self.rotation.to_radians())
            * Affine::translate(-self.position.to_vec2());
    }

    pub fn combined(&self) -> Affine {
        self.combined
    }

    /// Recomputes the projection and hands it to every target.
    pub fn push_to(&mut self, targets: &mut [&mut dyn ProjectionTarget]) {
        self.update();
        for target in targets.iter_mut() {
            target.set_projection(self.combined);
        }
    }
}
