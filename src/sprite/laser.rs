use crate::engine::{Color, PathSegment, Renderer, Vector};
use std::f64::consts::PI;

const RADIUS: f64 = 3.0;
// distance from the center to each rounded tip
const TIP_OFFSET: f64 = 10.0;
/// Lasers above this line are gone for good
pub const OFFSCREEN_Y: f64 = -10.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Laser {
    pub x: f64,
    pub y: f64,
    speed: f64,
}

impl Laser {
    /// `speed` in pixels per millisecond, upward
    pub fn new(x: f64, y: f64, speed: f64) -> Self {
        Laser { x, y, speed }
    }

    pub fn update(&mut self, elapsed_ms: f64) {
        self.y -= self.speed * elapsed_ms;
    }

    pub fn is_offscreen(&self) -> bool {
        self.y < OFFSCREEN_Y
    }

    /// Lens shape : two half circles joined by straight sides
    pub fn outline(&self) -> [PathSegment; 4] {
        [
            PathSegment::Arc {
                center: Vector::new(self.x, self.y + TIP_OFFSET),
                radius: RADIUS,
                start_angle: 0.0,
                end_angle: PI,
            },
            PathSegment::LineTo(Vector::new(self.x + RADIUS, self.y)),
            PathSegment::Arc {
                center: Vector::new(self.x, self.y - TIP_OFFSET),
                radius: RADIUS,
                start_angle: PI,
                end_angle: 0.0,
            },
            PathSegment::LineTo(Vector::new(self.x - RADIUS, self.y)),
        ]
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &R) {
        renderer.fill_path(&self.outline(), Color::Red);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRenderer;
    use approx::assert_relative_eq;

    #[test]
    fn update_moves_up_by_speed_times_elapsed() {
        let mut laser = Laser::new(50.0, 300.0, 10.0);
        laser.update(16.0);
        assert_relative_eq!(laser.y, 140.0);
        assert_relative_eq!(laser.x, 50.0);
    }

    #[test]
    fn offscreen_only_strictly_above_limit() {
        assert!(Laser::new(0.0, -11.0, 10.0).is_offscreen());
        assert!(!Laser::new(0.0, -10.0, 10.0).is_offscreen());
        assert!(!Laser::new(0.0, -9.0, 10.0).is_offscreen());
    }

    #[test]
    fn draws_red_lens_around_position() {
        let renderer = RecordingRenderer::default();
        let laser = Laser::new(20.0, 40.0, 10.0);
        laser.draw(&renderer);

        let paths = renderer.paths();
        assert_eq!(paths.len(), 1);
        let (path, color) = &paths[0];
        assert_eq!(*color, Color::Red);
        assert_eq!(path.as_slice(), laser.outline().as_slice());
        assert_eq!(path[1], PathSegment::LineTo(Vector::new(23.0, 40.0)));
        assert_eq!(path[3], PathSegment::LineTo(Vector::new(17.0, 40.0)));
    }
}
