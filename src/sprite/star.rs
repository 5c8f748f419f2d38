use crate::engine::{Color, PathSegment, Renderer, Size, Vector};
use rand::Rng;
use std::f64::consts::PI;

// stars fade in above and out below the visible area
const EDGE_MARGIN: f64 = 5.0;

/// Background particle
/// - radius doubles as a speed multiplier, bigger stars look closer
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    radius: f64,
    speed: f64,
}

impl Star {
    pub fn new(x: f64, y: f64, radius: f64, speed: f64) -> Self {
        Star {
            x,
            y,
            radius,
            speed,
        }
    }

    /// Anywhere in the viewport with radius in [0, max_radius)
    pub fn random(viewport: Size, max_radius: f64, speed: f64, rng: &mut impl Rng) -> Self {
        Star {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            radius: rng.gen::<f64>() * max_radius,
            speed,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Drift down, and once past the bottom edge respawn above the top at a
    /// new random column, keeping radius and speed
    pub fn update(&mut self, elapsed_ms: f64, viewport: Size, rng: &mut impl Rng) {
        self.y += self.speed * self.radius * elapsed_ms;
        if self.y > viewport.height + EDGE_MARGIN {
            self.x = rng.gen::<f64>() * viewport.width;
            self.y = -EDGE_MARGIN;
        }
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &R) {
        renderer.fill_path(
            &[PathSegment::Arc {
                center: Vector::new(self.x, self.y),
                radius: self.radius,
                start_angle: 0.0,
                end_angle: 2.0 * PI,
            }],
            Color::White,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingRenderer;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const VIEWPORT: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn drifts_by_speed_times_radius() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut star = Star::new(100.0, 10.0, 2.0, 1.0);
        star.update(16.0, VIEWPORT, &mut rng);
        assert_relative_eq!(star.y, 42.0);
        assert_relative_eq!(star.x, 100.0);
    }

    #[test]
    fn respawns_at_top_once_below_viewport() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let mut star = Star::new(123.0, 606.0, 0.5, 1.0);
            star.update(16.0, VIEWPORT, &mut rng);
            assert_relative_eq!(star.y, -5.0);
            assert!((0.0..VIEWPORT.width).contains(&star.x));
            assert_relative_eq!(star.radius(), 0.5);
        }
    }

    #[test]
    fn stays_put_at_bottom_edge() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut star = Star::new(5.0, 605.0, 0.0, 1.0);
        star.update(16.0, VIEWPORT, &mut rng);
        assert_relative_eq!(star.y, 605.0);
        assert_relative_eq!(star.x, 5.0);
    }

    #[test]
    fn random_stars_start_inside_viewport() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let star = Star::random(VIEWPORT, 5.0, 1.0, &mut rng);
            assert!((0.0..VIEWPORT.width).contains(&star.x));
            assert!((0.0..VIEWPORT.height).contains(&star.y));
            assert!((0.0..5.0).contains(&star.radius()));
        }
    }

    #[test]
    fn draws_white_disc() {
        let renderer = RecordingRenderer::default();
        Star::new(1.0, 2.0, 3.0, 1.0).draw(&renderer);
        assert_eq!(
            renderer.paths(),
            vec![(
                vec![PathSegment::Arc {
                    center: Vector::new(1.0, 2.0),
                    radius: 3.0,
                    start_angle: 0.0,
                    end_angle: 2.0 * PI,
                }],
                Color::White
            )]
        );
    }
}
