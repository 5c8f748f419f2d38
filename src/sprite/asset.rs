use crate::engine::{AxisRect, Color, ImageSize, Renderer, SavedTransform, Size, Vector};
use std::rc::Rc;

const FULL_TURN: f64 = 360.0;
const OUTLINE_WIDTH: f64 = 1.0;

/// Image backed moving entity, used for the player ship and the enemies
/// - image is shared and immutable, only its size matters to the simulation
/// - rotation is in degrees, rotation_speed in degrees per millisecond
pub struct Asset<I> {
    image: Rc<I>,
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    rotation: f64,
    pub rotation_speed: f64,
    scale: f64,
    pub visible: bool,
    pub outline: bool,
}

impl<I: ImageSize> Asset<I> {
    pub fn new(image: Rc<I>, scale: f64) -> Self {
        Asset {
            image,
            position: Vector::default(),
            velocity: Vector::default(),
            acceleration: Vector::default(),
            rotation: 0.0,
            rotation_speed: 0.0,
            scale,
            visible: true,
            outline: true,
        }
    }

    pub fn image(&self) -> &I {
        &self.image
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rendered size : image size * scale
    pub fn size(&self) -> Size {
        let image = self.image.size();
        Size {
            width: image.width * self.scale,
            height: image.height * self.scale,
        }
    }

    pub fn rect(&self) -> AxisRect {
        AxisRect::new(self.position, self.size())
    }

    /// Move to `position` and stop
    pub fn place(&mut self, position: Vector) {
        self.position = position;
        self.velocity = Vector::default();
    }

    /// ::update per frame
    /// - rotation wraps with ONE subtraction, so a step of more than a full
    ///   turn stays above 360 until later frames bring it back
    /// - velocity and position integrate per frame, not per millisecond
    pub fn update(&mut self, elapsed_ms: f64) {
        self.rotation += self.rotation_speed * elapsed_ms;
        if self.rotation >= FULL_TURN {
            self.rotation -= FULL_TURN;
        }
        self.velocity.add(self.acceleration);
        self.position.add(self.velocity);
    }

    pub fn draw<R: Renderer<Image = I>>(&self, renderer: &R) {
        if !self.visible {
            return;
        }
        let rect = self.rect();
        let _transform = SavedTransform::new(renderer);
        renderer.rotate(self.rotation.to_radians());
        renderer.draw_image(self.image(), &rect);
        if self.outline {
            renderer.stroke_rect(&rect, Color::White, OUTLINE_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DrawCall, RecordingRenderer, TestImage};
    use approx::assert_relative_eq;

    fn ship() -> Asset<TestImage> {
        Asset::new(Rc::new(TestImage::new(200.0, 100.0)), 0.5)
    }

    #[test]
    fn rect_is_scaled_image_at_position() {
        let mut asset = ship();
        asset.position = Vector::new(10.0, 20.0);
        let rect = asset.rect();
        assert_relative_eq!(rect.left(), 10.0);
        assert_relative_eq!(rect.top(), 20.0);
        assert_relative_eq!(rect.width(), 100.0);
        assert_relative_eq!(rect.height(), 50.0);
    }

    #[test]
    fn update_integrates_per_frame_regardless_of_elapsed_time() {
        let mut asset = ship();
        asset.velocity = Vector::new(1.0, 0.0);
        asset.acceleration = Vector::new(0.5, 2.0);

        asset.update(16.0);
        assert_eq!(asset.velocity, Vector::new(1.5, 2.0));
        assert_eq!(asset.position, Vector::new(1.5, 2.0));

        asset.update(1000.0);
        assert_eq!(asset.velocity, Vector::new(2.0, 4.0));
        assert_eq!(asset.position, Vector::new(3.5, 6.0));
    }

    #[test]
    fn rotation_wraps_into_full_turn() {
        let mut asset = ship();
        asset.rotation_speed = 1.0;
        asset.update(350.0);
        assert_relative_eq!(asset.rotation(), 350.0);
        asset.update(20.0);
        assert_relative_eq!(asset.rotation(), 10.0);
        for _ in 0..50 {
            asset.update(33.0);
            assert!((0.0..360.0).contains(&asset.rotation()));
        }
    }

    #[test]
    fn rotation_wraps_with_a_single_subtraction() {
        let mut asset = ship();
        asset.rotation_speed = 4.0;
        asset.update(100.0);
        assert_relative_eq!(asset.rotation(), 40.0);

        let mut asset = ship();
        asset.rotation_speed = 8.0;
        asset.update(100.0);
        // 800 - 360, not 800 % 360
        assert_relative_eq!(asset.rotation(), 440.0);
        // the next ordinary frame finishes the wrap
        asset.rotation_speed = 0.0;
        asset.update(16.0);
        assert_relative_eq!(asset.rotation(), 80.0);
    }

    #[test]
    fn place_moves_and_stops() {
        let mut asset = ship();
        asset.velocity = Vector::new(1.0, -1.0);
        asset.place(Vector::new(-100.0, -100.0));
        assert_eq!(asset.position, Vector::new(-100.0, -100.0));
        assert_eq!(asset.velocity, Vector::default());
    }

    #[test]
    fn draw_rotates_inside_a_saved_transform() {
        let renderer = RecordingRenderer::default();
        let mut asset = ship();
        asset.rotation_speed = 1.0;
        asset.update(90.0);
        asset.draw(&renderer);

        let rect = asset.rect();
        assert_eq!(
            renderer.calls(),
            vec![
                DrawCall::Save,
                DrawCall::Rotate(90.0_f64.to_radians()),
                DrawCall::DrawImage(rect),
                DrawCall::StrokeRect(rect, Color::White, 1.0),
                DrawCall::Restore,
            ]
        );
    }

    #[test]
    fn draw_without_outline_skips_stroke() {
        let renderer = RecordingRenderer::default();
        let mut asset = ship();
        asset.outline = false;
        asset.draw(&renderer);
        assert!(!renderer
            .calls()
            .iter()
            .any(|call| matches!(call, DrawCall::StrokeRect(..))));
    }

    #[test]
    fn hidden_asset_draws_nothing() {
        let renderer = RecordingRenderer::default();
        let mut asset = ship();
        asset.visible = false;
        asset.draw(&renderer);
        assert!(renderer.calls().is_empty());
    }
}
