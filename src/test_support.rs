use crate::engine::{AxisRect, Color, ImageSize, PathSegment, Renderer, Size, Vector};
use std::cell::RefCell;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TestImage {
    pub width: f64,
    pub height: f64,
}

impl TestImage {
    pub fn new(width: f64, height: f64) -> Self {
        TestImage { width, height }
    }
}

impl ImageSize for TestImage {
    fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Resize(Size),
    FillRect(AxisRect, Color),
    StrokeRect(AxisRect, Color, f64),
    DrawImage(AxisRect),
    Rotate(f64),
    Save,
    Restore,
    FillText(String, Vector, f64, Color),
    FillPath(Vec<PathSegment>, Color),
}

/// Renderer that remembers every call, in order
#[derive(Default)]
pub struct RecordingRenderer {
    calls: RefCell<Vec<DrawCall>>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> Vec<DrawCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillText(text, ..) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(Vec<PathSegment>, Color)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillPath(path, color) => Some((path.clone(), *color)),
                _ => None,
            })
            .collect()
    }

    fn push(&self, call: DrawCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Renderer for RecordingRenderer {
    type Image = TestImage;

    fn resize(&self, size: Size) {
        self.push(DrawCall::Resize(size));
    }

    fn fill_rect(&self, rect: &AxisRect, color: Color) {
        self.push(DrawCall::FillRect(*rect, color));
    }

    fn stroke_rect(&self, rect: &AxisRect, color: Color, line_width: f64) {
        self.push(DrawCall::StrokeRect(*rect, color, line_width));
    }

    fn draw_image(&self, _image: &TestImage, destination: &AxisRect) {
        self.push(DrawCall::DrawImage(*destination));
    }

    fn rotate(&self, radians: f64) {
        self.push(DrawCall::Rotate(radians));
    }

    fn save(&self) {
        self.push(DrawCall::Save);
    }

    fn restore(&self) {
        self.push(DrawCall::Restore);
    }

    fn fill_text(&self, text: &str, position: Vector, font_size: f64, color: Color) {
        self.push(DrawCall::FillText(
            text.to_string(),
            position,
            font_size,
            color,
        ));
    }

    fn fill_path(&self, path: &[PathSegment], color: Color) {
        self.push(DrawCall::FillPath(path.to_vec(), color));
    }
}
