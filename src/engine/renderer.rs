use super::geometry::{AxisRect, Size, Vector};
use crate::browser;
use anyhow::Result;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// Anything the renderer can blit, as far as the simulation cares : only
/// its natural dimensions
pub trait ImageSize {
    fn size(&self) -> Size;
}

impl ImageSize for HtmlImageElement {
    fn size(&self) -> Size {
        Size {
            width: f64::from(HtmlImageElement::width(self)),
            height: f64::from(HtmlImageElement::height(self)),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    Background,
    White,
    Red,
    Green,
    Yellow,
    Black,
}

impl Color {
    pub fn css(&self) -> &'static str {
        match self {
            Color::Background => "#000025",
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Black => "black",
        }
    }
}

/// One step of a filled path, angles in radians
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathSegment {
    Arc {
        center: Vector,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    LineTo(Vector),
}

/// Drawing surface consumed by the game
/// - everything the sprites and HUD need, nothing more
/// - `CanvasRenderer` is the browser implementation
pub trait Renderer {
    type Image: ImageSize;

    fn resize(&self, size: Size);
    fn fill_rect(&self, rect: &AxisRect, color: Color);
    fn stroke_rect(&self, rect: &AxisRect, color: Color, line_width: f64);
    fn draw_image(&self, image: &Self::Image, destination: &AxisRect);
    fn rotate(&self, radians: f64);
    fn save(&self);
    fn restore(&self);
    fn fill_text(&self, text: &str, position: Vector, font_size: f64, color: Color);
    fn fill_path(&self, path: &[PathSegment], color: Color);
}

/// Scoped transform
/// - `save()` when created, `restore()` when dropped
/// - rotations applied inside the scope never leak into the next sprite
///   or the next frame
pub struct SavedTransform<'a, R: Renderer + ?Sized> {
    renderer: &'a R,
}

impl<'a, R: Renderer + ?Sized> SavedTransform<'a, R> {
    pub fn new(renderer: &'a R) -> Self {
        renderer.save();
        SavedTransform { renderer }
    }
}

impl<R: Renderer + ?Sized> Drop for SavedTransform<'_, R> {
    fn drop(&mut self) {
        self.renderer.restore();
    }
}

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new() -> Result<Self> {
        Ok(CanvasRenderer {
            canvas: browser::canvas()?,
            context: browser::context()?,
        })
    }

    // A failed canvas call only loses part of one frame, so it is logged
    // and the frame carries on
    fn report(result: Result<(), JsValue>, operation: &str) {
        if let Err(err) = result {
            error!("[renderer] {} failed : {:#?}", operation, err);
        }
    }
}

impl Renderer for CanvasRenderer {
    type Image = HtmlImageElement;

    fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    fn fill_rect(&self, rect: &AxisRect, color: Color) {
        self.context.set_fill_style_str(color.css());
        self.context
            .fill_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn stroke_rect(&self, rect: &AxisRect, color: Color, line_width: f64) {
        self.context.set_stroke_style_str(color.css());
        self.context.set_line_width(line_width);
        self.context
            .stroke_rect(rect.x(), rect.y(), rect.width(), rect.height());
    }

    fn draw_image(&self, image: &HtmlImageElement, destination: &AxisRect) {
        Self::report(
            self.context
                .draw_image_with_html_image_element_and_dw_and_dh(
                    image,
                    destination.x(),
                    destination.y(),
                    destination.width(),
                    destination.height(),
                ),
            "draw_image",
        );
    }

    fn rotate(&self, radians: f64) {
        Self::report(self.context.rotate(radians), "rotate");
    }

    fn save(&self) {
        self.context.save();
    }

    fn restore(&self) {
        self.context.restore();
    }

    fn fill_text(&self, text: &str, position: Vector, font_size: f64, color: Color) {
        self.context.set_font(&format!("{}px Arial", font_size));
        self.context.set_fill_style_str(color.css());
        Self::report(
            self.context.fill_text(text, position.x, position.y),
            "fill_text",
        );
    }

    fn fill_path(&self, path: &[PathSegment], color: Color) {
        self.context.begin_path();
        self.context.set_fill_style_str(color.css());
        for segment in path {
            match *segment {
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => Self::report(
                    self.context
                        .arc(center.x, center.y, radius, start_angle, end_angle),
                    "arc",
                ),
                PathSegment::LineTo(point) => self.context.line_to(point.x, point.y),
            }
        }
        self.context.fill();
        self.context.close_path();
    }
}
