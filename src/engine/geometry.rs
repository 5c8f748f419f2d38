/// 2D point or displacement in canvas pixels
/// - origin is the top left corner, y grows downward
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// In place sum, used for velocity -> position and
    /// acceleration -> velocity
    pub fn add(&mut self, other: Vector) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis aligned rectangle
/// - built on demand from an owner's position and rendered size
/// - never stored, so a changed scale is picked up on the next access
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisRect {
    pub position: Vector,
    pub size: Size,
}

impl AxisRect {
    pub const fn new(position: Vector, size: Size) -> Self {
        AxisRect { position, size }
    }

    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        AxisRect {
            position: Vector { x, y },
            size: Size { width, height },
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn left(&self) -> f64 {
        self.position.x
    }

    pub fn right(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn top(&self) -> f64 {
        self.position.y
    }

    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.height
    }

    pub fn center(&self) -> Vector {
        Vector {
            x: self.position.x + self.size.width / 2.0,
            y: self.position.y + self.size.height / 2.0,
        }
    }
}
