use macroquad::prelude::{vec2, Vec2};

/// Axis-aligned rectangle from `start` (top-left) to `end` (bottom-right).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub start: Vec2,
    pub end: Vec2,
}

impl Rect {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    pub fn center(self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    #[allow(dead_code)]
    pub fn top_left(self) -> Vec2 {
        self.start
    }

    #[allow(dead_code)]
    pub fn top_right(self) -> Vec2 {
        vec2(self.end.x, self.start.y)
    }

    #[allow(dead_code)]
    pub fn bottom_left(self) -> Vec2 {
        vec2(self.start.x, self.end.y)
    }

    #[allow(dead_code)]
    pub fn bottom_right(self) -> Vec2 {
        self.end
    }

    pub fn width(self) -> f32 {
        self.end.x - self.start.x
    }

    pub fn height(self) -> f32 {
        self.end.y - self.start.y
    }

    #[allow(dead_code)]
    pub fn inner_square(self) -> Rect {
        Self::centered_square(self.center(), self.width().min(self.height()))
    }

    #[allow(dead_code)]
    pub fn outer_square(self) -> Rect {
        Self::centered_square(self.center(), self.width().max(self.height()))
    }

    pub fn inner_circle(self) -> Circle {
        Circle::new(self.center(), self.width().min(self.height()) / 2.0)
    }

    #[allow(dead_code)]
    pub fn outer_circle(self) -> Circle {
        Circle::new(self.center(), self.width().max(self.height()) / 2.0)
    }

    fn centered_square(center: Vec2, side: f32) -> Rect {
        let half = vec2(side / 2.0, side / 2.0);
        Rect::new(center - half, center + half)
    }
}

/// Circle around `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub point: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(point: Vec2, radius: f32) -> Self {
        Self { point, radius }
    }

    /// Largest square fitting inside the circle: half-width radius/sqrt(2).
    #[allow(dead_code)]
    pub fn inner_square(self) -> Rect {
        let w = self.radius / std::f32::consts::SQRT_2;
        Rect::new(self.point - vec2(w, w), self.point + vec2(w, w))
    }

    #[allow(dead_code)]
    pub fn outer_square(self) -> Rect {
        let w = self.radius;
        Rect::new(self.point - vec2(w, w), self.point + vec2(w, w))
    }
}
