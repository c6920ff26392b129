use crate::color::Hsla;
use crate::surface::Surface;
use crate::trail::Trail;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct Shard {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    color: Hsla,
    trail: Trail<Point>,
    alive: bool,
}

impl Shard {
    pub fn new(x: f32, y: f32, vx: f32, vy: f32, size: f32, color: Hsla, history: usize) -> Self {
        Self {
            x,
            y,
            vx,
            vy,
            size,
            color,
            trail: Trail::seeded(history, Point { x, y }),
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn trail(&self) -> &Trail<Point> {
        &self.trail
    }

    // Dies once the tail of the streak drops below floor.
    pub fn step(&mut self, surface: &mut dyn Surface, gravity: f32, floor: f32) {
        self.x += self.vx;
        self.vy += gravity;
        self.y += self.vy;

        self.trail.push(Point { x: self.x, y: self.y });

        let len = self.trail.len() as f32;
        let width_per_point = self.size / len;
        for (k, older, newer) in self.trail.segments() {
            surface.set_stroke_style(self.color.with_alpha(k as f32 / len).into());
            surface.set_line_width(k as f32 * width_per_point);
            surface.begin_path();
            surface.move_to(older.x, older.y);
            surface.line_to(newer.x, newer.y);
            surface.stroke();
        }

        if self.trail.oldest().is_some_and(|tail| tail.y > floor) {
            self.alive = false;
        }
    }
}
