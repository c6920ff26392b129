use crate::color::Rgba;

/// Immediate-mode 2D drawing context modelled on a canvas. Later paint covers earlier paint.
pub trait Surface {
    fn size(&self) -> (f32, f32);

    fn translate(&mut self, dx: f32, dy: f32);

    fn set_fill_style(&mut self, color: Rgba);
    fn set_stroke_style(&mut self, color: Rgba);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, size: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn bezier_curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32);
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    fn stroke(&mut self);
    fn fill(&mut self);

    // Left baseline at (x, y).
    fn fill_text(&mut self, glyph: char, x: f32, y: f32);
    fn measure_text(&self, glyph: char) -> f32;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Surface;
    use crate::color::Rgba;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        FillRect,
        Stroke,
        Fill,
        Arc { radius: f32 },
        Bezier,
        Text(char),
        Font(f32),
    }

    pub struct Recorder {
        pub width: f32,
        pub height: f32,
        pub ops: Vec<Op>,
        pub offset: (f32, f32),
    }

    impl Recorder {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                ops: Vec::new(),
                offset: (0.0, 0.0),
            }
        }

        pub fn glyphs(&self) -> usize {
            self.ops.iter().filter(|op| matches!(op, Op::Text(_))).count()
        }
    }

    impl Surface for Recorder {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }
        fn translate(&mut self, dx: f32, dy: f32) {
            self.offset.0 += dx;
            self.offset.1 += dy;
        }
        fn set_fill_style(&mut self, _color: Rgba) {}
        fn set_stroke_style(&mut self, _color: Rgba) {}
        fn set_line_width(&mut self, _width: f32) {}
        fn set_font(&mut self, size: f32) {
            self.ops.push(Op::Font(size));
        }
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.ops.push(Op::FillRect);
        }
        fn begin_path(&mut self) {}
        fn move_to(&mut self, _x: f32, _y: f32) {}
        fn line_to(&mut self, _x: f32, _y: f32) {}
        fn bezier_curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {
            self.ops.push(Op::Bezier);
        }
        fn arc(&mut self, _x: f32, _y: f32, radius: f32, _start: f32, _end: f32) {
            self.ops.push(Op::Arc { radius });
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
        fn fill(&mut self) {
            self.ops.push(Op::Fill);
        }
        fn fill_text(&mut self, glyph: char, _x: f32, _y: f32) {
            self.ops.push(Op::Text(glyph));
        }
        fn measure_text(&self, _glyph: char) -> f32 {
            10.0
        }
    }
}
