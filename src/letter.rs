use crate::animator::Viewport;
use crate::color::Hsla;
use crate::config::Options;
use crate::easing::{cosine_ease, sine_ease};
use crate::random::Entropy;
use crate::shard::Shard;
use crate::surface::Surface;
use crate::trail::Trail;
use std::f32::consts::TAU;

const SATURATION: f32 = 80.0;
const GLYPH_LIGHTNESS: f32 = 70.0;
const STRING_LIGHTNESS: f32 = 80.0;

pub struct Env<'a> {
    pub options: &'a Options,
    pub rng: &'a mut dyn Entropy,
    pub viewport: Viewport,
}

// Ordered by lifecycle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhaseKind {
    Firework,
    Contemplate,
    Balloon,
    Done,
}

#[derive(Clone, Debug)]
pub enum Phase {
    Firework(Firework),
    Contemplate(Contemplate),
    Balloon(Balloon),
    Done,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Firework(_) => PhaseKind::Firework,
            Phase::Contemplate(_) => PhaseKind::Contemplate,
            Phase::Balloon(_) => PhaseKind::Balloon,
            Phase::Done => PhaseKind::Done,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireworkStage {
    Waiting,
    Flying,
}

#[derive(Clone, Debug)]
pub struct Firework {
    pub stage: FireworkStage,
    pub tick: u32,
    pub spawning_time: u32,
    pub reach_time: u32,
    pub line_width: f32,
    pub trail: Trail<TrailPoint>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CircleStage {
    Creating,
    Fading,
    Settled,
}

#[derive(Clone, Debug)]
pub struct Contemplate {
    pub tick: u32,
    pub circle: CircleStage,
    pub circle_tick: u32,
    pub circle_final_size: f32,
    pub circle_complete_time: u32,
    pub circle_fade_time: u32,
    pub shards: Vec<Shard>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalloonStage {
    Spawning,
    Inflating,
    Drifting,
}

#[derive(Clone, Debug)]
pub struct Balloon {
    pub stage: BalloonStage,
    pub tick: u32,
    pub spawn_time: u32,
    pub inflate_time: u32,
    pub size: f32,
    pub vx: f32,
    pub vy: f32,
    pub cx: f32,
    pub cy: f32,
}

#[derive(Clone, Debug)]
struct Anchor {
    glyph: char,
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    color: Hsla,
}

impl Anchor {
    fn draw_glyph(&self, surface: &mut dyn Surface, x: f32, y: f32) {
        surface.set_fill_style(self.color.with_lightness(GLYPH_LIGHTNESS).into());
        surface.fill_text(self.glyph, x + self.dx, y + self.dy);
    }
}

#[derive(Clone, Debug)]
pub struct Letter {
    anchor: Anchor,
    phase: Phase,
}

impl Letter {
    // hue in degrees; dx centres the glyph on x.
    pub fn new(glyph: char, x: f32, y: f32, hue: f32, dx: f32, env: &mut Env<'_>) -> Self {
        let anchor = Anchor {
            glyph,
            x,
            y,
            dx,
            dy: env.options.char_size / 2.0,
            color: Hsla::new(hue.rem_euclid(360.0), SATURATION, 50.0, 1.0),
        };
        let phase = Phase::Firework(Firework::new(env));
        Self { anchor, phase }
    }

    pub fn glyph(&self) -> char {
        self.anchor.glyph
    }

    pub fn target(&self) -> (f32, f32) {
        (self.anchor.x, self.anchor.y)
    }

    pub fn hue(&self) -> f32 {
        self.anchor.color.hue
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    pub fn tick(&self) -> u32 {
        match &self.phase {
            Phase::Firework(f) => f.tick,
            Phase::Contemplate(c) => c.tick,
            Phase::Balloon(b) => b.tick,
            Phase::Done => 0,
        }
    }

    pub fn shards(&self) -> &[Shard] {
        match &self.phase {
            Phase::Contemplate(c) => &c.shards,
            _ => &[],
        }
    }

    pub fn reset(&mut self, env: &mut Env<'_>) {
        self.phase = Phase::Firework(Firework::new(env));
    }

    pub fn step(&mut self, surface: &mut dyn Surface, env: &mut Env<'_>) -> Option<PhaseKind> {
        let next = match &mut self.phase {
            Phase::Firework(firework) => firework.step(&self.anchor, surface, env),
            Phase::Contemplate(contemplate) => contemplate.step(&self.anchor, surface, env),
            Phase::Balloon(balloon) => balloon.step(&self.anchor, surface, env),
            Phase::Done => None,
        };

        next.map(|phase| {
            self.phase = phase;
            self.phase.kind()
        })
    }
}

impl Firework {
    fn new(env: &mut Env<'_>) -> Self {
        let opts = env.options;
        let spawning_time = opts.firework_spawn_time.ticks(env.rng);
        let reach_time = opts.firework_reach_time.ticks(env.rng).max(1);
        let line_width = opts.firework_line_width.sample(env.rng);
        let origin = TrailPoint {
            x: 0.0,
            y: env.viewport.half_height,
            width: 0.0,
        };

        Self {
            stage: FireworkStage::Waiting,
            tick: 0,
            spawning_time,
            reach_time,
            line_width,
            trail: Trail::seeded(opts.firework_prev_points, origin),
        }
    }

    fn step(&mut self, anchor: &Anchor, surface: &mut dyn Surface, env: &mut Env<'_>) -> Option<Phase> {
        if self.stage == FireworkStage::Waiting {
            if self.tick < self.spawning_time {
                self.tick += 1;
                return None;
            }
            self.tick = 0;
            self.stage = FireworkStage::Flying;
        }

        self.tick += 1;

        let hh = env.viewport.half_height;
        let linear = self.tick as f32 / self.reach_time as f32;
        self.trail.push(TrailPoint {
            x: linear * anchor.x,
            y: hh + sine_ease(linear) * (anchor.y - hh),
            width: linear * self.line_width,
        });
        self.draw(anchor, surface);

        if self.tick < self.reach_time {
            None
        } else if env.options.letter_contemplating_wait_time == 0 {
            // Nothing to contemplate: the balloon takes over on arrival.
            Some(Phase::Balloon(Balloon::new(anchor, env)))
        } else {
            Some(Phase::Contemplate(Contemplate::new(anchor, env)))
        }
    }

    fn draw(&self, anchor: &Anchor, surface: &mut dyn Surface) {
        let len = self.trail.len();
        if len < 2 {
            return;
        }

        // Newer segments are wider and more opaque.
        let width_per_point = 1.0 / (len - 1) as f32;
        for (i, older, newer) in self.trail.segments() {
            let rank = (i + 1) as f32;
            surface.set_stroke_style(anchor.color.with_alpha(rank / len as f32).into());
            surface.set_line_width(newer.width * width_per_point * rank);
            surface.begin_path();
            surface.move_to(newer.x, newer.y);
            surface.line_to(older.x, older.y);
            surface.stroke();
        }
    }
}

impl Contemplate {
    fn new(anchor: &Anchor, env: &mut Env<'_>) -> Self {
        let opts = env.options;
        let circle_final_size = opts.firework_circle_size.sample(env.rng);
        let circle_complete_time = opts.firework_circle_time.ticks(env.rng).max(1);
        let circle_fade_time = opts.firework_circle_fade_time.ticks(env.rng).max(1);

        let count = opts.firework_shards.count(env.rng);
        let step = TAU / count.max(1) as f32;
        let shards = (0..count)
            .map(|i| {
                let angle = step * (i + 1) as f32;
                let speed = opts.firework_shard_vel.sample(env.rng);
                let size = opts.firework_shard_size.sample(env.rng);
                Shard::new(
                    anchor.x,
                    anchor.y,
                    angle.cos() * speed,
                    angle.sin() * speed,
                    size,
                    anchor.color,
                    opts.firework_shard_prev_points,
                )
            })
            .collect();

        Self {
            tick: 0,
            circle: CircleStage::Creating,
            circle_tick: 0,
            circle_final_size,
            circle_complete_time,
            circle_fade_time,
            shards,
        }
    }

    fn step(&mut self, anchor: &Anchor, surface: &mut dyn Surface, env: &mut Env<'_>) -> Option<Phase> {
        self.tick += 1;

        match self.circle {
            CircleStage::Creating => {
                self.circle_tick += 1;
                let proportion = self.circle_tick as f32 / self.circle_complete_time as f32;
                let color = anchor
                    .color
                    .with_lightness(50.0 + 50.0 * proportion)
                    .with_alpha(proportion);

                surface.set_fill_style(color.into());
                surface.begin_path();
                surface.arc(
                    anchor.x,
                    anchor.y,
                    cosine_ease(proportion) * self.circle_final_size,
                    0.0,
                    TAU,
                );
                surface.fill();

                if self.circle_tick >= self.circle_complete_time {
                    self.circle_tick = 0;
                    self.circle = CircleStage::Fading;
                }
            }
            CircleStage::Fading => {
                anchor.draw_glyph(surface, anchor.x, anchor.y);

                self.circle_tick += 1;
                let proportion = self.circle_tick as f32 / self.circle_fade_time as f32;
                let color = anchor
                    .color
                    .with_lightness(100.0)
                    .with_alpha(1.0 - cosine_ease(proportion));

                surface.set_fill_style(color.into());
                surface.begin_path();
                surface.arc(anchor.x, anchor.y, self.circle_final_size, 0.0, TAU);
                surface.fill();

                if self.circle_tick >= self.circle_fade_time {
                    self.circle = CircleStage::Settled;
                }
            }
            CircleStage::Settled => anchor.draw_glyph(surface, anchor.x, anchor.y),
        }

        let gravity = env.options.gravity;
        let floor = env.viewport.half_height;
        self.shards.retain_mut(|shard| {
            shard.step(surface, gravity, floor);
            shard.is_alive()
        });

        if self.tick >= env.options.letter_contemplating_wait_time {
            Some(Phase::Balloon(Balloon::new(anchor, env)))
        } else {
            None
        }
    }
}

impl Balloon {
    fn new(anchor: &Anchor, env: &mut Env<'_>) -> Self {
        let opts = env.options;
        let spawn_time = opts.balloon_spawn_time.ticks(env.rng);
        let inflate_time = opts.balloon_inflate_time.ticks(env.rng).max(1);
        let size = opts.balloon_size.sample(env.rng).max(0.0).floor();
        let radian = opts.balloon_radian.sample(env.rng);
        let speed = opts.balloon_vel.sample(env.rng);

        Self {
            stage: BalloonStage::Spawning,
            tick: 0,
            spawn_time,
            inflate_time,
            size,
            vx: radian.cos() * speed,
            vy: radian.sin() * speed,
            cx: anchor.x,
            cy: anchor.y,
        }
    }

    fn step(&mut self, anchor: &Anchor, surface: &mut dyn Surface, env: &mut Env<'_>) -> Option<Phase> {
        surface.set_stroke_style(anchor.color.with_lightness(STRING_LIGHTNESS).into());
        surface.set_line_width(1.0);

        if self.stage == BalloonStage::Spawning {
            if self.tick < self.spawn_time {
                self.tick += 1;
                anchor.draw_glyph(surface, anchor.x, anchor.y);
                return None;
            }
            self.tick = 0;
            self.stage = BalloonStage::Inflating;
        }

        if self.stage == BalloonStage::Inflating {
            self.tick += 1;
            let proportion = self.tick as f32 / self.inflate_time as f32;
            self.cx = anchor.x;
            self.cy = anchor.y - self.size * proportion;

            surface.set_fill_style(anchor.color.with_alpha(proportion).into());
            surface.begin_path();
            balloon_path(surface, self.cx, self.cy, self.size * proportion);
            surface.fill();

            surface.begin_path();
            surface.move_to(self.cx, self.cy);
            surface.line_to(self.cx, anchor.y);
            surface.stroke();

            anchor.draw_glyph(surface, anchor.x, anchor.y);

            if self.tick >= self.inflate_time {
                self.tick = 0;
                self.stage = BalloonStage::Drifting;
            }
            return None;
        }

        self.cx += self.vx;
        self.vy += env.options.up_flow;
        self.cy += self.vy;

        surface.set_fill_style(anchor.color.into());
        surface.begin_path();
        balloon_path(surface, self.cx, self.cy, self.size);
        surface.fill();

        surface.begin_path();
        surface.move_to(self.cx, self.cy);
        surface.line_to(self.cx, self.cy + self.size);
        surface.stroke();

        anchor.draw_glyph(surface, self.cx, self.cy + self.size);

        let view = env.viewport;
        // The lower bound is measured against the half width.
        let gone = self.cy + self.size < -view.half_height
            || self.cx < -view.half_width
            || self.cy > view.half_width;
        gone.then_some(Phase::Done)
    }
}

// Teardrop hanging from (x, y) up to (x, y - size).
fn balloon_path(surface: &mut dyn Surface, x: f32, y: f32, size: f32) {
    surface.move_to(x, y);
    surface.bezier_curve_to(
        x - size / 2.0,
        y - size / 2.0,
        x - size / 4.0,
        y - size,
        x,
        y - size,
    );
    surface.bezier_curve_to(
        x + size / 4.0,
        y - size,
        x + size / 2.0,
        y - size / 2.0,
        x,
        y,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Spread;
    use crate::random::testing::Fixed;
    use crate::surface::testing::{Op, Recorder};
    use assert_matches::assert_matches;

    const VIEW: Viewport = Viewport {
        half_width: 200.0,
        half_height: 150.0,
    };

    fn fixed_options() -> Options {
        Options {
            strings: vec!["A".into()],
            firework_spawn_time: Spread::fixed(3.0),
            firework_reach_time: Spread::fixed(4.0),
            firework_circle_time: Spread::fixed(5.0),
            firework_circle_fade_time: Spread::fixed(2.0),
            firework_shards: Spread::fixed(6.0),
            letter_contemplating_wait_time: 200,
            balloon_spawn_time: Spread::fixed(2.0),
            balloon_inflate_time: Spread::fixed(3.0),
            balloon_size: Spread::fixed(20.0),
            ..Options::default()
        }
    }

    struct Harness {
        surface: Recorder,
        options: Options,
        rng: Fixed,
    }

    impl Harness {
        fn new(options: Options) -> Self {
            Self {
                surface: Recorder::new(400.0, 300.0),
                options,
                rng: Fixed(0.0),
            }
        }

        fn env(&mut self) -> Env<'_> {
            Env {
                options: &self.options,
                rng: &mut self.rng,
                viewport: VIEW,
            }
        }

        fn step(&mut self, letter: &mut Letter) -> Option<PhaseKind> {
            let mut env = Env {
                options: &self.options,
                rng: &mut self.rng,
                viewport: VIEW,
            };
            letter.step(&mut self.surface, &mut env)
        }

        fn letter(&mut self) -> Letter {
            Letter::new('A', 10.0, -20.0, 90.0, -5.0, &mut self.env())
        }
    }

    #[test]
    fn waits_silently_before_launch() {
        let mut h = Harness::new(fixed_options());
        let mut letter = h.letter();
        for _ in 0..3 {
            assert_eq!(h.step(&mut letter), None);
        }
        assert!(h.surface.ops.is_empty());
        assert_matches!(
            letter.phase(),
            Phase::Firework(Firework {
                stage: FireworkStage::Waiting,
                tick: 3,
                ..
            })
        );

        h.step(&mut letter);
        assert_matches!(
            letter.phase(),
            Phase::Firework(Firework {
                stage: FireworkStage::Flying,
                tick: 1,
                ..
            })
        );
    }

    #[test]
    fn firework_trail_arrives_at_target() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(8.0),
            ..fixed_options()
        });
        let mut letter = h.letter();
        let mut last = None;
        for _ in 0..7 {
            h.step(&mut letter);
            if let Phase::Firework(f) = letter.phase() {
                assert!(f.trail.len() <= h.options.firework_prev_points);
                last = f.trail.newest().copied();
            }
        }
        let point = last.unwrap();
        assert!((point.x - 10.0 * 7.0 / 8.0).abs() < 1e-4);
        assert!(point.y < VIEW.half_height && point.y > -20.0);

        assert_eq!(h.step(&mut letter), Some(PhaseKind::Contemplate));
    }

    #[test]
    fn firework_trail_evicts_oldest_first() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(50.0),
            firework_prev_points: 4,
            ..fixed_options()
        });
        let mut letter = h.letter();
        for _ in 0..10 {
            h.step(&mut letter);
        }
        let Phase::Firework(f) = letter.phase() else {
            panic!("still flying");
        };
        assert_eq!(f.trail.len(), 4);
        let xs: Vec<f32> = f.trail.segments().map(|(_, a, _)| a.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]));
        assert!((f.trail.oldest().unwrap().x - 10.0 * 7.0 / 50.0).abs() < 1e-4);
    }

    #[test]
    fn burst_spawns_configured_shards() {
        let mut h = Harness::new(Options {
            firework_shards: Spread::new(5.0, 5.0),
            ..fixed_options()
        });
        h.rng = Fixed(0.5);
        let mut letter = h.letter();
        while letter.kind() == PhaseKind::Firework {
            h.step(&mut letter);
        }
        assert_eq!(letter.shards().len(), 5 + (5.0f32 * 0.5) as usize);
    }

    #[test]
    fn circle_grows_then_fades_into_glyph() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(1.0),
            firework_shards: Spread::fixed(0.0),
            ..fixed_options()
        });
        let mut letter = h.letter();
        h.step(&mut letter);
        h.surface.ops.clear();

        let mut stages = Vec::new();
        for _ in 0..8 {
            h.step(&mut letter);
            if let Phase::Contemplate(c) = letter.phase() {
                stages.push(c.circle);
            }
        }
        use CircleStage::*;
        assert_eq!(
            stages,
            vec![Creating, Creating, Creating, Creating, Fading, Fading, Settled, Settled]
        );

        let radii: Vec<f32> = h
            .surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Arc { radius } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii.len(), 7);
        assert!(radii[..5].windows(2).all(|w| w[0] <= w[1]));
        assert!((radii[4] - h.options.firework_circle_size.base).abs() < 1e-4);
        assert_eq!(h.surface.glyphs(), 3);
    }

    #[test]
    fn balloon_inflates_then_drifts_off_screen() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(1.0),
            firework_shards: Spread::fixed(0.0),
            letter_contemplating_wait_time: 1,
            ..fixed_options()
        });
        let mut letter = h.letter();
        h.step(&mut letter);
        assert_eq!(h.step(&mut letter), Some(PhaseKind::Balloon));

        let mut stages = Vec::new();
        let mut frames = 0;
        while let Phase::Balloon(b) = letter.phase() {
            stages.push(b.stage);
            h.step(&mut letter);
            frames += 1;
            assert!(frames < 1000, "balloon never left the screen");
        }
        assert!(letter.is_done());
        assert_eq!(stages[0], BalloonStage::Spawning);
        assert!(stages.contains(&BalloonStage::Inflating));
        assert_eq!(stages.last(), Some(&BalloonStage::Drifting));

        let before = h.surface.ops.len();
        assert_eq!(h.step(&mut letter), None);
        assert_eq!(h.surface.ops.len(), before);
    }

    #[test]
    fn balloon_draws_shape_before_glyph() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(1.0),
            firework_shards: Spread::fixed(0.0),
            letter_contemplating_wait_time: 1,
            balloon_spawn_time: Spread::fixed(0.0),
            ..fixed_options()
        });
        let mut letter = h.letter();
        h.step(&mut letter);
        h.step(&mut letter);
        h.surface.ops.clear();
        h.step(&mut letter);

        let fill = h.surface.ops.iter().position(|op| *op == Op::Fill).unwrap();
        let text = h
            .surface
            .ops
            .iter()
            .position(|op| *op == Op::Text('A'))
            .unwrap();
        assert!(fill < text);
        assert_eq!(
            h.surface.ops.iter().filter(|op| **op == Op::Bezier).count(),
            2
        );
    }

    #[test]
    fn zero_wait_skips_contemplation() {
        let mut h = Harness::new(Options {
            firework_spawn_time: Spread::fixed(0.0),
            firework_reach_time: Spread::fixed(5.0),
            letter_contemplating_wait_time: 0,
            ..fixed_options()
        });
        let mut letter = h.letter();
        for _ in 0..4 {
            assert_eq!(h.step(&mut letter), None);
        }
        assert_eq!(h.step(&mut letter), Some(PhaseKind::Balloon));
        assert_matches!(
            letter.phase(),
            Phase::Balloon(Balloon {
                stage: BalloonStage::Spawning,
                tick: 0,
                ..
            })
        );
    }

    fn drifting(h: &mut Harness, vx: f32, vy: f32) -> Letter {
        let mut letter = h.letter();
        letter.phase = Phase::Balloon(Balloon {
            stage: BalloonStage::Drifting,
            tick: 0,
            spawn_time: 0,
            inflate_time: 1,
            size: 20.0,
            vx,
            vy,
            cx: 10.0,
            cy: -40.0,
        });
        letter
    }

    // Steps until the letter is done, returning the frame it finished on.
    fn frames_until_done(h: &mut Harness, letter: &mut Letter) -> u32 {
        for frame in 1..=1000 {
            if let Some(kind) = h.step(letter) {
                assert_eq!(kind, PhaseKind::Done);
                return frame;
            }
        }
        panic!("balloon never left the screen");
    }

    fn still_air() -> Options {
        Options {
            up_flow: 0.0,
            ..fixed_options()
        }
    }

    #[test]
    fn balloon_leaves_over_the_top() {
        let mut h = Harness::new(still_air());
        let mut letter = drifting(&mut h, 0.0, -10.0);
        // cy + size first drops below -150 at cy = -180.
        assert_eq!(frames_until_done(&mut h, &mut letter), 14);
    }

    #[test]
    fn balloon_leaves_past_the_left_edge() {
        let mut h = Harness::new(still_air());
        let mut letter = drifting(&mut h, -10.0, 0.0);
        for _ in 0..21 {
            assert_eq!(h.step(&mut letter), None);
        }
        let Phase::Balloon(b) = letter.phase() else {
            panic!("left too early");
        };
        assert_eq!(b.cx, -VIEW.half_width);
        assert_eq!(h.step(&mut letter), Some(PhaseKind::Done));
    }

    #[test]
    fn falling_balloon_leaves_below_half_width() {
        let mut h = Harness::new(still_air());
        let mut letter = drifting(&mut h, 0.0, 10.0);
        for _ in 0..24 {
            assert_eq!(h.step(&mut letter), None);
        }
        let Phase::Balloon(b) = letter.phase() else {
            panic!("left too early");
        };
        // Already past the bottom edge; the cut-off is the half width.
        assert!(b.cy > VIEW.half_height);
        assert_eq!(b.cy, VIEW.half_width);
        assert_eq!(h.step(&mut letter), Some(PhaseKind::Done));
    }

    #[test]
    fn reset_returns_to_waiting_firework() {
        let mut h = Harness::new(fixed_options());
        let mut letter = h.letter();
        for _ in 0..20 {
            h.step(&mut letter);
        }
        assert_eq!(letter.kind(), PhaseKind::Contemplate);
        assert!(!letter.shards().is_empty());

        letter.reset(&mut h.env());
        assert_eq!(letter.kind(), PhaseKind::Firework);
        assert_eq!(letter.tick(), 0);
        assert!(letter.shards().is_empty());
    }

    #[test]
    fn hue_wraps_into_degrees() {
        let mut h = Harness::new(fixed_options());
        let letter = Letter::new('x', -10.0, 0.0, -30.0, 0.0, &mut h.env());
        assert!((letter.hue() - 330.0).abs() < 1e-4);
    }
}
