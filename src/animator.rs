use crate::config::Options;
use crate::error::Result;
use crate::letter::{Env, Letter, PhaseKind};
use crate::random::Entropy;
use crate::schedule::FrameScheduler;
use crate::surface::Surface;

// Letters live in a space centred on the viewport, y pointing down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub half_width: f32,
    pub half_height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            half_width: width / 2.0,
            half_height: height / 2.0,
        }
    }
}

pub struct Animator<R = fastrand::Rng> {
    options: Options,
    letters: Vec<Letter>,
    size: (f32, f32),
    viewport: Viewport,
    rng: R,
    on_complete: Option<Box<dyn FnMut()>>,
    completed: bool,
}

impl<R: Entropy> Animator<R> {
    pub fn new(options: Options, surface: &mut dyn Surface, mut rng: R) -> Result<Self> {
        options.validate()?;

        let size = surface.size();
        let viewport = Viewport::new(size.0, size.1);
        surface.set_font(options.char_size);

        let letters = layout(&options, surface, &mut rng, viewport);
        log::info!(
            "laid out {} letters over {} lines in a {:.0}x{:.0} viewport",
            letters.len(),
            options.strings.len(),
            size.0,
            size.1
        );

        Ok(Self {
            options,
            letters,
            size,
            viewport,
            rng,
            on_complete: None,
            completed: false,
        })
    }

    /// Called once when every letter has finished. A later
    /// [`reset_all`](Self::reset_all) arms it again.
    pub fn on_complete(&mut self, callback: impl FnMut() + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_done(&self) -> bool {
        self.letters.iter().all(Letter::is_done)
    }

    // Letters keep whatever they were doing.
    pub fn resize(&mut self, surface: &mut dyn Surface) {
        self.size = surface.size();
        self.viewport = Viewport::new(self.size.0, self.size.1);
        surface.set_font(self.options.char_size);
        log::debug!("viewport resized to {:.0}x{:.0}", self.size.0, self.size.1);
    }

    /// Advance and draw every letter once. Asks `scheduler` for another frame
    /// while any letter is still animating. Returns `true` once all are done.
    pub fn step_all(&mut self, surface: &mut dyn Surface, scheduler: &mut dyn FrameScheduler) -> bool {
        let Viewport {
            half_width,
            half_height,
        } = self.viewport;

        surface.set_fill_style(self.options.background.into());
        surface.fill_rect(0.0, 0.0, self.size.0, self.size.1);
        surface.translate(half_width, half_height);

        let mut env = Env {
            options: &self.options,
            rng: &mut self.rng,
            viewport: self.viewport,
        };

        let mut done = true;
        for (index, letter) in self.letters.iter_mut().enumerate() {
            if let Some(kind) = letter.step(surface, &mut env) {
                log::trace!("letter {index} {:?} entered {kind:?}", letter.glyph());
            }
            done &= letter.kind() == PhaseKind::Done;
        }

        surface.translate(-half_width, -half_height);

        if !done {
            scheduler.request_frame();
        } else if !self.completed {
            self.completed = true;
            log::info!("all {} letters finished", self.letters.len());
            if let Some(callback) = self.on_complete.as_mut() {
                callback();
            }
        }

        done
    }

    pub fn reset_all(&mut self) {
        let mut env = Env {
            options: &self.options,
            rng: &mut self.rng,
            viewport: self.viewport,
        };
        for letter in &mut self.letters {
            letter.reset(&mut env);
        }
        self.completed = false;
        log::info!("animation reset");
    }
}

// Hue runs across the widest line.
fn layout(
    options: &Options,
    surface: &mut dyn Surface,
    rng: &mut dyn Entropy,
    viewport: Viewport,
) -> Vec<Letter> {
    let total_width = options.total_width();
    let line_count = options.strings.len() as f32;
    let mut env = Env {
        options,
        rng,
        viewport,
    };

    let mut letters = Vec::new();
    for (i, line) in options.strings.iter().enumerate() {
        let len = line.chars().count() as f32;
        let y = i as f32 * options.line_height + options.line_height / 2.0
            - line_count * options.line_height / 2.0;

        for (j, glyph) in line.chars().enumerate() {
            let x = j as f32 * options.char_spacing + options.char_spacing / 2.0
                - len * options.char_size / 2.0;
            let hue = if total_width > 0.0 {
                x / total_width * 360.0
            } else {
                0.0
            };
            let dx = -surface.measure_text(glyph) / 2.0;
            letters.push(Letter::new(glyph, x, y, hue, dx, &mut env));
        }
    }
    letters
}
