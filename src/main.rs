use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use skywriter::{Animator, FrameClock, FrameScheduler, Options, Rgb, TermCanvas};
use std::cell::Cell;
use std::fs::File;
use std::io::{stdout, BufWriter, Stdout};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

const FPS: u32 = 60;
const DEFAULT_SCALE: f32 = 0.125;
const HOLD_AFTER_DONE: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(name = "skywriter", version)]
#[command(about = "Fireworks that spell a message, then float away on balloons", long_about = None)]
struct Cli {
    /// Lines of text to display (overrides the config file)
    lines: Vec<String>,

    /// JSON file with animation options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Background color as hex (e.g. --bg-color 1a1b26)
    #[arg(long, value_parser = parse_color)]
    bg_color: Option<Rgb>,

    /// Terminal pixels per logical unit; shrunk further if the message does not fit
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    scale: f32,

    /// Replay the animation forever
    #[arg(long = "loop")]
    repeat: bool,

    /// Seed for the random source
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective options as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn parse_color(hex: &str) -> skywriter::Result<Rgb> {
    Rgb::parse_hex(hex)
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    // The terminal is in the alternate screen, so logs never go to stderr.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// Shrink `requested` until the message fits with a one character margin.
fn fit_scale(requested: f32, options: &Options, cols: u16, rows: u16) -> f32 {
    let width = options.total_width() + options.char_spacing;
    let height = options.total_height() + options.line_height;
    let fit_x = cols as f32 / width;
    let fit_y = rows as f32 * 2.0 / height;
    requested.min(fit_x).min(fit_y).max(f32::EPSILON)
}

fn replay(animator: &mut Animator, clock: &mut FrameClock, finished: &Cell<bool>) {
    animator.reset_all();
    finished.set(false);
    clock.request_frame();
}

fn animate(stdout: &mut BufWriter<Stdout>, options: Options, cli: &Cli) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    let scale = fit_scale(cli.scale, &options, cols, rows);
    log::info!("terminal {cols}x{rows}, scale {scale:.4}");

    let mut canvas = TermCanvas::new(cols as usize, rows as usize, scale, options.background);
    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut animator = Animator::new(options, &mut canvas, rng)?;

    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    animator.on_complete(move || flag.set(true));

    let mut clock = FrameClock::new(FPS);
    clock.request_frame();

    let mut last_frame = Instant::now();
    let mut finished_at: Option<Instant> = None;

    loop {
        if event::poll(Duration::from_millis(1))? {
            match event::read()? {
                Event::Key(key_event) => {
                    if key_event.code == KeyCode::Char('q')
                        || key_event.code == KeyCode::Esc
                        || (key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL))
                    {
                        break;
                    }
                    if key_event.code == KeyCode::Char('r') {
                        replay(&mut animator, &mut clock, &finished);
                        finished_at = None;
                    }
                }
                Event::Resize(cols, rows) => {
                    let scale = fit_scale(cli.scale, animator.options(), cols, rows);
                    canvas.resize(cols as usize, rows as usize, scale);
                    animator.resize(&mut canvas);
                    log::debug!("terminal {cols}x{rows}, scale {:.4}", canvas.scale());
                    execute!(stdout, Clear(ClearType::All))?;
                    clock.request_frame();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        clock.advance(now.duration_since(last_frame));
        last_frame = now;

        let mut stepped = false;
        while clock.take_frame() {
            animator.step_all(&mut canvas, &mut clock);
            stepped = true;
        }
        if stepped {
            canvas.present(stdout)?;
        }

        if finished.get() {
            let since = *finished_at.get_or_insert(now);
            if now.duration_since(since) >= HOLD_AFTER_DONE {
                if !cli.repeat {
                    break;
                }
                replay(&mut animator, &mut clock, &finished);
                finished_at = None;
            }
        }
    }

    Ok(())
}

fn run(options: Options, cli: &Cli) -> Result<()> {
    let mut stdout = BufWriter::with_capacity(1024 * 64, stdout());

    terminal::enable_raw_mode()?;
    // Raw mode is always undone, even when entering the alternate screen fails.
    let result = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))
        .map_err(anyhow::Error::from)
        .and_then(|()| animate(&mut stdout, options, cli));

    let restored = execute!(stdout, Show, LeaveAlternateScreen);
    terminal::disable_raw_mode()?;
    restored?;

    result
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut options = match &cli.config {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if !cli.lines.is_empty() {
        options.strings = cli.lines.clone();
    }
    if let Some(color) = cli.bg_color {
        options.background = color;
    }
    options.validate()?;

    if !(cli.scale.is_finite() && cli.scale > 0.0) {
        anyhow::bail!("--scale must be positive, got {}", cli.scale);
    }

    if cli.dump_config {
        println!("{}", options.to_json());
        return Ok(());
    }

    run(options, &cli)
}
