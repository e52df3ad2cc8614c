use anyhow::Result;
use winit::dpi::LogicalSize;

use penboard_engine::board::{Board, BoardConfig, Outcome};
use penboard_engine::core::{App, AppControl, FrameCtx};
use penboard_engine::device::GpuInit;
use penboard_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};
use penboard_engine::logging::{init_logging, LoggingConfig};
use penboard_engine::paint::Rgb;
use penboard_engine::render::{PointList, PointRenderer};
use penboard_engine::window::{Runtime, RuntimeConfig};

/// Global radius step for the arrow keys.
const RADIUS_STEP: i32 = 10;

const USAGE: &str = "usage: penboard-studio [--circles] [--single]

  --circles   start in circle mode (arrow up/down change the radius)
  --single    keep only the most recent shape

keys: r line, t triangle, k color, e thickness, d draw, c clear, 0-9 value";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let Some(config) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };

    log::info!("starting penboard ({:?}, {:?} mode)", config.retention, config.initial_mode);

    let size = config.surface;
    let runtime = RuntimeConfig {
        title: "penboard".to_string(),
        initial_size: LogicalSize::new(size.width as f64, size.height as f64),
    };

    Runtime::run(runtime, GpuInit::default(), Studio::new(Board::new(config)))
}

/// Returns `None` when help was requested.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<BoardConfig>> {
    let mut circles = false;
    let mut single = false;

    for arg in args {
        match arg.as_str() {
            "--circles" => circles = true,
            "--single" => single = true,
            "-h" | "--help" => return Ok(None),
            other => anyhow::bail!("unknown argument {other:?}\n\n{USAGE}"),
        }
    }

    let config = if circles { BoardConfig::circles() } else { BoardConfig::default() };
    Ok(Some(if single { config.single_shape() } else { config }))
}

struct Studio {
    board: Board,
    points: PointList,
    renderer: PointRenderer,
    /// Board changed since `points` was last recorded.
    dirty: bool,
}

impl Studio {
    fn new(board: Board) -> Self {
        Self {
            board,
            points: PointList::new(),
            renderer: PointRenderer::new(),
            dirty: true,
        }
    }

    fn handle(&mut self, event: &InputEvent) -> Outcome {
        match event {
            InputEvent::PointerButton(b)
                if b.button == MouseButton::Left && b.state == MouseButtonState::Pressed =>
            {
                self.board.pointer_down(b.x, b.y)
            }

            InputEvent::Key { key, state: KeyState::Pressed, text, .. } => match (key, text) {
                (Key::ArrowUp, _) => self.nudge_radius(RADIUS_STEP),
                (Key::ArrowDown, _) => self.nudge_radius(-RADIUS_STEP),
                (_, Some(c)) => self.board.key_press(*c),
                (_, None) => Outcome::Ignored,
            },

            _ => Outcome::Ignored,
        }
    }

    fn nudge_radius(&mut self, delta: i32) -> Outcome {
        let requested = self.board.radius() as i32 + delta;
        match self.board.set_global_radius(requested) {
            Ok(()) => Outcome::Redraw,
            Err(err) => {
                log::warn!("{err}");
                Outcome::Ignored
            }
        }
    }
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let mut outcome = self.board.resize(w, h);

        for event in &ctx.input_frame.events {
            outcome = outcome.max(self.handle(event));
        }

        if self.dirty || outcome != Outcome::Ignored {
            ctx.window.set_title(&format!("penboard | {}", self.board.status()));
        }

        if self.dirty || outcome.needs_redraw() {
            self.board.render(&mut self.points);
            self.dirty = false;
        }

        let (points, renderer) = (&self.points, &mut self.renderer);
        ctx.render(Rgb::white(), |rctx, target| renderer.render(rctx, target, points))
    }
}
