use crate::coords::{Point, Surface};
use crate::paint::ColorIndex;
use crate::raster::Stroke;
use crate::render::{PointBatch, Renderer};
use crate::scene::{PrimitiveKind, Shape, ShapeStore};

use super::{BoardConfig, BoardError, Command, Function, Indicator, Outcome, Retention};

/// Interactive drawing state.
///
/// Owns the mode/function/color/thickness selection, the pending control
/// points of the primitive being placed and every committed shape. All input
/// goes through `&mut self` handlers that run to completion; the board never
/// holds on to a renderer.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    surface: Surface,

    mode: PrimitiveKind,
    function: Function,
    color: ColorIndex,
    thickness: u32,
    radius: u32,

    pending: Vec<Point>,
    shapes: ShapeStore,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        let thickness = config.initial_thickness.clamp(1, 9);
        let radius = config.radius_bounds.clamp(config.initial_radius);
        if radius != config.initial_radius {
            log::warn!("initial radius {} clamped to {radius}", config.initial_radius);
        }
        Self {
            surface: config.surface,
            mode: config.initial_mode,
            function: Function::Draw,
            color: config.initial_color,
            thickness,
            radius,
            pending: Vec::with_capacity(3),
            shapes: ShapeStore::new(),
            config,
        }
    }

    // ── inputs ─────────────────────────────────────────────────────────────

    /// Pointer press at device pixel `(x, y)` (origin top-left, +Y down).
    ///
    /// Only places points while the draw function is active. Positions outside
    /// the surface are clamped to its edge.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Outcome {
        if self.function != Function::Draw {
            log::trace!("click at ({x}, {y}) ignored: function is {}", self.function);
            return Outcome::Ignored;
        }

        let (x, y) = (x.max(0.0).min(self.surface.width), y.max(0.0).min(self.surface.height));
        let p = self.surface.to_raster(x, y);
        self.pending.push(p);

        if self.pending.len() < self.mode.required_clicks() {
            log::debug!(
                "{} point {}/{} at {p}",
                self.mode,
                self.pending.len(),
                self.mode.required_clicks()
            );
            return Outcome::Updated;
        }

        let shape = self.build_pending();
        self.pending.clear();
        match shape {
            Some(shape) => {
                self.commit(shape);
                Outcome::Redraw
            }
            None => Outcome::Updated,
        }
    }

    /// Key press. Case-insensitive; unrecognized keys are ignored.
    pub fn key_press(&mut self, code: char) -> Outcome {
        match Command::from_key(code) {
            Some(cmd) => self.apply(cmd),
            None => {
                log::trace!("key {code:?} ignored");
                Outcome::Ignored
            }
        }
    }

    /// Applies a decoded command.
    pub fn apply(&mut self, cmd: Command) -> Outcome {
        match cmd {
            Command::SelectMode(mode) => self.select_mode(mode),
            Command::Activate(function) => {
                if self.function == function {
                    return Outcome::Ignored;
                }
                log::debug!("function: {} -> {function}", self.function);
                self.function = function;
                Outcome::Updated
            }
            Command::Digit(d) => match self.function {
                Function::Draw => Outcome::Ignored,
                Function::Color => self.set_color(d),
                Function::Thickness => self.set_thickness(d),
            },
            Command::Clear => self.clear(),
        }
    }

    /// Switches the primitive being placed. Resets the function to draw and
    /// drops pending clicks.
    pub fn select_mode(&mut self, mode: PrimitiveKind) -> Outcome {
        log::debug!("mode: {} -> {mode}", self.mode);
        if !self.pending.is_empty() {
            log::debug!("dropping {} pending click(s)", self.pending.len());
        }
        self.mode = mode;
        self.function = Function::Draw;
        self.pending.clear();
        Outcome::Updated
    }

    /// Empties the board and drops pending clicks.
    pub fn clear(&mut self) -> Outcome {
        log::info!("clearing {} shape(s)", self.shapes.len());
        self.shapes.clear();
        self.pending.clear();
        Outcome::Redraw
    }

    /// Sets the radius used for new circles and re-rasterizes every stored
    /// circle around its own centre.
    ///
    /// Out-of-range values are rejected without touching any state.
    pub fn set_global_radius(&mut self, radius: i32) -> Result<(), BoardError> {
        let bounds = self.config.radius_bounds;
        let Some(radius) = bounds.check(radius) else {
            log::warn!("rejected radius {radius}: outside [{}, {}]", bounds.min, bounds.max);
            return Err(BoardError::InvalidRadius {
                requested: radius,
                min: bounds.min,
                max: bounds.max,
            });
        };

        self.radius = radius;
        let changed = self.shapes.recompute_radius(radius);
        log::info!("radius set to {radius}; {changed} circle(s) recomputed");
        Ok(())
    }

    /// Updates the drawing surface size used to map clicks and batches.
    ///
    /// Degenerate sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: f32, height: f32) -> Outcome {
        let surface = Surface::new(width, height);
        if !surface.is_valid() {
            log::debug!("ignoring degenerate surface size {width}x{height}");
            return Outcome::Ignored;
        }
        if surface == self.surface {
            return Outcome::Ignored;
        }
        log::debug!("surface resized to {width}x{height}");
        self.surface = surface;
        Outcome::Redraw
    }

    // ── outputs ────────────────────────────────────────────────────────────

    /// One clear followed by one batch per shape, in commit order.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.clear();
        for batch in self.batches() {
            renderer.draw_points(&batch);
        }
    }

    /// Point batches for every shape, in commit order.
    pub fn batches(&self) -> impl Iterator<Item = PointBatch> + '_ {
        self.shapes.iter().map(|shape| self.batch_for(shape))
    }

    fn batch_for(&self, shape: &Shape) -> PointBatch {
        let size = match shape.kind() {
            PrimitiveKind::Circle => self.config.circle_point_size,
            PrimitiveKind::Line | PrimitiveKind::Triangle => self.outline_point_size(),
        };
        PointBatch::from_samples(shape.points(), self.surface, shape.color.rgb(), size)
    }

    pub fn status(&self) -> Indicator {
        Indicator {
            mode: self.mode,
            function: self.function,
            color: self.color,
            thickness: self.thickness,
            radius: self.radius,
            shapes: self.shapes.len(),
            pending: self.pending.len(),
        }
    }

    // ── accessors ──────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn mode(&self) -> PrimitiveKind {
        self.mode
    }

    #[inline]
    pub fn function(&self) -> Function {
        self.function
    }

    #[inline]
    pub fn color(&self) -> ColorIndex {
        self.color
    }

    #[inline]
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Control points placed for the primitive in progress (raster space).
    #[inline]
    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeStore {
        &self.shapes
    }

    // ── private helpers ────────────────────────────────────────────────────

    #[inline]
    fn stroke(&self) -> Stroke {
        Stroke::new(self.thickness, self.config.even_stroke)
    }

    /// The held shape follows the live thickness as its marker size; accumulated
    /// shapes keep the configured size.
    fn outline_point_size(&self) -> f32 {
        if self.single_shape() {
            self.thickness as f32
        } else {
            self.config.outline_point_size
        }
    }

    fn single_shape(&self) -> bool {
        self.config.retention == Retention::SingleShape
    }

    fn set_color(&mut self, digit: u8) -> Outcome {
        let Some(color) = ColorIndex::new(digit) else {
            return Outcome::Ignored;
        };
        log::debug!("color: {} -> {color}", self.color);
        self.color = color;

        if self.single_shape() {
            if let Some(shape) = self.shapes.last_mut() {
                shape.color = color;
                return Outcome::Redraw;
            }
        }
        Outcome::Updated
    }

    fn set_thickness(&mut self, digit: u8) -> Outcome {
        if digit == 0 {
            return Outcome::Ignored;
        }
        let thickness = u32::from(digit);
        if thickness == self.thickness {
            return Outcome::Updated;
        }
        log::debug!("thickness: {} -> {thickness}", self.thickness);
        self.thickness = thickness;

        // Held outlines keep their samples; only their marker size follows.
        let resized = self.single_shape()
            && self.shapes.last().is_some_and(|s| s.kind() != PrimitiveKind::Circle);
        if resized { Outcome::Redraw } else { Outcome::Updated }
    }

    fn build_pending(&self) -> Option<Shape> {
        let stroke = self.stroke();
        let shape = match (self.mode, self.pending.as_slice()) {
            (PrimitiveKind::Line, &[start, end]) => Shape::line(start, end, stroke, self.color),
            (PrimitiveKind::Triangle, &[a, b, c]) => Shape::triangle([a, b, c], stroke, self.color),
            (PrimitiveKind::Circle, &[center]) => Shape::circle(center, self.radius, self.color),
            _ => return None,
        };
        Some(shape)
    }

    fn commit(&mut self, shape: Shape) {
        log::info!(
            "committed {} ({} samples, {})",
            shape.kind(),
            shape.points().len(),
            shape.color
        );
        if self.single_shape() {
            self.shapes.replace(shape);
        } else {
            self.shapes.push(shape);
        }
    }
}
