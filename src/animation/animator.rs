use crate::{
    config::Config,
    foundation::{
        core::{BezPath, Rgba8},
        error::LsysResult,
    },
    grammar::command::CommandSequence,
    render::surface::{PaintStyle, RenderSurface},
    turtle::{normalize::Layout, traverse::Turtle},
};

/// Opacity removed from the trails on every fade tick (out of 255).
pub const FADE_STEP: u8 = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum DrawState {
    Draw,
    Fade,
}

/// Paints used by the animator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorStyle {
    pub head: PaintStyle,
    pub tail: PaintStyle,
    pub background: Rgba8,
}

impl AnimatorStyle {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            head: PaintStyle::new(cfg.head_color, cfg.head_width),
            tail: PaintStyle::new(cfg.tail_color, cfg.tail_width),
            background: cfg.background_color,
        }
    }
}

/// Live turtle: one drawing step per tick, then a fade-out of the trails.
pub struct Animator {
    commands: CommandSequence,
    layout: Layout,
    style: AnimatorStyle,
    turtle: Turtle,
    trails: Vec<BezPath>,
    tail_opacity: u8,
    state: DrawState,
    cycles: u64,
}

impl Animator {
    pub fn new(commands: CommandSequence, layout: Layout, style: AnimatorStyle) -> Self {
        Self {
            turtle: Turtle::silent(layout.start_pose()),
            commands,
            layout,
            style,
            trails: Vec::new(),
            tail_opacity: u8::MAX,
            state: DrawState::Draw,
            cycles: 0,
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn commands(&self) -> &CommandSequence {
        &self.commands
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Trail paths drawn so far; a branch pop starts a new one.
    pub fn trails(&self) -> &[BezPath] {
        &self.trails
    }

    pub fn tail_opacity(&self) -> u8 {
        self.tail_opacity
    }

    /// Completed draw/fade cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Render one frame and advance the animation.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> LsysResult<DrawState> {
        surface.clear(self.style.background)?;
        match self.state {
            DrawState::Draw => self.draw_tick(surface)?,
            DrawState::Fade => self.fade_tick(surface)?,
        }
        Ok(self.state)
    }

    fn draw_tick(&mut self, surface: &mut dyn RenderSurface) -> LsysResult<()> {
        self.draw_trails(surface)?;

        let Some(step) = self.turtle.next_step(&self.commands, self.layout.scale) else {
            self.enter_fade();
            return Ok(());
        };

        surface.draw_line(step.from, step.to, &self.style.head)?;

        if step.branch_resumed || self.trails.is_empty() {
            let mut path = BezPath::new();
            path.move_to(step.from);
            self.trails.push(path);
        }
        if let Some(path) = self.trails.last_mut() {
            path.line_to(step.to);
        }

        if self.turtle.is_exhausted(&self.commands) {
            self.enter_fade();
        }
        Ok(())
    }

    fn fade_tick(&mut self, surface: &mut dyn RenderSurface) -> LsysResult<()> {
        match self.tail_opacity.checked_sub(FADE_STEP) {
            Some(opacity) => {
                self.tail_opacity = opacity;
                self.draw_trails(surface)
            }
            None => {
                self.restart();
                Ok(())
            }
        }
    }

    fn draw_trails(&self, surface: &mut dyn RenderSurface) -> LsysResult<()> {
        let paint = self.style.tail.with_opacity(self.tail_opacity);
        for path in &self.trails {
            surface.draw_path(path, &paint)?;
        }
        Ok(())
    }

    fn enter_fade(&mut self) {
        tracing::debug!(
            trails = self.trails.len(),
            warnings = self.turtle.warnings().len(),
            "drawing complete; fading"
        );
        self.state = DrawState::Fade;
    }

    /// Back to the origin pose with no trails and opaque tail paint.
    pub fn restart(&mut self) {
        self.turtle.reset();
        self.trails.clear();
        self.tail_opacity = u8::MAX;
        self.state = DrawState::Draw;
        self.cycles += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;
