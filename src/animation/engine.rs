use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use crate::{
    animation::{
        animator::{Animator, AnimatorStyle, DrawState},
        generation::{GenerationTask, Generated, TaskPoll},
    },
    config::Config,
    foundation::error::{LsysError, LsysResult},
    render::surface::RenderSurface,
    turtle::normalize::Viewport,
};

/// Animation state machine: `Preparing -> Drawing <-> Fading`, plus `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    /// Background expansion and normalization in progress.
    Preparing,
    Drawing,
    Fading,
    /// Generation failed; stays here until the next reconfiguration.
    Error,
}

impl From<DrawState> for Phase {
    fn from(state: DrawState) -> Self {
        match state {
            DrawState::Draw => Self::Drawing,
            DrawState::Fade => Self::Fading,
        }
    }
}

/// Drives generation and the per-tick animation for one surface.
pub struct DrawingEngine {
    config: Config,
    surface_size: (f64, f64),
    phase: Phase,
    version: u64,
    latest: Arc<AtomicU64>,
    pending: Option<GenerationTask>,
    animator: Option<Animator>,
    error: Option<LsysError>,
    visible: bool,
    ticks: u64,
}

impl DrawingEngine {
    /// Create an engine for a `width x height` surface and start preparing.
    pub fn new(config: Config, width: u32, height: u32) -> Self {
        let mut engine = Self {
            config: config.clone(),
            surface_size: (f64::from(width), f64::from(height)),
            phase: Phase::Preparing,
            version: 0,
            latest: Arc::new(AtomicU64::new(0)),
            pending: None,
            animator: None,
            error: None,
            visible: true,
            ticks: 0,
        };
        engine.reconfigure(config);
        engine
    }

    /// Apply a new configuration snapshot. Any in-flight generation is
    /// superseded and its result will be dropped.
    pub fn reconfigure(&mut self, config: Config) {
        self.version += 1;
        self.latest.store(self.version, Ordering::Release);
        self.pending = None;
        self.animator = None;
        self.error = None;
        self.phase = Phase::Preparing;
        self.config = config;

        tracing::info!(
            version = self.version,
            grammar = %self.config.grammar,
            "preparing"
        );

        match self.config.resolve() {
            Ok(request) => {
                let viewport = self.viewport();
                self.pending = Some(GenerationTask::spawn(
                    request,
                    viewport,
                    self.version,
                    Arc::clone(&self.latest),
                ));
            }
            Err(err) => self.fail(err),
        }
    }

    /// Surface size changed; regenerate the layout for it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface_size = (f64::from(width), f64::from(height));
        self.reconfigure(self.config.clone());
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.surface_size;
        self.config.viewport(w, h)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn error(&self) -> Option<&LsysError> {
        self.error.as_ref()
    }

    pub fn animator(&self) -> Option<&Animator> {
        self.animator.as_ref()
    }

    /// Ticks that actually rendered a frame.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// While invisible, ticks are no-ops; drawing state is kept as is.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            tracing::debug!(visible, "visibility changed");
        }
        self.visible = visible;
    }

    pub fn refresh_interval(&self) -> Duration {
        self.config.refresh_interval()
    }

    /// Collect a finished generation result, if any.
    pub fn poll(&mut self) -> Phase {
        if let Some(task) = &self.pending
            && let TaskPoll::Done(result) = task.poll()
        {
            let version = task.version();
            self.pending = None;
            self.apply(version, result);
        }
        self.phase
    }

    /// Block until the current generation finishes.
    pub fn wait_ready(&mut self) -> Phase {
        if let Some(task) = self.pending.take() {
            let version = task.version();
            let result = task.wait();
            self.apply(version, result);
        }
        self.phase
    }

    fn apply(&mut self, version: u64, result: LsysResult<Generated>) {
        if version != self.version {
            tracing::debug!(version, current = self.version, "dropping superseded result");
            return;
        }
        match result {
            Ok(generated) => {
                tracing::info!(
                    commands = generated.commands.len(),
                    scale = generated.layout.scale,
                    "generation ready"
                );
                let style = AnimatorStyle::from_config(&self.config);
                self.animator = Some(Animator::new(
                    generated.commands,
                    generated.layout,
                    style,
                ));
                self.phase = Phase::Drawing;
            }
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: LsysError) {
        tracing::error!(error = %err, "generation failed");
        self.error = Some(err);
        self.animator = None;
        self.phase = Phase::Error;
    }

    /// Render one frame. Does nothing while invisible.
    pub fn tick(&mut self, surface: &mut dyn RenderSurface) -> LsysResult<Phase> {
        if !self.visible {
            return Ok(self.phase);
        }
        self.poll();

        match (&mut self.animator, self.phase) {
            (Some(animator), Phase::Drawing | Phase::Fading) => {
                self.phase = animator.tick(surface)?.into();
            }
            _ => surface.clear(self.config.background_color)?,
        }
        self.ticks += 1;
        Ok(self.phase)
    }

    /// Tick until `stop` holds after a tick, at most `max_ticks` times.
    /// Returns the number of ticks run.
    pub fn tick_until(
        &mut self,
        surface: &mut dyn RenderSurface,
        max_ticks: u64,
        mut stop: impl FnMut(&Self) -> bool,
    ) -> LsysResult<u64> {
        for ran in 1..=max_ticks {
            self.tick(surface)?;
            if stop(self) {
                return Ok(ran);
            }
        }
        Ok(max_ticks)
    }

    /// Run `count` ticks, sleeping out the refresh interval between them when
    /// `paced` is set.
    pub fn run_ticks(
        &mut self,
        surface: &mut dyn RenderSurface,
        count: u64,
        paced: bool,
    ) -> LsysResult<Phase> {
        let interval = self.refresh_interval();
        let mut deadline = Instant::now();
        for _ in 0..count {
            self.tick(surface)?;
            if paced {
                deadline += interval;
                if let Some(wait) = deadline.checked_duration_since(Instant::now()) {
                    std::thread::sleep(wait);
                }
            }
        }
        Ok(self.phase)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/engine.rs"]
mod tests;
