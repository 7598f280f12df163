use std::time::Duration;

use crate::{
    foundation::{
        core::Rgba8,
        error::{LsysError, LsysResult},
    },
    grammar::catalogue::{self, GrammarDescription},
    turtle::normalize::Viewport,
};

/// Where the figure is placed on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Square of the surface width, 100 unit margin, anchored at (50, 200).
    #[default]
    Reference,
    /// Largest square centered on the surface.
    Centered,
}

/// Configuration snapshot consumed when (re)starting the animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalogue grammar name.
    pub grammar: String,
    /// Overrides the grammar's iteration count; values `<= 0` are clamped to 1.
    pub iterations: Option<i64>,
    /// Overrides the grammar's turn angle (degrees).
    pub turn_angle_deg: Option<f64>,
    /// Overrides the grammar's seed symbols.
    pub seed: Option<String>,
    pub head_color: Rgba8,
    pub tail_color: Rgba8,
    pub background_color: Rgba8,
    pub head_width: f64,
    pub tail_width: f64,
    pub refresh_interval_ms: u64,
    pub placement: Placement,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: "hilbert".to_string(),
            iterations: None,
            turn_angle_deg: None,
            seed: None,
            head_color: Rgba8::MAGENTA,
            tail_color: Rgba8::GRAY,
            background_color: Rgba8::BLACK,
            head_width: 5.0,
            tail_width: 4.0,
            refresh_interval_ms: 200,
            placement: Placement::Reference,
        }
    }
}

impl Config {
    pub fn for_grammar(name: impl Into<String>) -> Self {
        Self {
            grammar: name.into(),
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> LsysResult<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> LsysResult<()> {
        if self.refresh_interval_ms == 0 {
            return Err(LsysError::config("refresh_interval_ms must be > 0"));
        }
        if !(self.head_width.is_finite() && self.head_width > 0.0) {
            return Err(LsysError::config("head_width must be finite and > 0"));
        }
        if !(self.tail_width.is_finite() && self.tail_width > 0.0) {
            return Err(LsysError::config("tail_width must be finite and > 0"));
        }
        if let Some(angle) = self.turn_angle_deg
            && !angle.is_finite()
        {
            return Err(LsysError::config("turn_angle_deg must be finite"));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn viewport(&self, width: f64, height: f64) -> Viewport {
        match self.placement {
            Placement::Reference => Viewport::reference(width),
            Placement::Centered => Viewport::centered(width, height, Viewport::DEFAULT_MARGIN),
        }
    }

    /// Resolve the grammar against the catalogue and apply overrides.
    pub fn resolve(&self) -> LsysResult<GrammarRequest> {
        self.validate()?;
        let desc = catalogue::require(&self.grammar)?;
        Ok(GrammarRequest {
            description: desc,
            seed: self.seed.clone().unwrap_or_else(|| desc.seed.to_string()),
            iterations: self
                .iterations
                .map(crate::grammar::expand::clamp_iterations)
                .unwrap_or(desc.iterations),
            turn_angle: self.turn_angle_deg.unwrap_or(desc.turn_angle),
        })
    }
}

/// Fully resolved input for one generation run.
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarRequest {
    pub description: &'static GrammarDescription,
    pub seed: String,
    pub iterations: u32,
    pub turn_angle: f64,
}
