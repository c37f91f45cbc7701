//! Chart renderer port.
//!
//! A renderer turns a frozen snapshot into a live chart instance. Instances
//! own resources and must be released before a replacement is created; the
//! `ChartSlot` enforces that ordering for callers.

use thiserror::Error;

use crate::domain::wheel::{ChartTheme, WheelSnapshot};

/// A rendered chart that can be exported until it is released.
pub trait ChartInstance: Send {
    /// Snapshot the chart was drawn from.
    fn snapshot(&self) -> &WheelSnapshot;

    /// Encodes the chart as PNG.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Released` after `release` was called.
    fn to_png(&self) -> Result<Vec<u8>, ChartError>;

    /// Frees the instance. Further exports fail.
    fn release(&mut self);

    fn is_released(&self) -> bool;
}

/// Port for drawing radar charts.
pub trait ChartRenderer: Send + Sync {
    /// Draws `snapshot` with `theme`, returning a new live instance.
    fn render(
        &self,
        snapshot: &WheelSnapshot,
        theme: &ChartTheme,
    ) -> Result<Box<dyn ChartInstance>, ChartError>;
}

/// Errors that can occur while drawing or exporting a chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// No live chart to export.
    #[error("Chart unavailable")]
    Unavailable,

    /// The instance was released.
    #[error("Chart instance has been released")]
    Released,

    /// Drawing failed.
    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),

    /// Image encoding failed.
    #[error("Chart encoding failed: {0}")]
    EncodeFailed(String),
}

/// Single mutable slot holding at most one live chart.
///
/// Rendering releases the previous instance before creating the next one.
/// Clearing or dropping the slot releases whatever it holds.
#[derive(Default)]
pub struct ChartSlot {
    current: Option<Box<dyn ChartInstance>>,
}

impl ChartSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Releases any existing chart, then renders a new one into the slot.
    ///
    /// On failure the slot is left empty.
    pub fn render(
        &mut self,
        renderer: &dyn ChartRenderer,
        snapshot: &WheelSnapshot,
        theme: &ChartTheme,
    ) -> Result<(), ChartError> {
        self.clear();
        self.current = Some(renderer.render(snapshot, theme)?);
        Ok(())
    }

    /// Releases the held chart, if any.
    pub fn clear(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.release();
        }
    }

    pub fn is_live(&self) -> bool {
        self.current.as_ref().is_some_and(|c| !c.is_released())
    }

    pub fn current(&self) -> Option<&dyn ChartInstance> {
        self.current.as_deref()
    }

    /// PNG of the live chart.
    ///
    /// # Errors
    ///
    /// `ChartError::Unavailable` when the slot is empty.
    pub fn to_png(&self) -> Result<Vec<u8>, ChartError> {
        match &self.current {
            Some(chart) => chart.to_png(),
            None => Err(ChartError::Unavailable),
        }
    }
}

impl Drop for ChartSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartSlot")
            .field("live", &self.is_live())
            .finish()
    }
}
