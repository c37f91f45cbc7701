//! Wheel of Life assessment domain.
//!
//! # Module Structure
//!
//! - `category` - Rated life categories and the canonical set
//! - `wizard` - Step-by-step rating state machine
//! - `scale` - The 0..=10 selector derived for each step
//! - `snapshot` - Frozen labels/values produced by a completed wizard
//! - `radar` - Radar chart geometry
//! - `theme` - Chart colours and category swatches

mod category;
mod errors;
mod radar;
mod scale;
mod snapshot;
mod theme;
mod wizard;

pub use category::{Category, CategorySet};
pub use errors::WizardError;
pub use radar::{Point, RadarLayout, RING_STEP};
pub use scale::{scale_options, ScaleOption};
pub use snapshot::WheelSnapshot;
pub use theme::{swatch, ChartTheme, Rgba, ThemeName};
pub use wizard::{Selection, StepView, Wizard};
