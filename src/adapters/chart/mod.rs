//! Chart adapters - radar chart rendering.
//!
//! - `PngRadarRenderer` - Rasterized chart implementing `ChartRenderer`
//! - `SvgRadarRenderer` - Vector chart for standalone export

mod png_radar;
mod svg_radar;

pub use png_radar::{PngChart, PngRadarRenderer};
pub use svg_radar::SvgRadarRenderer;
