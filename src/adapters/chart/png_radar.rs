//! Rasterized radar chart.
//!
//! The bitmap is the labelled SVG chart drawn through `resvg`, so the PNG
//! export carries the same category labels and tick values as the vector one.
//! Fonts come from the system font database, loaded once per renderer.

use std::fmt;
use std::io::Cursor;
use std::sync::Arc;

use image::{ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{fontdb, Options, Tree};

use super::svg_radar::SvgRadarRenderer;
use crate::domain::wheel::{ChartTheme, WheelSnapshot};
use crate::ports::{ChartError, ChartInstance, ChartRenderer};

/// Draws radar charts into PNG bitmaps.
#[derive(Clone)]
pub struct PngRadarRenderer {
    size: u32,
    svg: SvgRadarRenderer,
    fonts: Arc<fontdb::Database>,
}

impl Default for PngRadarRenderer {
    fn default() -> Self {
        Self::new(520, 100)
    }
}

impl fmt::Debug for PngRadarRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PngRadarRenderer")
            .field("size", &self.size)
            .field("fonts", &self.fonts.len())
            .finish()
    }
}

impl PngRadarRenderer {
    /// `margin` is the room left around the outer ring for labels.
    pub fn new(size: u32, margin: u32) -> Self {
        let mut fonts = fontdb::Database::new();
        fonts.load_system_fonts();
        Self {
            size,
            svg: SvgRadarRenderer::new(size, margin),
            fonts: Arc::new(fonts),
        }
    }

    fn rasterize(&self, snapshot: &WheelSnapshot, theme: &ChartTheme) -> Result<RgbaImage, ChartError> {
        let document = self.svg.render(snapshot, theme);

        let mut options = Options::default();
        options.fontdb = Arc::clone(&self.fonts);
        let tree = Tree::from_str(&document, &options)
            .map_err(|e| ChartError::RenderFailed(format!("SVG parse failed: {}", e)))?;

        let mut pixmap = Pixmap::new(self.size, self.size)
            .ok_or_else(|| ChartError::RenderFailed("Pixmap allocation failed".into()))?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(self.size, self.size, pixels)
            .ok_or_else(|| ChartError::RenderFailed("Pixel buffer size mismatch".into()))
    }
}

impl ChartRenderer for PngRadarRenderer {
    fn render(
        &self,
        snapshot: &WheelSnapshot,
        theme: &ChartTheme,
    ) -> Result<Box<dyn ChartInstance>, ChartError> {
        let image = self.rasterize(snapshot, theme)?;
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| ChartError::EncodeFailed(e.to_string()))?;
        tracing::debug!(categories = snapshot.len(), bytes = png.len(), "radar chart rendered");
        Ok(Box::new(PngChart {
            snapshot: snapshot.clone(),
            png: Some(png),
        }))
    }
}

/// A live PNG chart; the encoded bytes are dropped on release.
#[derive(Debug)]
pub struct PngChart {
    snapshot: WheelSnapshot,
    png: Option<Vec<u8>>,
}

impl ChartInstance for PngChart {
    fn snapshot(&self) -> &WheelSnapshot {
        &self.snapshot
    }

    fn to_png(&self) -> Result<Vec<u8>, ChartError> {
        self.png.clone().ok_or(ChartError::Released)
    }

    fn release(&mut self) {
        self.png = None;
    }

    fn is_released(&self) -> bool {
        self.png.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn snapshot(values: &[i64]) -> WheelSnapshot {
        let labels = (0..values.len()).map(|i| format!("C{}", i)).collect();
        WheelSnapshot::from_raw(labels, values).unwrap()
    }

    fn rgb(image: &RgbaImage, x: u32, y: u32) -> [u8; 3] {
        let p = image.get_pixel(x, y).0;
        [p[0], p[1], p[2]]
    }

    #[test]
    fn renders_decodable_png_of_requested_size() {
        let renderer = PngRadarRenderer::new(200, 20);
        let chart = renderer
            .render(&snapshot(&[5, 5, 5, 5]), &ChartTheme::STANDARD)
            .unwrap();
        let png = chart.to_png().unwrap();
        assert_eq!(&png[..8], &PNG_MAGIC);

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 200);
        assert_eq!(decoded.height(), 200);
    }

    #[test]
    fn full_scores_tint_inside_the_outer_ring() {
        let renderer = PngRadarRenderer::new(120, 10);
        let theme = ChartTheme::STANDARD;
        let image = renderer.rasterize(&snapshot(&[10, 10, 10, 10]), &theme).unwrap();
        let bg = theme.background;
        assert_ne!(rgb(&image, 70, 45), [bg.r, bg.g, bg.b]);
    }

    #[test]
    fn zero_scores_leave_corners_untouched() {
        let renderer = PngRadarRenderer::new(120, 10);
        let theme = ChartTheme::BOLD;
        let image = renderer.rasterize(&snapshot(&[0, 0, 0]), &theme).unwrap();
        let bg = theme.background;
        assert_eq!(rgb(&image, 0, 0), [bg.r, bg.g, bg.b]);
        assert_eq!(image.get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn category_labels_are_drawn() {
        let renderer = PngRadarRenderer::new(300, 90);
        if renderer.fonts.len() == 0 {
            return;
        }
        let theme = ChartTheme::STANDARD;
        let short = WheelSnapshot::from_raw(vec!["A".into(), "B".into(), "C".into()], &[5, 5, 5]).unwrap();
        let long = WheelSnapshot::from_raw(
            vec!["Health and fitness".into(), "B".into(), "C".into()],
            &[5, 5, 5],
        )
        .unwrap();
        let a = renderer.rasterize(&short, &theme).unwrap();
        let b = renderer.rasterize(&long, &theme).unwrap();
        assert_ne!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn released_chart_refuses_export() {
        let renderer = PngRadarRenderer::new(64, 4);
        let mut chart = renderer.render(&snapshot(&[1, 2, 3]), &ChartTheme::STANDARD).unwrap();
        chart.release();
        assert!(chart.is_released());
        assert_eq!(chart.to_png(), Err(ChartError::Released));
        assert_eq!(chart.snapshot().values(), vec![1, 2, 3]);
    }
}
