// SVG radar chart generation

use crate::domain::wheel::{ChartTheme, Point, RadarLayout, WheelSnapshot};

/// Renders a radar chart as a self-contained SVG document.
#[derive(Debug, Clone, Copy)]
pub struct SvgRadarRenderer {
    size: u32,
    margin: u32,
}

impl Default for SvgRadarRenderer {
    fn default() -> Self {
        Self { size: 560, margin: 110 }
    }
}

impl SvgRadarRenderer {
    pub fn new(size: u32, margin: u32) -> Self {
        Self { size, margin }
    }

    pub fn render(&self, snapshot: &WheelSnapshot, theme: &ChartTheme) -> String {
        let layout = RadarLayout::new(snapshot.len(), self.size, self.margin);
        let center = layout.center();

        let mut grid = String::new();
        for (tick, ring) in layout.rings() {
            grid.push_str(&format!(
                r#"<polygon points="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
                points_attr(&ring),
                theme.grid.css()
            ));
            let label_at = layout.point_at(0, f64::from(tick) / 10.0);
            grid.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="10" fill="{}" text-anchor="start">{}</text>"#,
                label_at.x + 4.0,
                label_at.y + 3.0,
                theme.tick.css(),
                tick
            ));
        }

        let mut spokes = String::new();
        for end in layout.spokes() {
            spokes.push_str(&format!(
                r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
                center.x,
                center.y,
                end.x,
                end.y,
                theme.spoke.css()
            ));
        }

        let polygon = layout.polygon(snapshot.scores());
        let mut points = String::new();
        for p in &polygon {
            points.push_str(&format!(
                r#"<circle cx="{:.1}" cy="{:.1}" r="3.5" fill="{}" stroke="{}" stroke-width="2"/>"#,
                p.x,
                p.y,
                theme.point.css(),
                theme.stroke.css()
            ));
        }

        let mut labels = String::new();
        for (i, label) in snapshot.labels().iter().enumerate() {
            let anchor = layout.label_anchor(i, 14.0);
            let align = if (anchor.x - center.x).abs() < 1.0 {
                "middle"
            } else if anchor.x > center.x {
                "start"
            } else {
                "end"
            };
            labels.push_str(&format!(
                r#"<text x="{:.1}" y="{:.1}" font-size="12" fill="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                anchor.x,
                anchor.y,
                theme.label.css(),
                align,
                escape(label)
            ));
        }

        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">
  <rect width="100%" height="100%" fill="{bg}"/>
  {grid}
  {spokes}
  <polygon points="{data}" fill="{fill}" stroke="{stroke}" stroke-width="2"/>
  {points}
  {labels}
</svg>"#,
            size = self.size,
            bg = theme.background.css(),
            grid = grid,
            spokes = spokes,
            data = points_attr(&polygon),
            fill = theme.fill.css(),
            stroke = theme.stroke.css(),
            points = points,
            labels = labels,
        )
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
