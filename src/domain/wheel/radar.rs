//! Radar ("wheel") chart geometry.
//!
//! Pure layout math shared by every chart renderer: one axis per category,
//! first axis at 12 o'clock, proceeding clockwise. Distances scale linearly
//! with the score, 0 at the centre and 10 on the outer ring.

use std::f64::consts::PI;

use crate::domain::foundation::Score;

/// Step between grid rings, in score units.
pub const RING_STEP: u8 = 2;

/// A point in image coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry of a radar chart with `axes` spokes inside a square canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    axes: usize,
    center: Point,
    radius: f64,
}

impl RadarLayout {
    /// Lays out a chart on a `size` x `size` canvas with `margin` pixels
    /// reserved around the plot area for axis labels.
    pub fn new(axes: usize, size: u32, margin: u32) -> Self {
        let half = f64::from(size) / 2.0;
        Self {
            axes: axes.max(1),
            center: Point::new(half, half),
            radius: (half - f64::from(margin)).max(1.0),
        }
    }

    pub fn axes(&self) -> usize {
        self.axes
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle of axis `index` in radians; axis 0 points straight up.
    pub fn angle(&self, index: usize) -> f64 {
        -PI / 2.0 + 2.0 * PI * (index as f64) / (self.axes as f64)
    }

    /// Point on axis `index` at `fraction` (0.0..=1.0) of the radius.
    pub fn point_at(&self, index: usize, fraction: f64) -> Point {
        let angle = self.angle(index);
        let r = self.radius * fraction;
        Point::new(self.center.x + r * angle.cos(), self.center.y + r * angle.sin())
    }

    /// End of each axis on the outer ring.
    pub fn spokes(&self) -> Vec<Point> {
        (0..self.axes).map(|i| self.point_at(i, 1.0)).collect()
    }

    /// Vertices of the data polygon, one per score in axis order.
    pub fn polygon(&self, scores: &[Score]) -> Vec<Point> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| self.point_at(i, s.fraction()))
            .collect()
    }

    /// Grid rings as `(tick value, polygon)` pairs, innermost first.
    pub fn rings(&self) -> Vec<(u8, Vec<Point>)> {
        (1..=Score::MAX / RING_STEP)
            .map(|k| {
                let tick = k * RING_STEP;
                let fraction = f64::from(tick) / f64::from(Score::MAX);
                let ring = (0..self.axes).map(|i| self.point_at(i, fraction)).collect();
                (tick, ring)
            })
            .collect()
    }

    /// Anchor for the label of axis `index`, just outside the outer ring.
    pub fn label_anchor(&self, index: usize, offset: f64) -> Point {
        let angle = self.angle(index);
        let r = self.radius + offset;
        Point::new(self.center.x + r * angle.cos(), self.center.y + r * angle.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_axis_points_up() {
        let layout = RadarLayout::new(8, 400, 50);
        let top = layout.point_at(0, 1.0);
        assert!(close(top.x, 200.0));
        assert!(close(top.y, 50.0));
    }

    #[test]
    fn axes_proceed_clockwise() {
        let layout = RadarLayout::new(4, 400, 0);
        let right = layout.point_at(1, 1.0);
        assert!(close(right.x, 400.0));
        assert!(close(right.y, 200.0));
    }

    #[test]
    fn zero_score_sits_at_centre() {
        let layout = RadarLayout::new(3, 300, 20);
        let poly = layout.polygon(&[Score::new(0).unwrap(); 3]);
        for p in poly {
            assert!(close(p.x, 150.0) && close(p.y, 150.0));
        }
    }

    #[test]
    fn rings_every_two_points() {
        let layout = RadarLayout::new(8, 400, 40);
        let ticks: Vec<u8> = layout.rings().iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, vec![2, 4, 6, 8, 10]);
        assert!(layout.rings().iter().all(|(_, ring)| ring.len() == 8));
    }

    #[test]
    fn full_scores_fill_outer_ring() {
        let layout = RadarLayout::new(6, 200, 10);
        let poly = layout.polygon(&[Score::new(10).unwrap(); 6]);
        assert_eq!(poly, layout.spokes());
    }
}
