use std::cell::Cell;
/// matplotlib's default colour cycle, so the two curves look as they did on the bench PC.
pub const DEFAULT_CYCLE: [[u8; 3]; 4] = [
    [31, 119, 180],
    [255, 127, 14],
    [44, 160, 44],
    [214, 39, 40],
];
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveStyle {
    Solid,
    Dotted,
}
#[derive(Clone, Debug)]
pub struct Curve {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub style: CurveStyle,
    pub color: [u8; 3],
}
/// The drawing region: curves plus decorations, independent of any toolkit.
#[derive(Clone, Debug, Default)]
pub struct PlotAxes {
    curves: Vec<Curve>,
    x_label: Option<String>,
    y_label: Option<String>,
    grid: bool,
    next_color: usize,
}
impl PlotAxes {
    pub fn new() -> Self {
        Self::default()
    }
    /// Adds a curve, taking the next colour from the cycle.
    pub fn plot(&mut self, name: impl Into<String>, points: Vec<[f64; 2]>, style: CurveStyle) {
        let color = DEFAULT_CYCLE[self.next_color % DEFAULT_CYCLE.len()];
        self.next_color += 1;
        self.curves.push(Curve {
            name: name.into(),
            points,
            style,
            color,
        });
    }
    pub fn set_x_label(&mut self, label: impl Into<String>) {
        self.x_label = Some(label.into());
    }
    pub fn set_y_label(&mut self, label: impl Into<String>) {
        self.y_label = Some(label.into());
    }
    pub fn set_grid(&mut self, on: bool) {
        self.grid = on;
    }
    /// Back to the freshly created state: no curves, no labels, no grid.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }
    pub fn x_label(&self) -> Option<&str> {
        self.x_label.as_deref()
    }
    pub fn y_label(&self) -> Option<&str> {
        self.y_label.as_deref()
    }
    pub fn grid(&self) -> bool {
        self.grid
    }
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
    /// Data bounds over every curve as `([x_min, y_min], [x_max, y_max])`.
    pub fn bounds(&self) -> Option<([f64; 2], [f64; 2])> {
        let mut points = self.curves.iter().flat_map(|c| c.points.iter());
        let first = *points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| {
            (
                [lo[0].min(p[0]), lo[1].min(p[1])],
                [hi[0].max(p[0]), hi[1].max(p[1])],
            )
        }))
    }
}
/// Asks whatever hosts the axes to show their new contents.
pub trait DrawTrigger {
    fn draw(&self);
}
impl DrawTrigger for eframe::egui::Context {
    fn draw(&self) {
        self.request_repaint();
    }
}
/// Counts draw requests; handy when no window exists.
#[derive(Debug, Default)]
pub struct DrawCounter(Cell<usize>);
impl DrawCounter {
    pub fn count(&self) -> usize {
        self.0.get()
    }
}
impl DrawTrigger for DrawCounter {
    fn draw(&self) {
        self.0.set(self.0.get() + 1);
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn colours_cycle_and_clear_resets() {
        let mut axes = PlotAxes::new();
        axes.plot("a", vec![[0.0, 0.0]], CurveStyle::Solid);
        axes.plot("b", vec![[1.0, 1.0]], CurveStyle::Dotted);
        assert_eq!(axes.curves()[0].color, DEFAULT_CYCLE[0]);
        assert_eq!(axes.curves()[1].color, DEFAULT_CYCLE[1]);
        axes.set_x_label("x");
        axes.set_grid(true);
        axes.clear();
        assert!(axes.is_empty());
        assert!(!axes.grid());
        assert_eq!(axes.x_label(), None);
        axes.plot("c", vec![], CurveStyle::Solid);
        assert_eq!(axes.curves()[0].color, DEFAULT_CYCLE[0]);
    }
    #[test]
    fn bounds_span_all_curves() {
        let mut axes = PlotAxes::new();
        assert_eq!(axes.bounds(), None);
        axes.plot("a", vec![[0.0, 0.5], [10.0, 3.0]], CurveStyle::Solid);
        axes.plot("b", vec![[-5.0, 1.0]], CurveStyle::Dotted);
        assert_eq!(axes.bounds(), Some(([-5.0, 0.5], [10.0, 3.0])));
    }
}
