use crate::config::{ModelGrid, RcModel};
impl RcModel {
    /// τ = R·C, expressed in milliseconds.
    pub fn time_constant_ms(&self) -> f64 {
        self.resistance_ohms * self.capacitance_farads * 1000.0
    }
    /// Capacitor voltage `t_ms` after the step: `V = Vs · (1 - e^(-t/τ))`.
    pub fn voltage_at(&self, t_ms: f64) -> f64 {
        self.supply_volts * (1.0 - (-t_ms / self.time_constant_ms()).exp())
    }
    /// Evaluates the charging curve on `grid`, starting at t = 0.
    pub fn theoretical_curve(&self, grid: &ModelGrid) -> Vec<[f64; 2]> {
        (0..grid.points)
            .map(|i| {
                let t = (i as u64 * grid.step_ms as u64) as f64;
                [t, self.voltage_at(t)]
            })
            .collect()
    }
}
