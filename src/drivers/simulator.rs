use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::{ModelGrid, RcModel};
use crate::drivers::{RigError, SampleSource};
/// Stand-in for the bench board: replies to a reset with the RC step
/// response plus uniform noise, in the same text format as the firmware.
pub struct SimulatedDevice {
    model: RcModel,
    grid: ModelGrid,
    noise_volts: f64,
    rng: StdRng,
}
impl SimulatedDevice {
    pub fn new(model: RcModel, grid: ModelGrid) -> Self {
        Self::with_rng(model, grid, StdRng::from_entropy())
    }
    pub fn seeded(model: RcModel, grid: ModelGrid, seed: u64) -> Self {
        Self::with_rng(model, grid, StdRng::seed_from_u64(seed))
    }
    fn with_rng(model: RcModel, grid: ModelGrid, rng: StdRng) -> Self {
        Self {
            model,
            grid,
            noise_volts: 0.02,
            rng,
        }
    }
    pub fn with_noise(mut self, noise_volts: f64) -> Self {
        self.noise_volts = noise_volts.abs();
        self
    }
}
impl SampleSource for SimulatedDevice {
    fn acquire(&mut self) -> Result<Vec<String>, RigError> {
        let mut lines = Vec::with_capacity(self.grid.points + 2);
        // The real board prints its reboot banner before any data.
        lines.push("MPY: soft reboot\r\n".to_owned());
        for [t, v] in self.model.theoretical_curve(&self.grid) {
            let noise = if self.noise_volts > 0.0 {
                self.rng.gen_range(-self.noise_volts..self.noise_volts)
            } else {
                0.0
            };
            let v = (v + noise).max(0.0);
            lines.push(format!("{} ms,V {:.6}\r\n", t as i64, v));
        }
        lines.push(">>> ".to_owned());
        log::debug!("simulated {} lines", lines.len());
        Ok(lines)
    }
}
