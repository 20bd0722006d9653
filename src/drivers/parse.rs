/// One experimental reading reported by the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub time_ms: i64,
    pub volts: f64,
}
impl Sample {
    pub fn as_point(&self) -> [f64; 2] {
        [self.time_ms as f64, self.volts]
    }
}
/// Parses a board line of the form `"<time> <unit>,<label> <voltage>"`.
///
/// Returns `None` for anything that does not fit: no comma, a non-integer
/// time, a missing or non-numeric voltage.
pub fn parse_line(line: &str) -> Option<Sample> {
    let mut fields = line.trim().split(',');
    let time_field = fields.next()?;
    let volt_field = fields.next()?;
    let time_ms = time_field.split(' ').next()?.parse::<i64>().ok()?;
    let volts = volt_field.split(' ').nth(1)?.parse::<f64>().ok()?;
    volts.is_finite().then_some(Sample { time_ms, volts })
}
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Sample> {
    lines.iter().filter_map(|l| parse_line(l.as_ref())).collect()
}
