use std::collections::VecDeque;
use std::io::{BufRead, BufReader, ErrorKind, Write};
use crate::config::SerialSettings;
use crate::drivers::RigError;
/// Something that can reset the bench board and hand back its raw output lines.
pub trait SampleSource {
    fn acquire(&mut self) -> Result<Vec<String>, RigError>;
}
/// The board on the serial port. The port is opened per acquisition and
/// released when the call returns.
pub struct SerialDevice {
    settings: SerialSettings,
}
impl SerialDevice {
    pub fn new(settings: SerialSettings) -> Self {
        Self { settings }
    }
}
impl SampleSource for SerialDevice {
    fn acquire(&mut self) -> Result<Vec<String>, RigError> {
        let mut port = serialport::new(&self.settings.port_name, self.settings.baud_rate)
            .timeout(self.settings.timeout)
            .open()?;
        log::info!(
            "opened {} @ {} baud, sending reset",
            self.settings.port_name,
            self.settings.baud_rate
        );
        port.write_all(&[self.settings.reset_byte])?;
        port.flush()?;
        let mut reader = BufReader::new(port);
        read_lines_until_timeout(&mut reader)
    }
}
/// Reads newline-terminated lines until the stream goes quiet (timeout) or ends.
///
/// A trailing line without `\n` is still returned. Lines that are not valid
/// UTF-8 are dropped.
pub fn read_lines_until_timeout<R: BufRead>(reader: &mut R) -> Result<Vec<String>, RigError> {
    let mut lines = Vec::new();
    let mut bytes_total = 0usize;
    loop {
        let mut raw = Vec::new();
        let finished = match reader.read_until(b'\n', &mut raw) {
            Ok(0) => true,
            Ok(_) => !raw.ends_with(b"\n"),
            Err(e) if e.kind() == ErrorKind::TimedOut => true,
            Err(e) => return Err(e.into()),
        };
        bytes_total += raw.len();
        if !raw.is_empty() {
            if let Ok(text) = String::from_utf8(raw) {
                lines.push(text);
            }
        }
        if finished {
            break;
        }
    }
    log::debug!("read {} bytes in {} lines", bytes_total, lines.len());
    Ok(lines)
}
/// In-memory source useful for tests and deterministic playback.
pub struct ManualSource {
    responses: VecDeque<Vec<String>>,
}
impl ManualSource {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: VecDeque::from([lines.into_iter().map(Into::into).collect()]),
        }
    }
}
impl SampleSource for ManualSource {
    fn acquire(&mut self) -> Result<Vec<String>, RigError> {
        Ok(self.responses.pop_front().unwrap_or_default())
    }
}
