use thiserror::Error;
#[derive(Debug, Error)]
pub enum RigError {
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("serial I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for RigError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        RigError::Plot(format!("{value:?}"))
    }
}
impl From<image::ImageError> for RigError {
    fn from(value: image::ImageError) -> Self {
        RigError::Plot(value.to_string())
    }
}
