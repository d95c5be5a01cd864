#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read or write file")]
    Write(#[from] std::io::Error),
    #[error("failed to write GPX document")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("failed to parse flight data")]
    Json(#[from] serde_json::Error),
}
