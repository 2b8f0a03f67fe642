use std::path::PathBuf;
use thiserror::Error;

/// Failure taxonomy for the pipeline.
///
/// Retrieval failures are isolated per category and never surface as this
/// type; they are logged inside the download loop. Everything here is a
/// hard stop for the stage that raised it.
#[derive(Debug, Error)]
pub enum EdaError {
    #[error("no review data found under {0} (run the download step first)")]
    MissingInput(PathBuf),

    #[error("overview query returned no row (is the reviews table empty?)")]
    EmptyOverview,

    #[error("rating {0} is absent from the rating distribution")]
    MissingRating(i64),
}
