use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network or transport failure reaching the source page. Surfaced
    /// verbatim; there is no retry.
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The document decoded fine but carries no builder markup. Distinct
    /// from fetch failures so callers can tell an unsupported page from a
    /// connectivity problem.
    #[error(
        "no `.{root_class}` container found; this page does not appear to be built with {builder}"
    )]
    BuilderNotFound { root_class: String, builder: String },
}
