use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilankoError {
    #[error("resource not found: {resource} (HTTP {status})")]
    Http { resource: String, status: u16 },

    #[error("no row for year {year} in {resource}")]
    YearMissing { resource: String, year: u32 },

    #[error("malformed row for year {year}: {line:?}")]
    MalformedRow { year: u32, line: String },

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
}

impl MilankoError {
    /// True for the "resource not found" family (HTTP non-2xx or row absent).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::YearMissing { .. })
    }
}

pub type Result<T> = std::result::Result<T, MilankoError>;
