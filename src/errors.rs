use thiserror::Error;

#[derive(Error, Debug)]
pub enum OseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("exchange listing could not be retrieved: {0}")]
    DirectoryUnavailable(String),

    #[error("exchange listing markup no longer matches the expected shape: {0}")]
    DirectoryFormatChanged(String),

    #[error("instrument {0} not found. Try the OSE ticker.")]
    InstrumentNotFound(String),

    #[error("profile page has no data-export option: {0}")]
    NoExportMenu(String),

    #[error("export page has no historical-data link: {0}")]
    NoHistoryLink(String),

    #[error("historical data could not be retrieved: {0}")]
    FetchUnavailable(String),

    #[error("date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("chart rendering error: {0}")]
    PlotError(String),

    #[error("{0}")]
    ArgumentError(String),

    #[error("data error: {0}")]
    DataError(String),
}

pub type Result<T> = std::result::Result<T, OseError>;

impl OseError {
    /// Collapse a list of argument-validation problems into one error so
    /// the caller sees every problem in a single pass.
    pub fn arguments(problems: Vec<String>) -> Self {
        OseError::ArgumentError(problems.join("\n"))
    }
}
