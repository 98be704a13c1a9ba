use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchPlotError {
    #[error("input error: {0}")]
    Input(String),
    #[error("schema error: {0}")]
    Schema(String),
    #[error("empty sample set: {0}")]
    EmptySamples(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("empty comparison set: {0}")]
    EmptyComparison(String),
    #[error("render error: {0}")]
    Render(String),
}

impl BenchPlotError {
    pub fn input<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::Input(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::Schema(msg.into())
    }

    pub fn empty_samples<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::EmptySamples(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::NotFound(msg.into())
    }

    pub fn empty_comparison<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::EmptyComparison(msg.into())
    }

    pub fn render<T: Into<String>>(msg: T) -> Self {
        BenchPlotError::Render(msg.into())
    }
}
