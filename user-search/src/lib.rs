//! # User Search
//!
//! Two single-shot demo programs built on this library index a handful of
//! literal records into an OpenSearch collection and run one match query
//! against it, printing the raw response.
//!
//! Both follow the same sequence: index every record, then search. The
//! first failure aborts the run.

pub mod config;
pub mod driver;
pub mod operations;
pub mod scenarios;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ClientSettings, Dependencies};
pub use driver::{run, Scenario, Stage};

use std::error::Error as _;
use std::io::{self, Write};

use thiserror::Error;
use tracing::error;
use user_search_repository::{RawSearchResponse, SearchError};
use user_search_shared::Record;

/// Errors that can end a demo run.
#[derive(Error, Debug)]
pub enum DemoError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// One of the run's stages failed.
    #[error("{stage} failed")]
    StageFailed {
        stage: Stage,
        #[source]
        source: SearchError,
    },

    /// Failed to write the search response.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// The stage that failed, if the run got past configuration.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::StageFailed { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Run a scenario against the engine configured in the environment and
/// write the raw search response to `out`.
pub async fn execute<R: Record>(
    scenario: &Scenario<R>,
    out: &mut impl Write,
) -> Result<(), DemoError> {
    let dependencies = Dependencies::from_env()?;
    let response = run(&dependencies.client, scenario).await?;
    write_response(&response, out)
}

/// Write the unparsed search body, followed by a newline.
pub fn write_response(response: &RawSearchResponse, out: &mut impl Write) -> Result<(), DemoError> {
    writeln!(out, "{}", response.body)?;
    out.flush()?;
    Ok(())
}

/// Log a failed run and write its error chain to `out`, one cause per line.
pub fn report_failure(err: &DemoError, out: &mut impl Write) -> io::Result<()> {
    let causes = error_chain(err);
    error!(error = %err, causes = ?causes, stage = ?err.stage(), "Run failed");

    writeln!(out, "Error: {}", err)?;
    for cause in &causes {
        writeln!(out, "  Caused by: {}", cause)?;
    }
    out.flush()
}

fn error_chain(err: &DemoError) -> Vec<String> {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    causes
}
