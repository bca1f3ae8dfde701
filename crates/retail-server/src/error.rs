//! Trigger error type and its [`IntoResponse`] implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// A failed run, as reported to the scheduler.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Run(#[from] retail_backfill::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    tracing::error!(error = %self, "run failed");
    (
      StatusCode::INTERNAL_SERVER_ERROR,
      format!("Errors encountered, please review: {self}"),
    )
      .into_response()
  }
}
