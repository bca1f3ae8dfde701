//! What a run did, gate by gate.

use std::fmt;

use retail_core::{layout::Dataset, partition::Partition};

use crate::context::Generator;

/// How one dataset gate of one partition was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
  /// The target object already existed.
  Skipped,
  /// The dataset was generated and written.
  Uploaded,
  /// A required input could not be obtained; nothing was written.
  Blocked,
}

impl fmt::Display for GateOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Skipped => "skipped",
      Self::Uploaded => "uploaded",
      Self::Blocked => "blocked",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateRecord {
  pub partition: Partition,
  pub dataset:   Dataset,
  pub key:       String,
  pub outcome:   GateOutcome,
}

#[derive(Debug, Clone)]
pub struct RunReport {
  pub generator:  Generator,
  /// Partitions visited, in order.
  pub partitions: usize,
  pub gates:      Vec<GateRecord>,
}

impl RunReport {
  pub fn new(generator: Generator) -> Self {
    Self { generator, partitions: 0, gates: Vec::new() }
  }

  pub(crate) fn record(
    &mut self,
    partition: &Partition,
    dataset: Dataset,
    key: String,
    outcome: GateOutcome,
  ) {
    self.gates.push(GateRecord { partition: *partition, dataset, key, outcome });
  }

  fn count(&self, outcome: GateOutcome) -> usize {
    self.gates.iter().filter(|g| g.outcome == outcome).count()
  }

  pub fn uploaded(&self) -> usize { self.count(GateOutcome::Uploaded) }

  pub fn skipped(&self) -> usize { self.count(GateOutcome::Skipped) }

  pub fn blocked(&self) -> usize { self.count(GateOutcome::Blocked) }

  /// Keys written by this run, in upload order.
  pub fn uploaded_keys(&self) -> impl Iterator<Item = &str> {
    self
      .gates
      .iter()
      .filter(|g| g.outcome == GateOutcome::Uploaded)
      .map(|g| g.key.as_str())
  }
}

impl fmt::Display for RunReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} run: {} partitions, {} uploaded, {} skipped, {} blocked",
      self.generator,
      self.partitions,
      self.uploaded(),
      self.skipped(),
      self.blocked(),
    )
  }
}
