//! Employment-status labels.
//!
//! A closed label set consumed by presentation. The directory source does
//! not carry it on records and nothing here transitions between states —
//! the ordering below is the natural employment lifecycle, nothing more.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
  ToBeEmployed,
  Employed,
  ToBeTerminated,
  Terminated,
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use super::EmploymentStatus;

  #[test]
  fn labels_round_trip() {
    for status in [
      EmploymentStatus::ToBeEmployed,
      EmploymentStatus::Employed,
      EmploymentStatus::ToBeTerminated,
      EmploymentStatus::Terminated,
    ] {
      let label = status.to_string();
      assert_eq!(EmploymentStatus::from_str(&label).unwrap(), status);
    }
  }

  #[test]
  fn unknown_label_is_rejected() {
    assert!(EmploymentStatus::from_str("retired").is_err());
  }
}
