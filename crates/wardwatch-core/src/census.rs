//! Headline counts and the dashboard figures derived from them.

use serde::{Deserialize, Serialize};

/// Raw counts taken in a single read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
  pub total_beds:    i64,
  pub occupied_beds: i64,
  pub active_staff:  i64,
  pub on_call_staff: i64,
}

impl Census {
  pub fn available_beds(&self) -> i64 { (self.total_beds - self.occupied_beds).max(0) }

  /// Occupied share of all beds in percent, rounded to one decimal.
  /// Zero when there are no beds.
  pub fn occupancy_rate(&self) -> f64 {
    if self.total_beds <= 0 {
      return 0.0;
    }
    let rate = self.occupied_beds as f64 / self.total_beds as f64 * 100.0;
    (rate * 10.0).round() / 10.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn occupancy_rate_rounds_to_one_decimal() {
    let c = Census { total_beds: 60, occupied_beds: 23, ..Default::default() };
    assert_eq!(c.occupancy_rate(), 38.3);
    assert_eq!(c.available_beds(), 37);
  }

  #[test]
  fn no_beds_means_zero_occupancy() {
    assert_eq!(Census::default().occupancy_rate(), 0.0);
  }

  #[test]
  fn available_beds_never_negative() {
    let c = Census { total_beds: 2, occupied_beds: 3, ..Default::default() };
    assert_eq!(c.available_beds(), 0);
  }
}
