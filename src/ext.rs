use crate::stats::Stats;

#[extend::ext(name = SamplesExt)]
pub impl [f64] {
  /// Returns the mean, maximum and minimum of the samples, or `None` if there
  /// are no samples.
  fn summarize(&self) -> Option<Stats> {
    if self.is_empty() {
      return None;
    }

    let sum: f64 = self.iter().sum();
    let high_value = self.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let low_value = self.iter().copied().fold(f64::INFINITY, f64::min);

    Some(Stats {
      value: sum / self.len() as f64,
      high_value,
      low_value,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty() {
    let samples: [f64; 0] = [];

    assert_eq!(samples.summarize(), None);
  }

  #[test]
  fn single_sample_collapses() {
    let stats = [42.5_f64].summarize().unwrap();

    assert_eq!(stats.value, 42.5);
    assert_eq!(stats.high_value, 42.5);
    assert_eq!(stats.low_value, 42.5);
  }

  #[test]
  fn zero_variance() {
    let stats = [3.0_f64, 3.0, 3.0].summarize().unwrap();

    assert_eq!(stats.high_value, stats.low_value);
    assert_eq!(stats.value, stats.high_value);
  }

  #[test]
  fn mean_high_low() {
    let stats = [5032.0_f64, 5200.0].summarize().unwrap();

    assert_eq!(stats.value, 5116.0);
    assert_eq!(stats.high_value, 5200.0);
    assert_eq!(stats.low_value, 5032.0);
  }
}
