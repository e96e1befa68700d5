//! Summary statistics over projected walk values

use serde::Serialize;

/// Mean and spread of a sample of scalar values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,

    /// Sample standard deviation (Bessel-corrected); 0 for a single value
    pub std_dev: f64,

    /// Standard error of the mean, `std_dev / sqrt(count)`
    pub std_error: f64,
}

impl Summary {
    /// Summarize `values` in order
    ///
    /// Returns `None` for an empty slice. The sums are accumulated
    /// sequentially, so the result depends only on the values and their order.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        let std_dev = if count > 1 {
            let squares: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (squares / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Some(Self {
            count,
            mean,
            min,
            max,
            std_dev,
            std_error: std_dev / n.sqrt(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Summary::from_values(&[]), None);
    }

    #[test]
    fn test_single_value() {
        let s = Summary::from_values(&[4.0]).unwrap();
        assert_eq!(s.count, 1);
        assert_eq!(s.mean, 4.0);
        assert_eq!(s.min, 4.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.std_error, 0.0);
    }

    #[test]
    fn test_known_values() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let s = Summary::from_values(&values).unwrap();
        assert_eq!(s.mean, 5.0);
        assert_eq!(s.min, 2.0);
        assert_eq!(s.max, 9.0);
        // sum of squared deviations is 32
        assert!((s.std_dev - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
        assert!((s.std_error - s.std_dev / 8f64.sqrt()).abs() < 1e-12);
    }
}
