//! Closed-form statistics over raw samples. All functions return `None` on
//! empty input; callers turn that into a typed error with context.

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation: sqrt of the mean squared deviation.
pub fn population_stddev(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Geometric mean via the direct product-then-root formulation, matching the
/// reference behavior. A sum-of-logs variant would be more stable for very
/// large inputs; benchmark suites are small enough not to need it.
pub fn geometric_mean(ratios: &[f64]) -> Option<f64> {
    if ratios.is_empty() {
        return None;
    }
    let product: f64 = ratios.iter().product();
    Some(product.powf(1.0 / ratios.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::{geometric_mean, mean, population_stddev};

    #[test]
    fn test_mean_of_constant_values() {
        assert_eq!(mean(&[10.0, 10.0, 10.0, 10.0]), Some(10.0));
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(mean(&[]), None);
        assert_eq!(population_stddev(&[]), None);
        assert_eq!(geometric_mean(&[]), None);
    }

    #[test]
    fn test_stddev_is_zero_iff_values_identical() {
        assert_eq!(population_stddev(&[3.0, 3.0, 3.0]), Some(0.0));
        let spread = population_stddev(&[1.0, 2.0, 3.0]).unwrap();
        assert!(spread > 0.0);
    }

    #[test]
    fn test_stddev_is_population_not_sample() {
        // mean 10, squared deviations 100 each, variance 100
        let s = population_stddev(&[0.0, 20.0]).unwrap();
        assert!((s - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_mean_of_constant_is_the_constant() {
        let gm = geometric_mean(&[2.5, 2.5, 2.5, 2.5]).unwrap();
        assert!((gm - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_mean_of_two_and_one_is_sqrt_two() {
        let gm = geometric_mean(&[2.0, 1.0]).unwrap();
        assert!((gm - 2.0_f64.sqrt()).abs() < 1e-12);
    }
}
