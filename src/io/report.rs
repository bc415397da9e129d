use std::{collections::BTreeMap, fmt::Display, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{BASE_PSO, DYNAMIC_WEIGHT_PSO},
    io::{read_results, PersistenceError, ResultRecord},
    Float,
};

/// The error type for building a comparison report.
#[derive(Debug)]
pub enum ReportError {
    /// The results could not be loaded.
    Persistence(PersistenceError),
    /// A benchmark has no row for one of the compared algorithms.
    MissingAlgorithm {
        /// The benchmark missing a row.
        benchmark: String,
        /// The algorithm label without a row.
        algorithm: String,
    },
}

impl Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persistence(e) => write!(f, "Could not load results: {e}"),
            Self::MissingAlgorithm {
                benchmark,
                algorithm,
            } => write!(f, "No '{algorithm}' result for benchmark '{benchmark}'"),
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Persistence(e) => Some(e),
            Self::MissingAlgorithm { .. } => None,
        }
    }
}

impl From<PersistenceError> for ReportError {
    fn from(e: PersistenceError) -> Self {
        Self::Persistence(e)
    }
}

/// The symmetric percentage difference between two values,
///
/// ```math
/// \left|\frac{|v_1 - v_2|}{(v_1 + v_2)/2}\right| \times 100
/// ```
///
/// Two zeros give `NaN`. Values of opposite sign can give arbitrarily large results.
pub fn percentage_difference(value1: Float, value2: Float) -> Float {
    ((value1 - value2).abs() / ((value1 + value2) / 2.0) * 100.0).abs()
}

/// The best values of both PSO variants on a single benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    /// The benchmark function name.
    pub benchmark: String,
    /// The best value found by the constant-weight variant.
    pub base_value: Float,
    /// The best value found by the dynamic-weight variant.
    pub dynamic_value: Float,
    /// The [`percentage_difference`] of the dynamic value relative to the base value.
    pub value_difference: Float,
}

/// Compare the two PSO variants on every benchmark present in `records`.
///
/// Rows are grouped by benchmark and the comparisons are sorted by benchmark name. If a benchmark
/// has more than one row for an algorithm, the first one is used.
///
/// # Errors
///
/// Returns [`ReportError::MissingAlgorithm`] if a benchmark lacks a `"Base PSO"` or a
/// `"PSO with Dynamic Weight"` row.
pub fn compare_results(records: &[ResultRecord]) -> Result<Vec<BenchmarkComparison>, ReportError> {
    let mut groups: BTreeMap<&str, (Option<Float>, Option<Float>)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.benchmark.as_str()).or_default();
        let slot = match record.algorithm.as_str() {
            BASE_PSO => &mut entry.0,
            DYNAMIC_WEIGHT_PSO => &mut entry.1,
            _ => continue,
        };
        slot.get_or_insert(record.best_value);
    }
    groups
        .into_iter()
        .map(|(benchmark, values)| {
            let missing = |algorithm: &str| ReportError::MissingAlgorithm {
                benchmark: benchmark.to_string(),
                algorithm: algorithm.to_string(),
            };
            let base_value = values.0.ok_or_else(|| missing(BASE_PSO))?;
            let dynamic_value = values.1.ok_or_else(|| missing(DYNAMIC_WEIGHT_PSO))?;
            Ok(BenchmarkComparison {
                benchmark: benchmark.to_string(),
                base_value,
                dynamic_value,
                value_difference: percentage_difference(dynamic_value, base_value),
            })
        })
        .collect()
}

/// Read a results file and compare the two PSO variants.
///
/// # Errors
///
/// Returns [`ReportError::Persistence`] if the file cannot be read or parsed, otherwise see
/// [`compare_results`].
pub fn compare_results_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<BenchmarkComparison>, ReportError> {
    compare_results(&read_results(path)?)
}

/// A printable table of [`BenchmarkComparison`]s.
pub struct ComparisonTable<'a>(pub &'a [BenchmarkComparison]);

impl Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .0
            .iter()
            .map(|c| c.benchmark.len())
            .chain(std::iter::once("Benchmark".len()))
            .max()
            .unwrap_or_default();
        writeln!(f, "{:<width$}  {:>16}", "Benchmark", "Value_Difference")?;
        for comparison in self.0 {
            writeln!(
                f,
                "{:<width$}  {:>16.2}",
                comparison.benchmark, comparison.value_difference
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(benchmark: &str, algorithm: &str, fx: Float) -> ResultRecord {
        ResultRecord {
            benchmark: benchmark.to_string(),
            algorithm: algorithm.to_string(),
            best_position: vec![0.0, 0.0, 0.0],
            best_value: fx,
        }
    }

    #[test]
    fn test_percentage_difference() {
        assert_eq!(format!("{:.2}", percentage_difference(12.0, 10.0)), "18.18");
        assert_eq!(percentage_difference(3.0, 3.0), 0.0);
        assert!(percentage_difference(0.0, 0.0).is_nan());
        assert_eq!(percentage_difference(10.0, 12.0), percentage_difference(12.0, 10.0));
    }

    #[test]
    fn test_compare_results() {
        let records = vec![
            record("sphere_function", "Base PSO", 10.0),
            record("ackley_function", "PSO with Dynamic Weight", 0.0),
            record("sphere_function", "PSO with Dynamic Weight", 12.0),
            record("sphere_function", "Base PSO", 99.0),
            record("ackley_function", "Base PSO", 0.0),
            record("ackley_function", "Random Search", 1.0),
        ];
        let comparisons = compare_results(&records).unwrap();
        assert_eq!(comparisons.len(), 2);
        assert_eq!(comparisons[0].benchmark, "ackley_function");
        assert!(comparisons[0].value_difference.is_nan());
        assert_eq!(comparisons[1].benchmark, "sphere_function");
        assert_eq!(comparisons[1].base_value, 10.0);
        assert_eq!(comparisons[1].dynamic_value, 12.0);
        let table = ComparisonTable(&comparisons).to_string();
        assert!(table.contains("sphere_function             18.18"));
        assert!(table.contains("NaN"));
    }

    #[test]
    fn test_missing_algorithm() {
        let records = vec![record("levy_function", "Base PSO", 1.0)];
        match compare_results(&records) {
            Err(ReportError::MissingAlgorithm {
                benchmark,
                algorithm,
            }) => {
                assert_eq!(benchmark, "levy_function");
                assert_eq!(algorithm, "PSO with Dynamic Weight");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            compare_results_file("/nonexistent/swarmbench.csv"),
            Err(ReportError::Persistence(_))
        ));
    }
}
