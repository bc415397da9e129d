/// CSV persistence of [`ResultRecord`]s.
pub mod results;
pub use results::{
    parse_results, position_columns, read_results, PersistenceError, ResultRecord,
    ResultRecorder,
};

/// Percentage-difference comparison of the two PSO variants.
pub mod report;
pub use report::{
    compare_results, compare_results_file, percentage_difference, BenchmarkComparison,
    ComparisonTable, ReportError,
};
