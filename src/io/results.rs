use std::{
    fmt::Display,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{core::OptimizationResult, Float};

const BENCHMARK_COLUMN: &str = "Benchmark";
const ALGORITHM_COLUMN: &str = "Algorithm";
const VALUE_COLUMN: &str = "BestValue";
const NAMED_POSITION_COLUMNS: [&str; 3] = ["BestX", "BestY", "BestZ"];

/// The error type for reading and writing result files.
#[derive(Debug)]
pub enum PersistenceError {
    /// An I/O error occurred while accessing `path`.
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The first line is not a valid results header.
    MalformedHeader {
        /// The offending header line.
        header: String,
    },
    /// A data row could not be parsed.
    MalformedRow {
        /// The one-based line number of the row.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error on {}: {source}", path.display()),
            Self::MalformedHeader { header } => {
                write!(f, "Malformed results header: '{header}'")
            }
            Self::MalformedRow { line, reason } => {
                write!(f, "Malformed results row on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// One row of the results file: the best solution found by one algorithm on one benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// The benchmark function name.
    pub benchmark: String,
    /// The algorithm label, e.g. `"Base PSO"`.
    pub algorithm: String,
    /// The best position found.
    pub best_position: Vec<Float>,
    /// The objective value at [`ResultRecord::best_position`].
    pub best_value: Float,
}

impl ResultRecord {
    /// Build a record from the result of a run.
    pub fn from_result(
        benchmark: impl Into<String>,
        algorithm: impl Into<String>,
        result: &OptimizationResult,
    ) -> Self {
        Self {
            benchmark: benchmark.into(),
            algorithm: algorithm.into(),
            best_position: result.x.clone(),
            best_value: result.fx,
        }
    }
}

/// The position column names for a `dimension` dimensional problem.
///
/// Up to three dimensions the columns are named `BestX`, `BestY` and `BestZ`; beyond that they
/// are numbered `BestX1` through `BestXn`.
pub fn position_columns(dimension: usize) -> Vec<String> {
    if dimension <= NAMED_POSITION_COLUMNS.len() {
        NAMED_POSITION_COLUMNS[..dimension]
            .iter()
            .map(|c| c.to_string())
            .collect()
    } else {
        (1..=dimension).map(|i| format!("BestX{i}")).collect()
    }
}

/// Collects [`ResultRecord`]s in the order they are recorded and writes them as CSV.
#[derive(Debug, Clone, Default)]
pub struct ResultRecorder {
    records: Vec<ResultRecord>,
}

impl ResultRecorder {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: ResultRecord) -> &mut Self {
        self.records.push(record);
        self
    }

    /// Append the result of a run of `algorithm` on `benchmark`.
    pub fn record_result(
        &mut self,
        benchmark: &str,
        algorithm: &str,
        result: &OptimizationResult,
    ) -> &mut Self {
        self.record(ResultRecord::from_result(benchmark, algorithm, result))
    }

    /// The records collected so far.
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    /// The number of records collected so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the records as CSV to `writer`.
    ///
    /// The number of position columns is the longest recorded position; shorter positions leave
    /// their trailing position cells empty.
    ///
    /// # Errors
    ///
    /// Returns any error raised by `writer`.
    pub fn to_writer<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let dimension = self
            .records
            .iter()
            .map(|r| r.best_position.len())
            .max()
            .unwrap_or(0);
        let mut header = vec![BENCHMARK_COLUMN.to_string(), ALGORITHM_COLUMN.to_string()];
        header.extend(position_columns(dimension));
        header.push(VALUE_COLUMN.to_string());
        write_row(writer, &header)?;
        for record in &self.records {
            let mut row = Vec::with_capacity(dimension + 3);
            row.push(record.benchmark.clone());
            row.push(record.algorithm.clone());
            for i in 0..dimension {
                row.push(
                    record
                        .best_position
                        .get(i)
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                );
            }
            row.push(record.best_value.to_string());
            write_row(writer, &row)?;
        }
        writer.flush()
    }

    /// Write the records to a CSV file at `path`, creating parent directories and overwriting
    /// any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError::Io`] if a directory or the file cannot be created or written.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistenceError> {
        let path = path.as_ref();
        let io_error = |source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        self.to_writer(&mut writer).map_err(io_error)
    }
}

fn write_row<W: Write>(writer: &mut W, fields: &[String]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(writer, ",")?;
        }
        if field.contains([',', '"', '\n', '\r']) {
            write!(writer, "\"{}\"", field.replace('"', "\"\""))?;
        } else {
            write!(writer, "{field}")?;
        }
    }
    writeln!(writer)
}

/// Split CSV text into rows of fields, keeping the one-based line number each row starts on.
fn split_rows(text: &str) -> Result<Vec<(usize, Vec<String>)>, PersistenceError> {
    let mut rows = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut row_start = 1;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                rows.push((row_start, std::mem::take(&mut fields)));
                line += 1;
                row_start = line;
            }
            _ => field.push(c),
        }
    }
    if in_quotes {
        return Err(PersistenceError::MalformedRow {
            line: row_start,
            reason: "unterminated quoted field".to_string(),
        });
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        rows.push((row_start, fields));
    }
    // blank lines
    rows.retain(|(_, fields)| !(fields.len() == 1 && fields[0].is_empty()));
    Ok(rows)
}

fn parse_float(value: &str, column: &str, line: usize) -> Result<Float, PersistenceError> {
    value
        .trim()
        .parse::<Float>()
        .map_err(|e| PersistenceError::MalformedRow {
            line,
            reason: format!("{column} value '{value}' is not a number ({e})"),
        })
}

/// Parse records from CSV text in the format written by [`ResultRecorder::to_writer`].
///
/// # Errors
///
/// Returns [`PersistenceError::MalformedHeader`] if the header is missing or does not start with
/// `Benchmark,Algorithm` and end with `BestValue`, and [`PersistenceError::MalformedRow`] if a row
/// has the wrong number of fields or a non-numeric value.
pub fn parse_results(text: &str) -> Result<Vec<ResultRecord>, PersistenceError> {
    let mut rows = split_rows(text)?.into_iter();
    let Some((_, header)) = rows.next() else {
        return Err(PersistenceError::MalformedHeader {
            header: String::new(),
        });
    };
    let valid_header = header.len() >= 3
        && header[0] == BENCHMARK_COLUMN
        && header[1] == ALGORITHM_COLUMN
        && header[header.len() - 1] == VALUE_COLUMN;
    if !valid_header {
        return Err(PersistenceError::MalformedHeader {
            header: header.join(","),
        });
    }
    let n_columns = header.len();
    rows.map(|(line, fields)| {
        if fields.len() != n_columns {
            return Err(PersistenceError::MalformedRow {
                line,
                reason: format!("expected {n_columns} fields, found {}", fields.len()),
            });
        }
        let best_position = fields[2..n_columns - 1]
            .iter()
            .zip(&header[2..n_columns - 1])
            .filter(|(value, _)| !value.trim().is_empty())
            .map(|(value, column)| parse_float(value, column, line))
            .collect::<Result<Vec<Float>, PersistenceError>>()?;
        Ok(ResultRecord {
            benchmark: fields[0].clone(),
            algorithm: fields[1].clone(),
            best_position,
            best_value: parse_float(&fields[n_columns - 1], VALUE_COLUMN, line)?,
        })
    })
    .collect()
}

/// Read records from a CSV file written by [`ResultRecorder::write_csv`].
///
/// # Errors
///
/// Returns [`PersistenceError::Io`] if the file cannot be read, otherwise see
/// [`parse_results`].
pub fn read_results<P: AsRef<Path>>(path: P) -> Result<Vec<ResultRecord>, PersistenceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_results(&text)
}
