//! Table validation.
//!
//! Callers hand in loosely typed columns (`RawColumn`); everything downstream
//! works on a `NumericTable`, which can only be built through `validate`.
//!
//! Checks, in order:
//! - every value numeric (text and booleans are rejected)
//! - at least one column
//! - every column has the same length as the first
//! - at least 2 rows
//! - every value finite

use serde::{Deserialize, Serialize};

use crate::error::{InvalidInput, MatrixError};

/// A single cell of caller-supplied data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Value {
    /// Numeric view of the value; `None` for text and booleans.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Number(v) => Some(*v),
            Value::Bool(_) | Value::Text(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

/// A named column of not-yet-validated values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<Value>,
}

impl RawColumn {
    pub fn new(
        name: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// A validated numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    name: String,
    values: Vec<f64>,
}

impl NumericColumn {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Homogeneous numeric table: ≥ 1 column, ≥ 2 rows, equal lengths, finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    columns: Vec<NumericColumn>,
    rows: usize,
}

impl NumericTable {
    /// Validate raw columns into a numeric table.
    pub fn validate(columns: &[RawColumn]) -> Result<Self, MatrixError> {
        let mut out = Vec::with_capacity(columns.len());
        for col in columns {
            let values = col
                .values
                .iter()
                .enumerate()
                .map(|(row, value)| {
                    value.as_f64().ok_or_else(|| InvalidInput::NonNumericColumn {
                        column: col.name.clone(),
                        row,
                    })
                })
                .collect::<Result<Vec<f64>, _>>()?;
            out.push(NumericColumn {
                name: col.name.clone(),
                values,
            });
        }
        Self::build(out)
    }

    /// Build directly from `(name, samples)` pairs; still checks shape and finiteness.
    pub fn from_columns<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Result<Self, MatrixError> {
        Self::build(
            columns
                .into_iter()
                .map(|(name, values)| NumericColumn {
                    name: name.into(),
                    values,
                })
                .collect(),
        )
    }

    fn build(columns: Vec<NumericColumn>) -> Result<Self, MatrixError> {
        let Some(first) = columns.first() else {
            return Err(InvalidInput::EmptyTable.into());
        };
        let rows = first.values.len();

        for col in &columns {
            if col.values.len() != rows {
                return Err(InvalidInput::LengthMismatch {
                    column: col.name.clone(),
                    expected: rows,
                    found: col.values.len(),
                }
                .into());
            }
        }
        if rows < 2 {
            return Err(InvalidInput::TooFewRows { rows }.into());
        }
        for col in &columns {
            if let Some(row) = col.values.iter().position(|v| !v.is_finite()) {
                return Err(InvalidInput::NonFiniteValue {
                    column: col.name.clone(),
                    row,
                }
                .into());
            }
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[NumericColumn] {
        &self.columns
    }

    pub fn column(&self, idx: usize) -> &NumericColumn {
        &self.columns[idx]
    }

    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Number of columns (N).
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows (R).
    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_mixed_integer_and_float() {
        let table = NumericTable::validate(&[
            RawColumn::new("a", [1i64, 2, 3]),
            RawColumn::new("b", [0.5, 1.5, 2.5]),
        ])
        .unwrap();
        assert_eq!(table.width(), 2);
        assert_eq!(table.rows(), 3);
        assert_eq!(table.column(0).values(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.names(), vec!["a", "b"]);
    }

    #[test]
    fn validate_rejects_text() {
        let err = NumericTable::validate(&[RawColumn {
            name: "label".to_string(),
            values: vec![Value::Number(1.0), Value::from("x")],
        }])
        .unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidInput(InvalidInput::NonNumericColumn {
                column: "label".to_string(),
                row: 1
            })
        );
    }

    #[test]
    fn validate_rejects_bool() {
        let err = NumericTable::validate(&[RawColumn {
            name: "flag".to_string(),
            values: vec![Value::Bool(true), Value::Bool(false)],
        }])
        .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn validate_rejects_length_mismatch() {
        let err = NumericTable::validate(&[
            RawColumn::new("a", [1.0, 2.0, 3.0]),
            RawColumn::new("b", [1.0, 2.0]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidInput(InvalidInput::LengthMismatch {
                column: "b".to_string(),
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn validate_rejects_empty_and_short_tables() {
        assert_eq!(
            NumericTable::validate(&[]).unwrap_err(),
            MatrixError::InvalidInput(InvalidInput::EmptyTable)
        );
        assert_eq!(
            NumericTable::validate(&[RawColumn::new("a", [1.0])]).unwrap_err(),
            MatrixError::InvalidInput(InvalidInput::TooFewRows { rows: 1 })
        );
    }

    #[test]
    fn from_columns_rejects_nan() {
        let err = NumericTable::from_columns(vec![("a", vec![1.0, f64::NAN])]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::InvalidInput(InvalidInput::NonFiniteValue {
                column: "a".to_string(),
                row: 1
            })
        );
    }

    #[test]
    fn raw_values_deserialize_untagged() {
        let col: RawColumn =
            serde_json::from_str(r#"{"name":"a","values":[1, 2.5, "x", true]}"#).unwrap();
        assert_eq!(
            col.values,
            vec![
                Value::Integer(1),
                Value::Number(2.5),
                Value::Text("x".to_string()),
                Value::Bool(true)
            ]
        );
    }
}
