use itertools::Itertools;
use polars::arrow::array::{new_empty_array, Array, ArrayRef};
use polars::arrow::datatypes::{ArrowDataType, ArrowSchema, Field};
use polars::frame::DataFrame;
use polars::prelude::{PolarsResult, Series};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaMismatch {
    #[error("expected {expected} columns, found {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("column `{column}` is declared as {expected:?} but the batch holds {found:?}")]
    DataType {
        column: String,
        expected: ArrowDataType,
        found: ArrowDataType,
    },
    #[error("column `{column}` has {found} rows, other columns have {expected}")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// All record batches of one stream, concatenated in stream order.
///
/// Columns are kept as the list of arrays the batches carried so no data is
/// copied while loading.
#[derive(Debug, Clone)]
pub struct StreamTable {
    schema: ArrowSchema,
    // columns[i][b] is column i of batch b
    columns: Vec<Vec<ArrayRef>>,
    batch_rows: Vec<usize>,
}

impl StreamTable {
    pub fn new(schema: ArrowSchema) -> Self {
        let columns = schema.fields.iter().map(|_| vec![]).collect();
        Self {
            schema,
            columns,
            batch_rows: vec![],
        }
    }

    /// Appends one batch. The table is left untouched when the batch does not
    /// fit the schema.
    pub fn push_batch(&mut self, arrays: Vec<ArrayRef>) -> Result<(), SchemaMismatch> {
        let fields = &self.schema.fields;
        if arrays.len() != fields.len() {
            return Err(SchemaMismatch::ColumnCount {
                expected: fields.len(),
                found: arrays.len(),
            });
        }

        let rows = arrays.first().map(|a| a.len()).unwrap_or(0);
        for (field, array) in fields.iter().zip(&arrays) {
            if array.data_type() != &field.data_type {
                return Err(SchemaMismatch::DataType {
                    column: field.name.clone(),
                    expected: field.data_type.clone(),
                    found: array.data_type().clone(),
                });
            }
            if array.len() != rows {
                return Err(SchemaMismatch::ColumnLength {
                    column: field.name.clone(),
                    expected: rows,
                    found: array.len(),
                });
            }
        }

        for (column, array) in self.columns.iter_mut().zip(arrays) {
            column.push(array);
        }
        self.batch_rows.push(rows);
        Ok(())
    }

    pub fn schema(&self) -> &ArrowSchema {
        &self.schema
    }

    pub fn fields(&self) -> &[Field] {
        &self.schema.fields
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.schema.fields.iter().map(|f| f.name.as_str()).collect_vec()
    }

    pub fn num_columns(&self) -> usize {
        self.schema.fields.len()
    }

    pub fn num_rows(&self) -> usize {
        self.batch_rows.iter().sum()
    }

    pub fn num_batches(&self) -> usize {
        self.batch_rows.len()
    }

    pub fn batch_row_counts(&self) -> &[usize] {
        &self.batch_rows
    }

    /// Chunks of the `index`-th column, one per batch.
    pub fn column(&self, index: usize) -> Option<&[ArrayRef]> {
        self.columns.get(index).map(|c| c.as_slice())
    }

    pub fn column_by_name(&self, name: &str) -> Option<&[ArrayRef]> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .and_then(|i| self.column(i))
    }

    /// Converts into a polars `DataFrame`. Every batch becomes one chunk of
    /// each series, so neither row order nor values change.
    pub fn to_data_frame(&self) -> PolarsResult<DataFrame> {
        let series = self
            .schema
            .fields
            .iter()
            .zip(&self.columns)
            .map(|(field, chunks)| {
                let chunks = if chunks.is_empty() {
                    vec![new_empty_array(field.data_type.clone())]
                } else {
                    chunks.clone()
                };
                Series::try_from((field.name.as_str(), chunks))
            })
            .collect::<PolarsResult<Vec<_>>>()?;

        DataFrame::new(series)
    }
}

impl TryFrom<&StreamTable> for DataFrame {
    type Error = polars::prelude::PolarsError;

    fn try_from(table: &StreamTable) -> PolarsResult<Self> {
        table.to_data_frame()
    }
}
