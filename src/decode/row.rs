//! Row adapters for the three result-delivery mechanisms.
//!
//! Each adapter normalizes its mechanism's native row shape into (declared
//! type, optional text) pairs and delegates to [`decode_cell`]. The three
//! mechanisms signal SQL NULL differently, and those policies are kept
//! distinct on purpose:
//!
//! - direct API rows omit the cell's text payload;
//! - plain CSV export rows carry the reserved sentinel token `\N` in the
//!   field text;
//! - downloaded/decompressed CSV fields carry an explicit null flag that
//!   wins over any text content.

use crate::decode::cell::decode_cell;
use crate::error::DecodeError;
use crate::transport::messages::{ColumnInfo, Datum, DownloadField};
use crate::types::Value;

/// Reserved token marking SQL NULL in plain CSV export rows.
///
/// Two characters: a backslash and a capital N. The engine never emits it as
/// user data in this delivery mode, so it is safe to test for equality before
/// coercion.
pub const CSV_NULL_SENTINEL: &str = "\\N";

/// Decode one direct API row.
///
/// Each [`Datum`] already distinguishes NULL (absent text) from a present
/// value.
///
/// # Errors
///
/// Returns [`DecodeError::RowShapeMismatch`] if the cell count differs from
/// the column count, or the first failing cell's error with column context.
/// No partial output is produced.
pub fn decode_api_row(columns: &[ColumnInfo], cells: &[Datum]) -> Result<Vec<Value>, DecodeError> {
    check_shape(columns, cells.len())?;

    columns
        .iter()
        .zip(cells)
        .enumerate()
        .map(|(index, (column, cell))| {
            let column_type = column.column_type();
            decode_cell(&column_type, cell.text.as_deref())
                .map_err(|err| err.at_column(index, &column.name, column_type))
        })
        .collect()
}

/// Decode one plain CSV export row.
///
/// Every field is non-optional text; a field equal to [`CSV_NULL_SENTINEL`]
/// is treated as NULL and never passed to the coercion table.
///
/// # Errors
///
/// Same contract as [`decode_api_row`].
pub fn decode_csv_row<S: AsRef<str>>(
    columns: &[ColumnInfo],
    fields: &[S],
) -> Result<Vec<Value>, DecodeError> {
    check_shape(columns, fields.len())?;

    columns
        .iter()
        .zip(fields)
        .enumerate()
        .map(|(index, (column, field))| {
            let text = field.as_ref();
            let raw = (text != CSV_NULL_SENTINEL).then_some(text);
            let column_type = column.column_type();
            decode_cell(&column_type, raw)
                .map_err(|err| err.at_column(index, &column.name, column_type))
        })
        .collect()
}

/// Decode one downloaded/decompressed CSV row.
///
/// Each [`DownloadField`] carries its own explicit null flag, independent of
/// its text content; a set flag means NULL regardless of any text present.
///
/// # Errors
///
/// Same contract as [`decode_api_row`].
pub fn decode_download_row(
    columns: &[ColumnInfo],
    fields: &[DownloadField],
) -> Result<Vec<Value>, DecodeError> {
    check_shape(columns, fields.len())?;

    columns
        .iter()
        .zip(fields)
        .enumerate()
        .map(|(index, (column, field))| {
            let raw = (!field.is_null).then_some(field.text.as_str());
            let column_type = column.column_type();
            decode_cell(&column_type, raw)
                .map_err(|err| err.at_column(index, &column.name, column_type))
        })
        .collect()
}

fn check_shape(columns: &[ColumnInfo], cells: usize) -> Result<(), DecodeError> {
    if columns.len() != cells {
        return Err(DecodeError::RowShapeMismatch {
            columns: columns.len(),
            cells,
        });
    }
    Ok(())
}
