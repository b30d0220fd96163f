//! Columnar record set backed by a polars [`DataFrame`].

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, BooleanChunked, Column, DataFrame};

use crate::error::{ModelError, Result};
use crate::field::{Field, TableKind};
use crate::values::{Numeric, any_to_numeric, any_to_text};

/// A loaded WDPA table.
///
/// Checks read whole columns through the typed accessors here; they never
/// index the frame directly, so a missing column always surfaces as
/// [`ModelError::MissingColumn`].
#[derive(Debug, Clone)]
pub struct RecordSet {
    kind: TableKind,
    frame: DataFrame,
}

impl RecordSet {
    pub fn new(kind: TableKind, frame: DataFrame) -> Self {
        Self { kind, frame }
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn into_frame(self) -> DataFrame {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.frame.get_column_index(name).is_some()
    }

    /// Expected columns for this table kind that the frame lacks.
    pub fn missing_columns(&self) -> Vec<&'static str> {
        self.kind
            .expected_columns()
            .into_iter()
            .filter(|name| !self.has_column(name))
            .collect()
    }

    fn column(&self, name: &str) -> Result<&Column> {
        self.frame
            .column(name)
            .map_err(|_| ModelError::MissingColumn {
                column: name.to_string(),
                table: self.kind,
            })
    }

    /// Every cell of `field` rendered as text.
    pub fn text(&self, field: Field) -> Result<Vec<Option<String>>> {
        self.text_column(field.column())
    }

    pub fn text_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let column = self.column(name)?;
        Ok((0..column.len())
            .map(|idx| any_to_text(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect())
    }

    /// Every cell of `field` as a number; text that is not numeric is an error.
    pub fn numeric(&self, field: Field) -> Result<Vec<Option<f64>>> {
        let column = self.column(field.column())?;
        (0..column.len())
            .map(
                |idx| match any_to_numeric(column.get(idx).unwrap_or(AnyValue::Null)) {
                    Numeric::Value(v) => Ok(Some(v)),
                    Numeric::Missing => Ok(None),
                    Numeric::Invalid(value) => Err(ModelError::NotNumeric {
                        column: field.column().to_string(),
                        row: idx,
                        value,
                    }),
                },
            )
            .collect()
    }

    /// Identifiers of every row, in row order. Null identifiers render as "".
    pub fn identifiers(&self) -> Result<Vec<String>> {
        self.identifiers_of(self.kind.identifier_field())
    }

    pub fn identifiers_of(&self, field: Field) -> Result<Vec<String>> {
        Ok(self
            .text(field)?
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }

    /// Rows whose `field` value is one of `ids`, in original row order.
    pub fn find_records(&self, field: Field, ids: &BTreeSet<String>) -> Result<DataFrame> {
        let values = self.text(field)?;
        let mask: BooleanChunked = values
            .iter()
            .map(|value| Some(value.as_ref().is_some_and(|v| ids.contains(v))))
            .collect();
        Ok(self.frame.filter(&mask)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSet {
        let frame = DataFrame::new(vec![
            Column::new("WDPA_PID".into(), ["1", "2", "3"]),
            Column::new("REP_AREA".into(), [Some(1.5), None, Some(3.0)]),
            Column::new("NAME".into(), ["a", "b", "c"]),
        ])
        .unwrap();
        RecordSet::new(TableKind::Polygon, frame)
    }

    #[test]
    fn numeric_reads_nulls_as_missing() {
        let records = sample();
        assert_eq!(
            records.numeric(Field::RepArea).unwrap(),
            vec![Some(1.5), None, Some(3.0)]
        );
    }

    #[test]
    fn absent_column_is_reported_by_name() {
        let records = sample();
        let err = records.text(Field::Iso3).unwrap_err();
        assert!(matches!(err, ModelError::MissingColumn { ref column, .. } if column == "ISO3"));
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        let mut frame = sample().into_frame();
        frame
            .with_column(Column::new("REP_AREA".into(), ["1", "x", ""]))
            .unwrap();
        let records = RecordSet::new(TableKind::Polygon, frame);
        let err = records.numeric(Field::RepArea).unwrap_err();
        assert!(matches!(err, ModelError::NotNumeric { row: 1, .. }));
    }

    #[test]
    fn find_records_keeps_row_order() {
        let records = sample();
        let ids: BTreeSet<String> = ["3", "1"].iter().map(|s| (*s).to_string()).collect();
        let found = records.find_records(Field::RecordId, &ids).unwrap();
        let names = found.column("NAME").unwrap();
        assert_eq!(found.height(), 2);
        assert_eq!(names.get(0).unwrap(), AnyValue::String("a"));
        assert_eq!(names.get(1).unwrap(), AnyValue::String("c"));
    }

    #[test]
    fn missing_columns_lists_expected_columns_not_present() {
        let missing = sample().missing_columns();
        assert!(missing.contains(&"ISO3"));
        assert!(!missing.contains(&"WDPA_PID"));
    }
}
