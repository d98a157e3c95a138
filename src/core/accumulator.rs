use super::info_field::InfoField;
use std::collections::{BTreeMap, BTreeSet};

/// Raw values gathered for one field of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValues {
    /// Visit order, duplicates kept
    List(Vec<String>),
    /// Deduplicated, sorted on normalization
    Set(BTreeSet<String>),
}

impl FieldValues {
    pub fn extend(&mut self, other: FieldValues) {
        match (self, other) {
            (FieldValues::List(values), FieldValues::List(more)) => values.extend(more),
            (FieldValues::List(values), FieldValues::Set(more)) => values.extend(more),
            (FieldValues::Set(values), FieldValues::List(more)) => values.extend(more),
            (FieldValues::Set(values), FieldValues::Set(more)) => values.extend(more),
        }
    }

    /// Values in output order: visit order for lists, sorted for sets.
    pub fn ordered(&self) -> Vec<&str> {
        match self {
            FieldValues::List(values) => values.iter().map(String::as_str).collect(),
            FieldValues::Set(values) => values.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            FieldValues::List(values) => values.len(),
            FieldValues::Set(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<String>> for FieldValues {
    fn from(values: Vec<String>) -> Self {
        FieldValues::List(values)
    }
}

impl From<BTreeSet<String>> for FieldValues {
    fn from(values: BTreeSet<String>) -> Self {
        FieldValues::Set(values)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowAnnotations {
    fields: Vec<(InfoField, FieldValues)>,
}

impl RowAnnotations {
    pub fn append(&mut self, field: InfoField, values: FieldValues) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == field) {
            Some((_, existing)) => existing.extend(values),
            None => self.fields.push((field, values)),
        }
    }

    pub fn get(&self, field: InfoField) -> Option<&FieldValues> {
        self.fields
            .iter()
            .find(|(existing, _)| *existing == field)
            .map(|(_, values)| values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (InfoField, &FieldValues)> {
        self.fields.iter().map(|(field, values)| (*field, values))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Row position -> field -> values. A row is present only once some
/// ClinVarSet matched it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationAccumulator {
    rows: BTreeMap<usize, RowAnnotations>,
}

impl AnnotationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, row: usize, field: InfoField, values: FieldValues) {
        self.rows.entry(row).or_default().append(field, values);
    }

    /// Registers a matched row even if no field yields a value for it.
    pub fn touch(&mut self, row: usize) {
        self.rows.entry(row).or_default();
    }

    pub fn row(&self, row: usize) -> Option<&RowAnnotations> {
        self.rows.get(&row)
    }

    pub fn rows(&self) -> impl Iterator<Item = (usize, &RowAnnotations)> {
        self.rows.iter().map(|(row, annotations)| (*row, annotations))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
