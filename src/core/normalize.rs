use super::{
    accumulator::{AnnotationAccumulator, FieldValues, RowAnnotations},
    info_field::InfoField,
};
use crate::constants::{INFO_SEPARATOR, SEPARATOR_REPLACEMENTS, VALUE_SEPARATOR};
use std::collections::BTreeMap;

/// Applies the separator substitution table to one value.
pub fn replace_separators(value: &str) -> String {
    let mut replaced = String::with_capacity(value.len());
    for c in value.chars() {
        match SEPARATOR_REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => replaced.push_str(to),
            None => replaced.push(c),
        }
    }
    replaced
}

pub fn collapse_control_chars(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

/// Substitutes each value, joins with `|` and collapses control characters.
pub fn join_values(values: &FieldValues) -> String {
    let joined = values
        .ordered()
        .into_iter()
        .map(replace_separators)
        .collect::<Vec<_>>()
        .join(&VALUE_SEPARATOR.to_string());
    collapse_control_chars(&joined)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields {
    fields: Vec<(InfoField, String)>,
}

impl NormalizedFields {
    pub fn from_row(row: &RowAnnotations) -> Self {
        let fields = row
            .iter()
            .map(|(field, values)| (field, join_values(values)))
            .collect();
        NormalizedFields { fields }
    }

    pub fn value(&self, field: InfoField) -> &str {
        self.fields
            .iter()
            .find(|(existing, _)| *existing == field)
            .map_or("", |(_, value)| value.as_str())
    }

    /// `CLNSUBA=..;CLNREVSTATA=..;...`, every field present, in body order.
    pub fn to_info_string(&self) -> String {
        InfoField::BODY_ORDER
            .iter()
            .map(|field| format!("{}={}", field.id(), self.value(*field)))
            .collect::<Vec<_>>()
            .join(&INFO_SEPARATOR.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedAnnotations {
    rows: BTreeMap<usize, NormalizedFields>,
}

impl NormalizedAnnotations {
    pub fn get(&self, row: usize) -> Option<&NormalizedFields> {
        self.rows.get(&row)
    }

    /// Text appended to the row's INFO, `None` for unmatched rows.
    pub fn info_suffix(&self, row: usize) -> Option<String> {
        self.get(row).map(NormalizedFields::to_info_string)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<&AnnotationAccumulator> for NormalizedAnnotations {
    fn from(accumulator: &AnnotationAccumulator) -> Self {
        let rows = accumulator
            .rows()
            .map(|(row, annotations)| (row, NormalizedFields::from_row(annotations)))
            .collect();
        NormalizedAnnotations { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn list(values: &[&str]) -> FieldValues {
        FieldValues::List(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_replace_separators() {
        assert_eq!(replace_separators("a;b|c d\"e,f"), "a:b:c_de&f");
        assert_eq!(replace_separators("plain"), "plain");
    }

    #[test]
    fn test_collapse_control_chars() {
        assert_eq!(collapse_control_chars("foo\nbar\tbaz\rbiz"), "foo bar baz biz");
    }

    #[test]
    fn test_join_values() {
        assert_eq!(join_values(&list(&["1", "2", "3"])), "1|2|3");
        let set = FieldValues::Set(BTreeSet::from([
            "6".to_string(),
            "4".to_string(),
            "5".to_string(),
        ]));
        assert_eq!(join_values(&set), "4|5|6");
        assert_eq!(join_values(&list(&[])), "");
    }

    #[test]
    fn test_join_escapes_before_joining() {
        let values = list(&["Likely pathogenic", "a|b", "x\ny"]);
        assert_eq!(join_values(&values), "Likely_pathogenic|a:b|x y");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let set = FieldValues::Set(["b c", "a;b"].iter().map(|v| v.to_string()).collect());
        assert_eq!(join_values(&set), join_values(&set.clone()));
        assert_eq!(join_values(&set), "a:b|b_c");
    }

    #[test]
    fn test_info_string_lists_all_fields() {
        let mut accumulator = AnnotationAccumulator::new();
        accumulator.append(0, InfoField::Submitters, list(&["Lab A", "Lab B"]));
        accumulator.append(0, InfoField::Comment, list(&["see \"note\"; pending"]));
        let normalized = NormalizedAnnotations::from(&accumulator);

        let fields = normalized.get(0).unwrap();
        assert_eq!(fields.value(InfoField::Submitters), "Lab_A|Lab_B");
        assert_eq!(fields.value(InfoField::Origin), "");
        assert_eq!(
            normalized.info_suffix(0).unwrap(),
            "CLNSUBA=Lab_A|Lab_B;CLNREVSTATA=;CLNDATEA=;CLNDATESUBA=;CLNSIGA=;CLNORA=;CLNCOMA=see_note:_pending;CLNSCVA=;CLNDNA="
        );
        assert!(normalized.info_suffix(1).is_none());
        assert_eq!(normalized.len(), 1);
    }
}
