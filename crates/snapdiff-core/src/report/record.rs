//! Comma-delimited comparison records.

use std::str::FromStr;

/// One origin/target pair to compare.
///
/// Fields are split on every comma with no quoting or escaping, so a URL that
/// contains a comma yields the wrong field count and the record is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonRecord {
    pub origin_link: String,
    pub origin_redirect: String,
    pub origin_shot_id: String,
    pub target_link: String,
    pub target_redirect: String,
    pub target_shot_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("expected 6 comma-separated fields, found {found}")]
    FieldCount { found: usize },
}

impl FromStr for ComparisonRecord {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        let &[origin_link, origin_redirect, origin_shot_id, target_link, target_redirect, target_shot_id] =
            fields.as_slice()
        else {
            return Err(RecordError::FieldCount { found: fields.len() });
        };
        Ok(ComparisonRecord {
            origin_link: origin_link.to_string(),
            origin_redirect: origin_redirect.to_string(),
            origin_shot_id: origin_shot_id.to_string(),
            target_link: target_link.to_string(),
            target_redirect: target_redirect.to_string(),
            target_shot_id: target_shot_id.to_string(),
        })
    }
}
