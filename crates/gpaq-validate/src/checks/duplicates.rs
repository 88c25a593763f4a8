//! Duplicate table names.

use gpaq_model::Batch;

use crate::issue::Issue;
use crate::report::Finding;

/// Flag every table whose name occurs more than once. Names compare exactly.
pub fn check(batch: &Batch) -> Vec<Finding> {
    let counts = batch.name_counts();
    batch
        .iter()
        .filter_map(|table| {
            let occurrences = counts.get(table.name.as_str()).copied().unwrap_or(0);
            (occurrences > 1).then(|| {
                Finding::new(
                    table.name.clone(),
                    Issue::DuplicateTableName { occurrences },
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpaq_model::Table;

    #[test]
    fn test_each_copy_is_reported() {
        let batch: Batch = ["a.csv", "b.csv", "a.csv"]
            .into_iter()
            .map(|name| Table::new(name, Vec::new()))
            .collect();

        let findings = check(&batch);

        assert_eq!(findings.len(), 2);
        assert!(findings.iter().all(|f| f.table == "a.csv"));
    }

    #[test]
    fn test_case_sensitive() {
        let batch: Batch = ["a.csv", "A.csv"]
            .into_iter()
            .map(|name| Table::new(name, Vec::new()))
            .collect();
        assert!(check(&batch).is_empty());
    }
}
