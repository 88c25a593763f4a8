use gpaq_model::{
    ActivityBlock, Batch, COLUMN_SPECS, DERIVED_COLUMNS, EXPECTED_COLUMNS, FieldKind, MetMinutes,
    Record, Table, column_spec,
};

#[test]
fn expected_columns_start_with_identifier() {
    assert_eq!(EXPECTED_COLUMNS.len(), 23);
    assert_eq!(EXPECTED_COLUMNS[0], "ID");
    assert_eq!(EXPECTED_COLUMNS[22], "P16b");
    assert_eq!(COLUMN_SPECS.len(), 22);
}

#[test]
fn every_gated_block_has_four_columns() {
    for block in ActivityBlock::GATED {
        assert!(block.gate_column().is_some());
        assert_eq!(block.dependent_columns().len(), 3);
    }
    assert_eq!(ActivityBlock::Sedentary.dependent_columns(), vec!["P16a", "P16b"]);
}

#[test]
fn gate_columns_have_no_numeric_range() {
    let gates: Vec<_> = COLUMN_SPECS
        .iter()
        .filter(|spec| spec.kind == FieldKind::Gate)
        .collect();
    assert_eq!(gates.len(), 5);
    assert!(gates.iter().all(|spec| spec.range().is_none()));
    assert!(column_spec("ID").is_none());
}

#[test]
fn derived_values_align_with_columns() {
    let metrics = MetMinutes {
        vigorous_work: 1.0,
        moderate_work: 2.0,
        travel: 3.0,
        vigorous_leisure: 4.0,
        moderate_leisure: 5.0,
        sedentary: 6.0,
        work: 7.0,
        leisure: 8.0,
        vigorous: 9.0,
        moderate: 10.0,
        moderate_to_vigorous: 11.0,
    };
    let values = metrics.values();
    assert_eq!(values.len(), DERIVED_COLUMNS.len());
    assert_eq!(values[2], 3.0);
    assert_eq!(values[10], 11.0);
}

#[test]
fn table_metrics_are_all_or_nothing() {
    let mut table = Table::new("a.csv", vec![Record::new("1"), Record::new("2")]);
    assert!(!table.has_metrics());

    table.records[0].metrics = Some(MetMinutes::default());
    assert!(!table.has_metrics());

    table.records[1].metrics = Some(MetMinutes::default());
    assert!(table.has_metrics());

    assert!(!Table::new("empty.csv", Vec::new()).has_metrics());
}

#[test]
fn batch_counts_duplicate_names() {
    let batch: Batch = vec![
        Table::new("a.csv", vec![Record::new("1")]),
        Table::new("b.csv", vec![Record::new("2"), Record::new("3")]),
        Table::new("a.csv", vec![Record::new("4")]),
    ]
    .into_iter()
    .collect();

    let counts = batch.name_counts();
    assert_eq!(counts.get("a.csv"), Some(&2));
    assert_eq!(counts.get("b.csv"), Some(&1));
    assert_eq!(batch.record_count(), 4);
    assert_eq!(batch.get("b.csv").map(Table::len), Some(2));
}
