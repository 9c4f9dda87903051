// File: crates/chart-core/tests/dataset.rs
// Purpose: CSV loading, numeric coercion and load-time failures.

use chart_core::{ChartError, Dataset, Metric};

const HEADER: &str = "Year,Current_Franchise,TC_Total_WAR,Career_Total_WAR\n";

fn load(body: &str) -> Result<Dataset, ChartError> {
    Dataset::from_reader(format!("{HEADER}{body}").as_bytes())
}

#[test]
fn parses_numeric_fields_once() {
    let ds = load("2010,Tampa Bay Rays,2.0,5.0\n2011, Boston Red Sox ,4,1.5\n").expect("load");
    assert_eq!(ds.len(), 2);

    let r = &ds.records()[1];
    assert_eq!(r.label, "Boston Red Sox");
    assert_eq!(r.year, 2011);
    assert_eq!(r.value(Metric::TcTotalWar), 4.0);
    assert_eq!(r.value(Metric::CareerTotalWar), 1.5);
}

#[test]
fn career_is_read_from_its_own_column() {
    let ds = load("2010,A,2.0,5.0\n").expect("load");
    assert_eq!(ds.records()[0].tc_total_war, 2.0);
    assert_eq!(ds.records()[0].career_total_war, 5.0);
}

#[test]
fn name_column_is_accepted_as_label() {
    let csv = "Name,Year,TC_Total_WAR,Career_Total_WAR\nJane Doe,2012,1.1,3.3\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("load");
    assert_eq!(ds.records()[0].label, "Jane Doe");
}

#[test]
fn franchise_wins_over_name_when_both_exist() {
    let csv = "Year,Name,Current_Franchise,TC_Total_WAR,Career_Total_WAR\n2012,Jane Doe,Rays,1.1,3.3\n";
    let ds = Dataset::from_reader(csv.as_bytes()).expect("load");
    assert_eq!(ds.records()[0].label, "Rays");
}

#[test]
fn extents_follow_the_metric() {
    let ds = load("2010,X,2.0,5.0\n2011,Y,4.0,1.0\n").expect("load");
    assert_eq!(ds.extent(Metric::TcTotalWar), (2.0, 4.0));
    assert_eq!(ds.extent(Metric::CareerTotalWar), (1.0, 5.0));
    assert_eq!(ds.year_extent(), (2010.0, 2011.0));
}

#[test]
fn non_numeric_value_is_a_load_error() {
    let err = load("2010,X,2.0,5.0\n2011,Y,abc,1.0\n").unwrap_err();
    match err {
        ChartError::InvalidNumber { row, column, value } => {
            assert_eq!(row, 2);
            assert_eq!(column, "TC_Total_WAR");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_and_nan_values_are_rejected() {
    assert!(matches!(load("2010,X,,5.0\n"), Err(ChartError::InvalidNumber { .. })));
    assert!(matches!(load("2010,X,2.0,NaN\n"), Err(ChartError::InvalidNumber { .. })));
    assert!(matches!(load("20x0,X,2.0,1.0\n"), Err(ChartError::InvalidNumber { column, .. }) if column == "Year"));
}

#[test]
fn missing_column_is_reported() {
    let csv = "Year,Current_Franchise,TC_Total_WAR\n2010,X,1.0\n";
    let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn(c) if c == "Career_Total_WAR"));

    let csv = "Year,TC_Total_WAR,Career_Total_WAR\n2010,1.0,2.0\n";
    let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, ChartError::MissingColumn(c) if c.contains("Current_Franchise")));
}

#[test]
fn empty_dataset_fails_fast() {
    assert!(matches!(load(""), Err(ChartError::EmptyDataset)));
    assert!(matches!(Dataset::new(Vec::new()), Err(ChartError::EmptyDataset)));
}

#[test]
fn loads_from_path() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let path = dir.join("dataset_loads_from_path.csv");
    std::fs::write(&path, format!("{HEADER}2010,X,2.0,5.0\n")).expect("write csv");
    let ds = Dataset::from_path(&path).expect("load");
    assert_eq!(ds.len(), 1);

    let missing = dir.join("no_such_file.csv");
    assert!(matches!(Dataset::from_path(missing), Err(ChartError::Csv(_))));
}
