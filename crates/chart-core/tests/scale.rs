// File: crates/chart-core/tests/scale.rs
// Purpose: Scale builder padding, orientation, degenerate domains and ticks.

use chart_core::axis::ticks_for;
use chart_core::{build_scale, build_year_scale, BandScale, ChartError, Dataset, LinearScale, Metric, Padding, Record};

fn rec(label: &str, year: i32, tc: f64, career: f64) -> Record {
    Record { label: label.to_string(), year, tc_total_war: tc, career_total_war: career }
}

fn two_records() -> Dataset {
    Dataset::new(vec![rec("X", 2010, 2.0, 5.0), rec("Y", 2011, 4.0, 1.0)]).expect("dataset")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn padded_domain_maps_to_range_ends() {
    let ds = two_records();
    let s = build_scale(&ds, Metric::TcTotalWar, (420.0, 20.0), Padding::default()).expect("scale");
    let (lo, hi) = s.domain();
    assert!(approx(lo, 1.6) && approx(hi, 4.8), "domain {:?}", s.domain());
    assert!(approx(s.map(lo), 420.0));
    assert!(approx(s.map(hi), 20.0));

    let s = build_scale(&ds, Metric::CareerTotalWar, (420.0, 20.0), Padding::default()).expect("scale");
    let (lo, hi) = s.domain();
    assert!(approx(lo, 0.8) && approx(hi, 6.0), "domain {:?}", s.domain());
}

#[test]
fn vertical_scale_is_monotonic_and_inverted() {
    let ds = Dataset::new(vec![
        rec("a", 2001, -3.0, 1.0),
        rec("b", 2002, 0.5, 2.0),
        rec("c", 2003, 7.25, 3.0),
    ])
    .expect("dataset");
    let s = build_scale(&ds, Metric::TcTotalWar, (400.0, 0.0), Padding::default()).expect("scale");
    let mut prev = f64::INFINITY;
    for i in 0..=100 {
        let (lo, hi) = s.domain();
        let v = lo + (hi - lo) * i as f64 / 100.0;
        let px = s.map(v);
        assert!(px < prev, "not strictly decreasing at {v}");
        prev = px;
    }
}

#[test]
fn padding_widens_negative_bounds_away_from_zero() {
    let p = Padding::default();
    let (lo, hi) = p.apply((-5.0, -1.0));
    assert!(approx(lo, -6.0));
    assert!(approx(hi, -0.8));
    assert_eq!(Padding::NONE.apply((-5.0, -1.0)), (-5.0, -1.0));
}

#[test]
fn invert_undoes_map() {
    let s = LinearScale::new((0.8, 6.0), (420.0, 20.0));
    for v in [0.8, 1.0, 3.3, 6.0] {
        assert!(approx(s.invert(s.map(v)), v));
    }
}

#[test]
fn all_zero_metric_is_degenerate() {
    let ds = Dataset::new(vec![rec("a", 2001, 0.0, 1.0), rec("b", 2002, 0.0, 2.0)]).expect("dataset");
    let err = build_scale(&ds, Metric::TcTotalWar, (400.0, 0.0), Padding::default()).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { field } if field == "TC_Total_WAR"));
}

#[test]
fn equal_nonzero_values_are_widened_by_padding() {
    let ds = Dataset::new(vec![rec("a", 2001, 3.0, 1.0), rec("b", 2002, 3.0, 2.0)]).expect("dataset");
    let s = build_scale(&ds, Metric::TcTotalWar, (400.0, 0.0), Padding::default()).expect("scale");
    let (lo, hi) = s.domain();
    assert!(approx(lo, 2.4) && approx(hi, 3.6));
    assert!(s.map(3.0).is_finite());

    let err = build_scale(&ds, Metric::TcTotalWar, (400.0, 0.0), Padding::NONE).unwrap_err();
    assert!(matches!(err, ChartError::DegenerateDomain { .. }));
}

#[test]
fn single_year_is_clamped() {
    let ds = Dataset::new(vec![rec("a", 2015, 1.0, 1.0)]).expect("dataset");
    let s = build_year_scale(&ds, (100.0, 900.0)).expect("scale");
    assert_eq!(s.domain(), (2014.5, 2015.5));
    assert!(approx(s.map(2015.0), 500.0));
}

#[test]
fn ticks_use_nice_steps() {
    let s = LinearScale::new((1.6, 4.8), (420.0, 20.0));
    let ticks = ticks_for(&s, 10);
    let texts = ticks.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
    assert_eq!(texts, ["2.0", "2.5", "3.0", "3.5", "4.0", "4.5"]);
    assert!(ticks.iter().all(|t| t.pos <= 420.0 && t.pos >= 20.0));

    let years = LinearScale::new((2005.0, 2016.0), (0.0, 100.0));
    let texts = ticks_for(&years, 10).into_iter().map(|t| t.text).collect::<Vec<_>>();
    assert_eq!(texts.first().map(String::as_str), Some("2005"));
    assert_eq!(texts.last().map(String::as_str), Some("2016"));
}

#[test]
fn band_scale_splits_range() {
    let band = BandScale::new(2, (100.0, 920.0));
    assert!(approx(band.step(), 410.0));
    assert!(approx(band.bandwidth(), 369.0));
    assert!(approx(band.position(0), 120.5));
    assert!(approx(band.position(1), 530.5));

    let tight = BandScale::new(4, (0.0, 100.0)).with_padding(0.0);
    assert!(approx(tight.bandwidth(), 25.0));
    assert!(approx(tight.position(3), 75.0));
}
