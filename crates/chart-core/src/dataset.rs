// File: crates/chart-core/src/dataset.rs
// Summary: Typed WAR records and the CSV loader that produces them.

use std::io::Read;
use std::path::Path;

use crate::error::{ChartError, Result};

/// One of the two metrics that can drive the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    TcTotalWar,
    CareerTotalWar,
}

impl Metric {
    pub const ALL: [Metric; 2] = [Metric::TcTotalWar, Metric::CareerTotalWar];

    /// Column name in the CSV, also the token carried by the clickable label.
    pub const fn token(self) -> &'static str {
        match self {
            Metric::TcTotalWar => "TC_Total_WAR",
            Metric::CareerTotalWar => "Career_Total_WAR",
        }
    }

    /// Caption shown in front of the value in a tooltip.
    pub const fn caption(self) -> &'static str {
        match self {
            Metric::TcTotalWar => "Team Controlled WAR:",
            Metric::CareerTotalWar => "Career WAR:",
        }
    }

    /// Text of the clickable axis label.
    pub const fn title(self) -> &'static str {
        match self {
            Metric::TcTotalWar => "Team Controlled WAR",
            Metric::CareerTotalWar => "Career WAR",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.token() == token)
    }

    pub const fn other(self) -> Self {
        match self {
            Metric::TcTotalWar => Metric::CareerTotalWar,
            Metric::CareerTotalWar => Metric::TcTotalWar,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// One row of the dataset. Numeric fields are parsed once, at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub year: i32,
    pub tc_total_war: f64,
    pub career_total_war: f64,
}

impl Record {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::TcTotalWar => self.tc_total_war,
            Metric::CareerTotalWar => self.career_total_war,
        }
    }
}

/// Accepted names for the identifying label column, in lookup order.
pub const LABEL_COLUMNS: [&str; 2] = ["Current_Franchise", "Name"];
pub const YEAR_COLUMN: &str = "Year";

/// Ordered, non-empty, read-only set of records for one session.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Contract: `records` is non-empty.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { records })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading dataset from {}", path.display());
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
        Self::from_csv(rdr)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
        Self::from_csv(rdr)
    }

    fn from_csv<R: Read>(mut rdr: csv::Reader<R>) -> Result<Self> {
        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();
        let idx = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| idx(name).ok_or_else(|| ChartError::MissingColumn(name.to_string()));

        let i_label = LABEL_COLUMNS
            .iter()
            .find_map(|name| idx(*name))
            .ok_or_else(|| ChartError::MissingColumn(LABEL_COLUMNS.join("|")))?;
        let i_year = require(YEAR_COLUMN)?;
        let i_tc = require(Metric::TcTotalWar.token())?;
        let i_career = require(Metric::CareerTotalWar.token())?;

        let mut records = Vec::new();
        for (n, rec) in rdr.records().enumerate() {
            let rec = rec?;
            let row = n + 1;
            let cell = |i: usize| rec.get(i).unwrap_or("").trim();

            let year_raw = cell(i_year);
            let year = year_raw.parse::<i32>().map_err(|_| ChartError::InvalidNumber {
                row,
                column: YEAR_COLUMN.to_string(),
                value: year_raw.to_string(),
            })?;
            records.push(Record {
                label: cell(i_label).to_string(),
                year,
                tc_total_war: parse_metric(cell(i_tc), row, Metric::TcTotalWar)?,
                career_total_war: parse_metric(cell(i_career), row, Metric::CareerTotalWar)?,
            });
        }

        let ds = Self::new(records)?;
        log::info!("loaded {} records", ds.len());
        Ok(ds)
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Record> { self.records.iter() }

    /// `(min, max)` of `metric` over all records.
    pub fn extent(&self, metric: Metric) -> (f64, f64) {
        minmax(self.records.iter().map(|r| r.value(metric)))
    }

    pub fn year_extent(&self) -> (f64, f64) {
        minmax(self.records.iter().map(|r| r.year as f64))
    }
}

fn parse_metric(raw: &str, row: usize, metric: Metric) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ChartError::InvalidNumber {
            row,
            column: metric.token().to_string(),
            value: raw.to_string(),
        }),
    }
}

fn minmax(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}
