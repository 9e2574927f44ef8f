use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::{Body, MotionErrors, Sample, Series, parse_line};

/// One series per body, kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    series: Vec<Series>,
}

impl SeriesTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `sample` to the series of `body`, creating it on first sight.
    pub fn add(&mut self, body: Body, sample: Sample) {
        match self.series.iter_mut().find(|s| s.body() == body) {
            Some(series) => series.push(sample),
            None => {
                let mut series = Series::new(body);
                series.push(sample);
                self.series.push(series);
            }
        }
    }

    /// Reads a motion file. The file is closed before this returns.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MotionErrors> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| MotionErrors::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        info!(
            "loaded {} samples for {} bodies from {:?}",
            table.sample_count(),
            table.len(),
            path
        );
        Ok(table)
    }

    /// Parses every line of `reader`, stopping at the first bad one.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, MotionErrors> {
        let mut table = Self::new();
        for (index, line) in reader.lines().enumerate() {
            let number = index + 1;
            let line = line.map_err(|source| MotionErrors::Read {
                line: number,
                source,
            })?;
            let (body, sample) = parse_line(&line).map_err(|source| MotionErrors::Line {
                line: number,
                source,
            })?;
            table.add(body, sample);
        }
        for series in &table.series {
            debug!("{}: {} samples", series.body(), series.len());
        }
        Ok(table)
    }

    pub fn get(&self, body: Body) -> Option<&Series> {
        self.series.iter().find(|s| s.body() == body)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn sample_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

impl<'a> IntoIterator for &'a SeriesTable {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
