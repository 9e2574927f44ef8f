use crate::Body;

/// One (x, y) position parsed from a single input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// All samples of one body, in input order.
///
/// x and y are stored as separate columns so they can be handed to a plot as
/// is. They only grow together through [`Series::push`].
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    body: Body,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.x.push(sample.x);
        self.y.push(sample.y);
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Axis aligned box around a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    /// Returns `None` if no sample has two finite coordinates.
    pub fn from_samples(samples: impl IntoIterator<Item = Sample>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for sample in samples {
            if !sample.x.is_finite() || !sample.y.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => Bounds {
                    xmin: sample.x,
                    xmax: sample.x,
                    ymin: sample.y,
                    ymax: sample.y,
                },
                Some(b) => Bounds {
                    xmin: b.xmin.min(sample.x),
                    xmax: b.xmax.max(sample.x),
                    ymin: b.ymin.min(sample.y),
                    ymax: b.ymax.max(sample.y),
                },
            });
        }
        bounds
    }

    /// Widens each axis by `fraction` of its span on both sides.
    ///
    /// A zero span (single point, or all points on a line) is widened by
    /// half its magnitude, or by 1.0 around zero, so the result always has
    /// a usable range.
    pub fn padded(&self, fraction: f64) -> Bounds {
        let (xmin, xmax) = pad(self.xmin, self.xmax, fraction);
        let (ymin, ymax) = pad(self.ymin, self.ymax, fraction);
        Bounds {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }
}

fn pad(min: f64, max: f64, fraction: f64) -> (f64, f64) {
    let span = max - min;
    if span > 0.0 {
        let margin = span * fraction;
        (min - margin, max + margin)
    } else {
        let margin = if min == 0.0 { 1.0 } else { min.abs() * 0.5 };
        (min - margin, max + margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use utilities::{assert_equal, assert_equal_slice};

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut series = Series::new(Body::Earth);
        assert!(series.is_empty());
        series.push(Sample::new(1.0, 2.0));
        series.push(Sample::new(3.0, 4.0));

        assert_eq!(series.len(), 2);
        assert_eq!(series.x().len(), series.y().len());
        assert_equal_slice(series.x(), &[1.0, 3.0]);
        assert_equal_slice(series.y(), &[2.0, 4.0]);
    }

    #[test]
    fn test_bounds_skip_non_finite() {
        let bounds = Bounds::from_samples([
            Sample::new(1.0, -2.0),
            Sample::new(f64::NAN, 100.0),
            Sample::new(-3.0, 5.0),
            Sample::new(0.0, f64::INFINITY),
        ])
        .unwrap();

        assert_equal(bounds.xmin, -3.0);
        assert_equal(bounds.xmax, 1.0);
        assert_equal(bounds.ymin, -2.0);
        assert_equal(bounds.ymax, 5.0);
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_samples(Vec::<Sample>::new()).is_none());
        assert!(Bounds::from_samples([Sample::new(f64::NAN, 0.0)]).is_none());
    }

    #[test]
    fn test_padded() {
        let bounds = Bounds {
            xmin: 0.0,
            xmax: 10.0,
            ymin: -1.0,
            ymax: 1.0,
        }
        .padded(0.05);

        assert_equal(bounds.xmin, -0.5);
        assert_equal(bounds.xmax, 10.5);
        assert_equal(bounds.ymin, -1.1);
        assert_equal(bounds.ymax, 1.1);
    }

    #[test]
    fn test_padded_degenerate() {
        let single = Bounds::from_samples([Sample::new(4.0, 0.0)])
            .unwrap()
            .padded(0.05);

        assert_equal(single.xmin, 2.0);
        assert_equal(single.xmax, 6.0);
        assert_equal(single.ymin, -1.0);
        assert_equal(single.ymax, 1.0);
    }
}
