use crate::common::*;

#[doc = r#"
    Ordered (timestamp, value) data retrieved for one graph.

    The two vectors are parallel and of equal length; every timestamp carries
    the single target timezone the series was normalized to, so a series with
    mixed zones is not representable.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct TimeSeries {
    pub timestamps: Vec<DateTime<Tz>>,
    pub values: Vec<f64>,
}

impl TimeSeries {
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
