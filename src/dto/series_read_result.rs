use crate::dto::time_series::*;

#[doc = r#"
    Outcome of one series read.

    `Data` with an empty series means the query legitimately returned no rows;
    `Failed` means the query source could not be reached or its response could
    not be understood. The two must stay distinguishable - the batch treats
    "no data" as benign and "failed" as a per-graph error, but neither aborts
    the remaining graphs.
"#]
#[derive(Debug, Clone)]
pub enum SeriesReadResult {
    Data(TimeSeries),
    Failed(String),
}
