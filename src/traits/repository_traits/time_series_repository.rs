use crate::dto::raw_row::*;

pub trait TimeSeriesRepository {
    #[doc = r#"
        Execute an opaque query string against the time-series source.
        # Arguments
        * `query` - query text, passed through verbatim
        # Returns
        * ordered rows of (raw timestamp, value); row order is assumed
          chronological but is not guaranteed by the source
    "#]
    fn query_rows(&self, query: &str) -> anyhow::Result<Vec<RawRow>>;
}
