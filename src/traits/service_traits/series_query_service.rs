use crate::dto::series_read_result::*;

pub trait SeriesQueryService {
    #[doc = r#"
        Fetch one series and normalize every timestamp to the target timezone
        # Arguments
        * `query` - query text for the external source, passed through verbatim
        # Returns
        * `SeriesReadResult` - never panics and never propagates a source error;
          a failed query becomes `Failed(reason)` so the batch can continue
    "#]
    fn read_series(&self, query: &str) -> SeriesReadResult;
}
