pub mod batch_summary;
pub mod raw_row;
pub mod series_read_result;
pub mod time_series;
