pub mod time_series_repository;
