pub mod chart_service_impl;
pub mod series_query_service_impl;
