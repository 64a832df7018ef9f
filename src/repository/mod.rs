pub mod influx_repository_impl;
