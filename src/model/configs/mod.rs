pub mod influx_server_config;
pub mod output_config;
pub mod total_config;
