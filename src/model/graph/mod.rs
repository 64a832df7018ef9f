pub mod font_size_config;
pub mod graph_config;
pub mod graph_list_config;
pub mod graph_spec;
pub mod size_config;
