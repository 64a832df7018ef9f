use crate::common::*;

use crate::enums::graph_type::*;

#[doc = r#"
    Fully resolved definition of one graph, produced by `GraphConfig::validate`.

    Required fields are guaranteed present, font sizes carry their defaults,
    and the axis labels are `Some` only when configured non-empty.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct GraphSpec {
    pub name: String,
    pub title: String,
    pub query: String,
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub title_font_size: f64,
    pub axis_label_font_size: f64,
    pub tick_label_font_size: f64,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub graph_type: GraphType,
}
