use crate::dto::time_series::*;
use crate::enums::render_outcome::*;
use crate::model::graph::graph_spec::*;

pub trait ChartService {
    #[doc = r#"
        Render one graph to the configured output directory
        # Arguments
        * `spec` - validated graph definition (size, fonts, labels, type)
        * `series` - normalized (timestamp, value) data for the graph
        # Returns
        * `RenderOutcome::Saved` with the output path, or `NoData` for an
          empty series (no file written); drawing or write failures are errors
    "#]
    fn render_graph(&self, spec: &GraphSpec, series: &TimeSeries) -> anyhow::Result<RenderOutcome>;
}
