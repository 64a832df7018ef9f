use crate::common::*;

use crate::model::graph::graph_config::*;

#[doc = "렌더링 대상 그래프 목록 - GRAPH_LIST_PATH 파일에서 읽어온다."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct GraphListConfig {
    pub graph: Vec<GraphConfig>,
}
