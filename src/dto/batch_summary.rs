use crate::common::*;

/* 배치 1회 실행 결과 집계 */
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct BatchSummary {
    pub requested: usize,
    pub rendered: usize,
    pub no_data: usize,
    pub query_failed: usize,
    pub skipped_invalid: usize,
    pub render_failed: usize,
}
