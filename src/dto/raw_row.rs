use crate::common::*;

/* 쿼리 소스가 돌려준 원본 행 - timestamp 는 타임존 정보가 없을 수도 있다. */
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct RawRow {
    pub timestamp: String,
    pub value: f64,
}
