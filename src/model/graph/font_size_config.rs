use crate::common::*;

/* 폰트 기본값 (pt) */
pub const DEFAULT_TITLE_FONT_SIZE: f64 = 14.0;
pub const DEFAULT_AXIS_LABEL_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_TICK_LABEL_FONT_SIZE: f64 = 9.0;

#[doc = "그래프별 폰트 크기 설정 - 미지정 항목은 프로세스 공통 기본값을 쓴다."]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct FontSizeConfig {
    pub title: Option<f64>,
    pub axis_label: Option<f64>,
    pub tick_label: Option<f64>,
}
