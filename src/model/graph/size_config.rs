use crate::common::*;

#[doc = "출력 이미지의 디바이스 픽셀 크기"]
#[derive(Debug, Clone, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct SizeConfig {
    pub width: u32,
    pub height: u32,
}
