use crate::common::*;

use crate::enums::output_format::*;

#[doc = "이미지 출력 설정 정보 - timezone 미지정시 UTC 로 동작한다."]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct OutputConfig {
    pub directory: String,
    pub format: OutputFormat,
    pub dpi: u32,
    pub timezone: Option<String>,
}
