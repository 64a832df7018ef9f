use crate::common::*;

#[doc = "InfluxDB config 정보"]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct InfluxServerConfig {
    pub url: String,
    pub token: String,
    pub org: String,
    pub timeout_sec: Option<u64>,
}
