use crate::common::*;

/* output.timezone 미지정시 쓰는 기본 타임존 */
pub const DEFAULT_TIMEZONE: Tz = Tz::UTC;

#[doc = r#"
    쿼리 소스가 돌려준 원본 타임스탬프 문자열을 UTC 시각으로 파싱하는 함수.

    1. RFC 3339 형식(오프셋 포함)이면 해당 오프셋 기준으로 해석 후 UTC 로 변환
    2. 타임존 정보가 없는 naive 형식이면 UTC 로 간주한다

    # Arguments
    * `raw` - 원본 타임스탬프 문자열

    # Returns
    * `Result<DateTime<Utc>, anyhow::Error>` - 인식할 수 없는 형식이면 오류
"#]
pub fn parse_timestamp_utc(raw: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(fixed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(fixed.with_timezone(&Utc));
    }

    let naive: NaiveDateTime = raw
        .parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map_err(|e| {
            anyhow!(
                "[parse_timestamp_utc] unrecognized timestamp '{}': {:?}",
                raw,
                e
            )
        })?;

    Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[doc = "UTC 시각을 대상 타임존의 시각으로 변환해주는 함수"]
pub fn convert_zone_from_utc(utc_time: DateTime<Utc>, timezone: Tz) -> DateTime<Tz> {
    utc_time.with_timezone(&timezone)
}

#[doc = r#"
    설정의 타임존 이름을 IANA 존으로 해석하는 함수.

    # Arguments
    * `name` - 설정값 (예: "Europe/Helsinki"), 미지정시 None

    # Returns
    * `Result<Tz, anyhow::Error>` - 미지정시 기본 타임존, 알 수 없는 이름이면 오류
"#]
pub fn resolve_timezone(name: Option<&str>) -> anyhow::Result<Tz> {
    match name {
        Some(zone_name) => zone_name.parse::<Tz>().map_err(|e| {
            anyhow!("[resolve_timezone] unknown timezone '{}': {}", zone_name, e)
        }),
        None => Ok(DEFAULT_TIMEZONE),
    }
}
