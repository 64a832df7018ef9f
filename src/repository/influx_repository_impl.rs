use crate::common::*;

use std::time::Duration;

use crate::dto::raw_row::*;

use crate::model::configs::influx_server_config::*;

use crate::traits::repository_traits::time_series_repository::*;

#[derive(Debug, Clone)]
pub struct InfluxRepositoryImpl {
    client: Client,
    query_url: String,
    token: String,
}

impl InfluxRepositoryImpl {
    pub fn new(influx_config: &InfluxServerConfig) -> Result<Self, anyhow::Error> {
        let timeout_sec: u64 = influx_config.timeout_sec().unwrap_or(10);

        let client: Client = Client::builder()
            .timeout(Duration::new(timeout_sec, 0))
            .build()?;

        let query_url: String = format!(
            "{}/api/v2/query?org={}",
            influx_config.url().trim_end_matches('/'),
            encode(influx_config.org())
        );

        Ok(InfluxRepositoryImpl {
            client,
            query_url,
            token: influx_config.token().to_string(),
        })
    }

    #[doc = r#"
        InfluxDB 의 annotated CSV 응답을 RawRow 목록으로 파싱하는 함수.

        1. `#` 로 시작하는 annotation 행은 건너뛴다
        2. 헤더에서 `_time` / `_value` 컬럼 위치를 찾는다
        3. 테이블 경계마다 반복되는 헤더 행과 빈 행은 건너뛴다
        4. `_value` 를 f64 로 파싱하지 못하면 오류 반환

        # Arguments
        * `body` - HTTP 응답 본문 (annotated CSV)

        # Returns
        * `Vec<RawRow>` - (원본 타임스탬프 문자열, 값) 행 목록
        * `anyhow::Error` - 필수 컬럼 누락, 값 파싱 실패 시
    "#]
    fn parse_csv_rows(body: &str) -> Result<Vec<RawRow>, anyhow::Error> {
        /* 결과가 없는 쿼리는 본문이 비어있다 */
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(body.as_bytes());

        let headers = reader.headers()?.clone();

        let time_idx: usize = headers.iter().position(|h| h == "_time").ok_or_else(|| {
            anyhow!("[InfluxRepositoryImpl->parse_csv_rows] response has no '_time' column")
        })?;
        let value_idx: usize = headers.iter().position(|h| h == "_value").ok_or_else(|| {
            anyhow!("[InfluxRepositoryImpl->parse_csv_rows] response has no '_value' column")
        })?;

        let mut rows: Vec<RawRow> = Vec::new();

        for record in reader.records() {
            let record = record?;

            let time_field: &str = match record.get(time_idx) {
                Some(value) if !value.is_empty() => value,
                _ => continue,
            };

            /* 테이블 경계마다 헤더 행이 반복된다 */
            if time_field == "_time" {
                continue;
            }

            let value_field: &str = record.get(value_idx).ok_or_else(|| {
                anyhow!(
                    "[InfluxRepositoryImpl->parse_csv_rows] row with '_time' {} has no '_value'",
                    time_field
                )
            })?;

            let value: f64 = value_field.parse::<f64>().map_err(|e| {
                anyhow!(
                    "[InfluxRepositoryImpl->parse_csv_rows] invalid '_value' '{}': {:?}",
                    value_field,
                    e
                )
            })?;

            rows.push(RawRow::new(time_field.to_string(), value));
        }

        Ok(rows)
    }
}

impl TimeSeriesRepository for InfluxRepositoryImpl {
    #[doc = "Function that EXECUTES a Flux query - the query text is passed through verbatim"]
    fn query_rows(&self, query: &str) -> anyhow::Result<Vec<RawRow>> {
        let response = self
            .client
            .post(&self.query_url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/csv")
            .header("Content-Type", "application/vnd.flux")
            .body(query.to_string())
            .send()?;

        if response.status().is_success() {
            let body: String = response.text()?;
            Self::parse_csv_rows(&body)
        } else {
            let status = response.status();
            let error_body: String = response.text().unwrap_or_default();

            /* InfluxDB 는 오류를 {"code", "message"} JSON 으로 돌려준다 */
            let message: String = serde_json::from_str::<Value>(&error_body)
                .ok()
                .and_then(|v| v["message"].as_str().map(|m| m.to_string()))
                .unwrap_or(error_body);

            Err(anyhow!(
                "[InfluxDB Error][query_rows()] response status is failed: {} {}",
                status,
                message
            ))
        }
    }
}
