use crate::common::*;

use crate::dto::{raw_row::*, series_read_result::*, time_series::*};

use crate::traits::{
    repository_traits::time_series_repository::*, service_traits::series_query_service::*,
};

use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct SeriesQueryServiceImpl<R: TimeSeriesRepository> {
    influx_conn: Arc<R>,
    /* 설정에서 기동 시점에 한번 해석된 대상 타임존 */
    timezone: Tz,
}

impl<R: TimeSeriesRepository> SeriesQueryServiceImpl<R> {
    #[doc = r#"
        원본 행들을 대상 타임존의 평행한 (타임스탬프, 값) 수열로 정규화하는 함수.

        1. 타임존 정보가 없는 타임스탬프는 UTC 로 간주
        2. 모든 타임스탬프를 대상 타임존으로 변환
        3. 값은 변환 없이 그대로 통과시킨다

        # Arguments
        * `rows` - 쿼리 소스가 돌려준 원본 행 목록

        # Returns
        * `TimeSeries` - 동일 길이의 타임스탬프/값 수열
        * `anyhow::Error` - 타임스탬프 파싱 실패 시
    "#]
    fn normalize_rows(&self, rows: &[RawRow]) -> anyhow::Result<TimeSeries> {
        let mut timestamps: Vec<DateTime<Tz>> = Vec::with_capacity(rows.len());
        let mut values: Vec<f64> = Vec::with_capacity(rows.len());

        for row in rows {
            let utc_time: DateTime<Utc> = parse_timestamp_utc(row.timestamp())?;
            timestamps.push(convert_zone_from_utc(utc_time, self.timezone));
            values.push(*row.value());
        }

        Ok(TimeSeries::new(timestamps, values))
    }
}

impl<R: TimeSeriesRepository> SeriesQueryService for SeriesQueryServiceImpl<R> {
    #[doc = r#"
        쿼리 1건을 실행해 정규화된 시계열을 돌려주는 함수.

        쿼리 소스 오류는 배치 전체를 중단시키면 안 되므로 여기서 흡수한다.
        로그를 남기고 `Failed(reason)` 으로 변환해 호출자가 "데이터 없음"과
        "쿼리 실패"를 구분할 수 있게 한다.
    "#]
    fn read_series(&self, query: &str) -> SeriesReadResult {
        let series: anyhow::Result<TimeSeries> = self
            .influx_conn
            .query_rows(query)
            .and_then(|rows| self.normalize_rows(&rows));

        match series {
            Ok(series) => SeriesReadResult::Data(series),
            Err(e) => {
                error!("[SeriesQueryServiceImpl->read_series] Error querying data: {:?}", e);
                SeriesReadResult::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubRepository {
        rows: anyhow::Result<Vec<RawRow>>,
    }

    impl TimeSeriesRepository for StubRepository {
        fn query_rows(&self, _query: &str) -> anyhow::Result<Vec<RawRow>> {
            match &self.rows {
                Ok(rows) => Ok(rows.clone()),
                Err(e) => Err(anyhow!("{}", e)),
            }
        }
    }

    fn service_with(rows: anyhow::Result<Vec<RawRow>>) -> SeriesQueryServiceImpl<StubRepository> {
        let helsinki: Tz = "Europe/Helsinki".parse().unwrap();
        SeriesQueryServiceImpl::new(Arc::new(StubRepository { rows }), helsinki)
    }

    #[test]
    fn naive_and_offset_rows_normalize_to_target_zone() {
        let service = service_with(Ok(vec![
            RawRow::new("2024-06-15T12:00:00".to_string(), 1.0),
            RawRow::new("2024-06-15T13:00:00Z".to_string(), 2.0),
        ]));

        let series: TimeSeries = match service.read_series("from(bucket: \"home\")") {
            SeriesReadResult::Data(series) => series,
            SeriesReadResult::Failed(reason) => panic!("unexpected failure: {}", reason),
        };

        let helsinki: Tz = "Europe/Helsinki".parse().unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(
            series.timestamps()[0],
            helsinki.with_ymd_and_hms(2024, 6, 15, 15, 0, 0).unwrap()
        );
        assert_eq!(
            series.timestamps()[1],
            helsinki.with_ymd_and_hms(2024, 6, 15, 16, 0, 0).unwrap()
        );
        assert_eq!(series.values(), &vec![1.0, 2.0]);
    }

    #[test]
    fn empty_result_is_data_not_failure() {
        let service = service_with(Ok(Vec::new()));

        match service.read_series("q") {
            SeriesReadResult::Data(series) => assert!(series.is_empty()),
            SeriesReadResult::Failed(reason) => panic!("unexpected failure: {}", reason),
        }
    }

    #[test]
    fn source_error_becomes_failed_with_reason() {
        let service = service_with(Err(anyhow!("connection refused")));

        match service.read_series("q") {
            SeriesReadResult::Data(_) => panic!("expected failure"),
            SeriesReadResult::Failed(reason) => assert!(reason.contains("connection refused")),
        }
    }

    #[test]
    fn unparsable_timestamp_becomes_failed() {
        let service = service_with(Ok(vec![RawRow::new("yesterday".to_string(), 1.0)]));

        assert!(matches!(
            service.read_series("q"),
            SeriesReadResult::Failed(_)
        ));
    }
}
