use crate::common::*;

/* 집계 간격을 추정할 수 없을 때 쓰는 기본 버킷 간격 (15분) */
pub const DEFAULT_BUCKET_INTERVAL_SEC: f64 = 900.0;

#[doc = r#"
    타임스탬프 수열에서 집계 버킷 간격(초)을 추정해주는 함수.

    막대그래프의 막대 폭은 실제 집계 주기를 표현해야 하므로 고정값을 쓰지 않고
    연속된 타임스탬프 간의 양수 델타들의 중앙값을 취한다. 평균은 단일 결측
    구간(수집 중단 등)의 큰 델타 하나에도 전체 막대 폭이 부풀어 버리지만
    중앙값은 그렇지 않다.

    1. 인접 타임스탬프 쌍마다 델타(초)를 계산
    2. 0 이하 델타(중복/역순 타임스탬프)는 폐기
    3. 남은 델타를 정렬해 중앙값 선택 (짝수 개면 가운데 두 값의 평균)
    4. 타임스탬프가 2개 미만이거나 양수 델타가 없으면 기본 간격 반환

    # Arguments
    * `timestamps` - 시간순으로 정렬되어 있다고 가정되는 타임스탬프 수열

    # Returns
    * `f64` - 추정된 버킷 간격 (초, 항상 양수)
"#]
pub fn estimate_bucket_interval(timestamps: &[DateTime<Tz>]) -> f64 {
    let mut deltas: Vec<i64> = timestamps
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).num_seconds())
        .filter(|delta| *delta > 0)
        .collect();

    if deltas.is_empty() {
        return DEFAULT_BUCKET_INTERVAL_SEC;
    }

    deltas.sort_unstable();

    let mid: usize = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        deltas[mid] as f64
    } else {
        (deltas[mid - 1] + deltas[mid]) as f64 / 2.0
    }
}
