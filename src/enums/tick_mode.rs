/* X축 눈금 렌더링 전략 - 기동 시점에 한번만 결정된다. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickMode {
    /* Tick labels formatted from zone-aware coordinates */
    ZoneAware,
    /* Backend cannot take zone-aware coordinates: stamps converted to naive wall-clock */
    NaiveLocal,
}
