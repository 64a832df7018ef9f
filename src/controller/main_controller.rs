use crate::common::*;

use crate::utils_modules::io_utils::*;

use crate::model::graph::{graph_config::*, graph_list_config::*, graph_spec::*};

use crate::dto::{batch_summary::*, series_read_result::*, time_series::*};

use crate::env_configuration::env_config::*;

use crate::enums::render_outcome::*;

use crate::traits::service_traits::{chart_service::*, series_query_service::*};

#[derive(Debug, new)]
pub struct MainController<S: SeriesQueryService, C: ChartService> {
    series_query_service: S,
    chart_service: C,
}

impl<S: SeriesQueryService, C: ChartService> MainController<S, C> {
    #[doc = r#"
        배치 1회 실행의 핵심 함수 - 설정된 모든 그래프를 순서대로 렌더링한다.

        1. 그래프 목록 파일(`GRAPH_LIST_PATH`)을 읽어온다
        2. 그래프마다 검증 -> 조회 -> 렌더링을 수행
        3. 개별 그래프의 실패(검증/쿼리/렌더링)는 로그만 남기고 다음 그래프로 진행
        4. 전체 결과 집계를 로그로 남기고 반환

        # Returns
        * `anyhow::Result<BatchSummary>` - 그래프 목록 파일 자체를 읽지 못한 경우만 Err
    "#]
    pub fn main_task(&self) -> anyhow::Result<BatchSummary> {
        let graph_list: GraphListConfig = read_toml_from_file::<GraphListConfig>(&GRAPH_LIST_PATH)?;

        Ok(self.render_graph_batch(&graph_list))
    }

    #[doc = "그래프 목록 전체를 순서대로 렌더링해주는 함수 - 개별 실패는 배치를 중단시키지 않는다"]
    pub fn render_graph_batch(&self, graph_list: &GraphListConfig) -> BatchSummary {
        let requested: usize = graph_list.graph().len();
        info!("Generating {} graphs...", requested);

        let mut summary: BatchSummary = BatchSummary {
            requested,
            ..BatchSummary::default()
        };

        for graph_config in graph_list.graph() {
            self.render_single_graph(graph_config, &mut summary);
        }

        info!(
            "All graphs generated! requested: {}, rendered: {}, no_data: {}, query_failed: {}, invalid: {}, render_failed: {}",
            summary.requested(),
            summary.rendered(),
            summary.no_data(),
            summary.query_failed(),
            summary.skipped_invalid(),
            summary.render_failed()
        );

        summary
    }

    #[doc = "그래프 1건 처리 - 결과는 집계에 반영한다"]
    fn render_single_graph(&self, graph_config: &GraphConfig, summary: &mut BatchSummary) {
        /* 1. 필수 필드 검증 */
        let spec: GraphSpec = match graph_config.validate() {
            Ok(spec) => spec,
            Err(e) => {
                error!("[MainController->render_single_graph] {:?}", e);
                summary.skipped_invalid += 1;
                return;
            }
        };

        info!("Creating graph: {}", spec.name());

        /* 2. 시계열 조회 - 쿼리 실패와 "데이터 없음"은 구분해서 집계한다 */
        let series: TimeSeries = match self.series_query_service.read_series(spec.query()) {
            SeriesReadResult::Data(series) => series,
            SeriesReadResult::Failed(reason) => {
                error!(
                    "[MainController->render_single_graph] query failed for graph '{}': {}",
                    spec.name(),
                    reason
                );
                summary.query_failed += 1;
                return;
            }
        };

        /* 3. 렌더링 */
        match self.chart_service.render_graph(&spec, &series) {
            Ok(RenderOutcome::Saved(_)) => {
                summary.rendered += 1;
            }
            Ok(RenderOutcome::NoData) => {
                summary.no_data += 1;
            }
            Err(e) => {
                error!(
                    "[MainController->render_single_graph] Error creating graph {}: {:?}",
                    spec.name(),
                    e
                );
                summary.render_failed += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dto::raw_row::*;
    use crate::enums::output_format::*;
    use crate::model::configs::output_config::*;
    use crate::repository::influx_repository_impl::*;
    use crate::service::{chart_service_impl::*, series_query_service_impl::*};
    use crate::traits::repository_traits::time_series_repository::*;

    /* canned rows keyed by the query text, so each graph entry picks its scenario */
    struct FakeRepository;

    impl TimeSeriesRepository for FakeRepository {
        fn query_rows(&self, query: &str) -> anyhow::Result<Vec<RawRow>> {
            match query {
                "ladder" => Ok(vec![
                    RawRow::new("2024-06-15T00:00:00Z".to_string(), 21.0),
                    RawRow::new("2024-06-15T00:15:00Z".to_string(), 21.5),
                    RawRow::new("2024-06-15T00:30:00Z".to_string(), 22.0),
                    RawRow::new("2024-06-15T00:45:00Z".to_string(), 21.75),
                ]),
                "single" => Ok(vec![RawRow::new("2024-06-15T00:00:00Z".to_string(), 5.0)]),
                "empty" => Ok(Vec::new()),
                "boom" => Err(anyhow!("source exploded")),
                other => Err(anyhow!("unexpected query: {}", other)),
            }
        }
    }

    fn controller_into(
        dir: &Path,
    ) -> MainController<SeriesQueryServiceImpl<FakeRepository>, ChartServiceImpl> {
        let output_config: OutputConfig = OutputConfig {
            directory: dir.to_string_lossy().to_string(),
            format: OutputFormat::Png,
            dpi: 100,
            timezone: Some("Europe/Helsinki".to_string()),
        };

        let timezone: Tz = "Europe/Helsinki".parse().unwrap();
        let series_query_service: SeriesQueryServiceImpl<FakeRepository> =
            SeriesQueryServiceImpl::new(Arc::new(FakeRepository), timezone);
        let chart_service: ChartServiceImpl = ChartServiceImpl::new(&output_config, timezone);

        MainController::new(series_query_service, chart_service)
    }

    fn graph_list(entries: &str) -> GraphListConfig {
        toml::from_str(entries).expect("graph list should parse")
    }

    #[test]
    fn invalid_spec_is_isolated_from_the_rest_of_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_into(dir.path());

        let list: GraphListConfig = graph_list(
            r#"
            [[graph]]
            name = "broken"
            title = "Broken"
            query = "ladder"

            [graph.size]
            width = 320
            height = 240

            [[graph]]
            name = "temps"
            title = "Temperatures"
            query = "ladder"
            filename = "temps.png"
            graph_type = "bar"
            ylabel = "C"

            [graph.size]
            width = 320
            height = 240
            "#,
        );

        let summary: BatchSummary = controller.render_graph_batch(&list);

        assert_eq!(*summary.requested(), 2);
        assert_eq!(*summary.skipped_invalid(), 1);
        assert_eq!(*summary.rendered(), 1);
        assert!(dir.path().join("temps.png").exists());
    }

    #[test]
    fn empty_series_writes_no_file_and_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_into(dir.path());

        let list: GraphListConfig = graph_list(
            r#"
            [[graph]]
            name = "nothing"
            title = "Nothing"
            query = "empty"
            filename = "nothing.png"

            [graph.size]
            width = 320
            height = 240
            "#,
        );

        let summary: BatchSummary = controller.render_graph_batch(&list);

        assert_eq!(*summary.no_data(), 1);
        assert_eq!(*summary.rendered(), 0);
        assert_eq!(*summary.render_failed(), 0);
        assert!(!dir.path().join("nothing.png").exists());
    }

    #[test]
    fn query_failure_is_counted_separately_from_no_data() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_into(dir.path());

        let list: GraphListConfig = graph_list(
            r#"
            [[graph]]
            name = "down"
            title = "Source down"
            query = "boom"
            filename = "down.png"

            [graph.size]
            width = 320
            height = 240
            "#,
        );

        let summary: BatchSummary = controller.render_graph_batch(&list);

        assert_eq!(*summary.query_failed(), 1);
        assert_eq!(*summary.no_data(), 0);
        assert!(!dir.path().join("down.png").exists());
    }

    #[test]
    fn single_sample_bar_renders_with_fallback_interval() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_into(dir.path());

        let list: GraphListConfig = graph_list(
            r#"
            [[graph]]
            name = "lonely_bar"
            title = "Lonely bar"
            query = "single"
            filename = "lonely_bar.png"
            graph_type = "bar"

            [graph.size]
            width = 320
            height = 240
            "#,
        );

        let summary: BatchSummary = controller.render_graph_batch(&list);

        assert_eq!(*summary.rendered(), 1);
        assert!(dir.path().join("lonely_bar.png").exists());
    }

    #[test]
    fn rerender_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let controller = controller_into(dir.path());

        let list: GraphListConfig = graph_list(
            r#"
            [[graph]]
            name = "temps"
            title = "Temperatures"
            query = "ladder"
            filename = "temps.png"

            [graph.size]
            width = 320
            height = 240
            "#,
        );

        assert_eq!(*controller.render_graph_batch(&list).rendered(), 1);
        let first_render: Vec<u8> = fs::read(dir.path().join("temps.png")).unwrap();

        /* identical inputs render identical bytes, overwriting the previous file */
        assert_eq!(*controller.render_graph_batch(&list).rendered(), 1);
        let second_render: Vec<u8> = fs::read(dir.path().join("temps.png")).unwrap();
        assert_eq!(first_render, second_render);
    }

    /* the real repository stays constructible with the same wiring the binary uses */
    #[test]
    fn influx_repository_constructs_from_config() {
        use crate::model::configs::influx_server_config::*;

        let influx_config: InfluxServerConfig = InfluxServerConfig {
            url: "http://localhost:8086".to_string(),
            token: "secret".to_string(),
            org: "home org".to_string(),
            timeout_sec: Some(5),
        };

        assert!(InfluxRepositoryImpl::new(&influx_config).is_ok());
    }
}
