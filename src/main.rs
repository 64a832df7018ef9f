/*
Author      : Seunghwan Shin
Create date : 2025-11-00
Description :

History     : 2025-11-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::influx_repository_impl::*;

mod env_configuration;

mod traits;

mod model;
use model::configs::{output_config::*, total_config::*};

mod dto;
use dto::batch_summary::*;

mod enums;

mod utils_modules;
use utils_modules::{logger_utils::*, time_utils::*};

mod service;
use service::{chart_service_impl::*, series_query_service_impl::*};

mod controller;
use controller::main_controller::*;

fn main() {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger = set_global_logger();

    info!("Graph maker start!");

    let output_config: &OutputConfig = get_output_config_info();

    /* 대상 타임존은 기동 시점에 한번 해석한다 */
    let timezone: Tz = resolve_timezone(output_config.timezone().as_deref()).unwrap_or_else(|e| {
        let err_msg: &str = "[main] An issue occurred while resolving the target timezone.";
        error!("{} {:?}", err_msg, e);
        panic!("{} {:?}", err_msg, e)
    });

    /* InfluxDB connection */
    let influx_conn: InfluxRepositoryImpl = InfluxRepositoryImpl::new(get_influxdb_config_info())
        .unwrap_or_else(|e| {
            let err_msg: &str = "[main] An issue occurred while initializing influx_conn.";
            error!("{} {:?}", err_msg, e);
            panic!("{} {:?}", err_msg, e)
        });

    /* 의존 주입 */
    let series_query_service: SeriesQueryServiceImpl<InfluxRepositoryImpl> =
        SeriesQueryServiceImpl::new(Arc::new(influx_conn), timezone);
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(output_config, timezone);

    let main_controller: MainController<
        SeriesQueryServiceImpl<InfluxRepositoryImpl>,
        ChartServiceImpl,
    > = MainController::new(series_query_service, chart_service);

    /* 배치 1회 실행 후 종료 */
    let summary: BatchSummary = main_controller.main_task().unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    if *summary.rendered() == *summary.requested() {
        info!("Graph maker finished successfully");
    } else {
        warn!(
            "Graph maker finished with {} of {} graphs rendered",
            summary.rendered(),
            summary.requested()
        );
    }
}
