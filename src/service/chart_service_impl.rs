use crate::common::*;

use chrono::Duration;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontStyle, FontTransform};

use crate::dto::time_series::*;

use crate::enums::{graph_type::*, output_format::*, render_outcome::*, tick_mode::*};

use crate::model::configs::output_config::*;
use crate::model::graph::graph_spec::*;

use crate::traits::service_traits::chart_service::*;

use crate::utils_modules::{interval_utils::*, io_utils::*};

/* X축 눈금 간격 - 4시간마다 1개 */
const TICK_INTERVAL_SEC: i64 = 4 * 3600;

#[derive(Debug)]
pub struct ChartServiceImpl {
    output_dir: PathBuf,
    format: OutputFormat,
    dpi: u32,
    /* 기동 시점에 한번 결정되는 눈금 렌더링 전략 */
    tick_mode: TickMode,
}

impl ChartServiceImpl {
    pub fn new(output_config: &OutputConfig, timezone: Tz) -> Self {
        let tick_mode: TickMode = Self::detect_tick_mode(timezone);

        ChartServiceImpl {
            output_dir: PathBuf::from(output_config.directory()),
            format: *output_config.format(),
            dpi: *output_config.dpi(),
            tick_mode,
        }
    }

    #[doc = r#"
        렌더링 백엔드가 타임존이 붙은 좌표를 지원하는지 기동 시점에 한번 검사하는 함수.

        작은 메모리 버퍼에 존 인식 좌표로 눈금을 그려보고, 실패하면 모든
        타임스탬프를 naive 벽시계 값으로 바꿔 그리는 대체 전략을 선택한다.
        차트마다 시도하고 잡는 방식 대신 전략을 한번만 고른다.
    "#]
    fn detect_tick_mode(timezone: Tz) -> TickMode {
        match Self::probe_zone_aware_ticks(timezone) {
            Ok(()) => {
                info!("Zone-aware tick formatting available for {}", timezone);
                TickMode::ZoneAware
            }
            Err(e) => {
                warn!(
                    "[ChartServiceImpl->detect_tick_mode] zone-aware ticks unavailable, rendering naive wall-clock values instead: {:?}",
                    e
                );
                TickMode::NaiveLocal
            }
        }
    }

    fn probe_zone_aware_ticks(timezone: Tz) -> anyhow::Result<()> {
        let probe_start: DateTime<Tz> = timezone
            .with_ymd_and_hms(2000, 1, 1, 0, 0, 0)
            .single()
            .ok_or_else(|| {
                anyhow!(
                    "[ChartServiceImpl->probe_zone_aware_ticks] probe instant is ambiguous in {}",
                    timezone
                )
            })?;
        let probe_end: DateTime<Tz> = probe_start + Duration::hours(24);

        let x_formatter = |stamp: &DateTime<Tz>| stamp.format("%H:%M").to_string();

        let mut buffer: Vec<u8> = vec![0u8; 64 * 64 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (64, 64)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(2)
            .x_label_area_size(12)
            .y_label_area_size(12)
            .build_cartesian_2d(probe_start..probe_end, 0.0..1.0f64)?;

        chart
            .configure_mesh()
            .x_labels(2)
            .y_labels(2)
            .x_label_formatter(&x_formatter)
            .draw()?;

        root.present()?;
        Ok(())
    }

    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(values: &[f64], include_zero: bool) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().fold(f64::INFINITY, |acc, v| acc.min(*v));
        let max_val: f64 = values.iter().fold(f64::NEG_INFINITY, |acc, v| acc.max(*v));

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        let mut y_min: f64 = min_val - padding;
        let mut y_max: f64 = max_val + padding;

        /* 막대는 0 기준선에서 시작한다 */
        if include_zero {
            y_min = y_min.min(0.0);
            y_max = y_max.max(0.0);
        }

        (y_min, y_max)
    }

    /* pt -> px 변환 (표준 72pt/inch) */
    fn font_px(font_pt: f64, dpi: u32) -> f64 {
        font_pt * dpi as f64 / 72.0
    }

    /* 4시간마다 눈금 1개가 되는 라벨 개수 */
    fn x_tick_count(span_seconds: i64) -> usize {
        ((span_seconds / TICK_INTERVAL_SEC) as usize + 1).max(2)
    }

    fn bar_width_duration(interval_sec: f64) -> Duration {
        Duration::milliseconds((interval_sec * 1000.0).round() as i64)
    }

    fn draw_graph_zone_aware(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        spec: &GraphSpec,
        series: &TimeSeries,
    ) -> anyhow::Result<()> {
        root.fill(&WHITE)?;

        let timestamps: &Vec<DateTime<Tz>> = series.timestamps();
        let x_min: DateTime<Tz> = *timestamps.first().ok_or_else(|| {
            anyhow!("[ChartServiceImpl->draw_graph_zone_aware] series has no timestamps")
        })?;
        let last: DateTime<Tz> = *timestamps.last().ok_or_else(|| {
            anyhow!("[ChartServiceImpl->draw_graph_zone_aware] series has no timestamps")
        })?;

        /* 막대그래프는 마지막 버킷까지 그려지도록 X축을 버킷 폭만큼 늘린다 */
        let bar_width: Option<Duration> = match spec.graph_type() {
            GraphType::Bar => Some(Self::bar_width_duration(estimate_bucket_interval(timestamps))),
            GraphType::Line => None,
        };

        let mut x_max: DateTime<Tz> = match bar_width {
            Some(width) => last + width,
            None => last,
        };
        if x_min >= x_max {
            x_max = x_min + Duration::seconds(DEFAULT_BUCKET_INTERVAL_SEC as i64);
        }

        let include_zero: bool = bar_width.is_some();
        let (y_min, y_max) = Self::calculate_y_range(series.values(), include_zero);

        let title_px: f64 = Self::font_px(*spec.title_font_size(), self.dpi);
        let axis_px: f64 = Self::font_px(*spec.axis_label_font_size(), self.dpi);
        let tick_px: f64 = Self::font_px(*spec.tick_label_font_size(), self.dpi);

        let x_label_area: f64 =
            tick_px * 4.0 + if spec.xlabel().is_some() { axis_px * 1.5 } else { 0.0 };
        let y_label_area: f64 =
            tick_px * 5.0 + if spec.ylabel().is_some() { axis_px * 1.5 } else { 0.0 };

        let x_formatter = |stamp: &DateTime<Tz>| stamp.format("%H:%M").to_string();

        let mut chart = ChartBuilder::on(root)
            .caption(
                spec.title(),
                ("sans-serif", title_px).into_font().style(FontStyle::Bold),
            )
            .margin(10)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

        let mut mesh = chart.configure_mesh();

        if let Some(xlabel) = spec.xlabel() {
            mesh.x_desc(xlabel.as_str());
        }
        if let Some(ylabel) = spec.ylabel() {
            mesh.y_desc(ylabel.as_str());
        }

        mesh.x_labels(Self::x_tick_count((x_max - x_min).num_seconds()))
            .x_label_formatter(&x_formatter)
            .x_label_style(
                ("sans-serif", tick_px)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_style(("sans-serif", tick_px).into_font())
            .axis_desc_style(("sans-serif", axis_px).into_font())
            .bold_line_style(RED.mix(0.3))
            .light_line_style(TRANSPARENT)
            .draw()?;

        match bar_width {
            Some(width) => {
                chart.draw_series(timestamps.iter().zip(series.values().iter()).map(
                    |(stamp, value)| {
                        /* 막대의 왼쪽 변이 버킷 시작 시각 */
                        Rectangle::new([(*stamp, 0.0), (*stamp + width, *value)], BLUE.filled())
                    },
                ))?;
            }
            None => {
                chart.draw_series(LineSeries::new(
                    timestamps
                        .iter()
                        .zip(series.values().iter())
                        .map(|(stamp, value)| (*stamp, *value)),
                    ShapeStyle::from(&BLUE).stroke_width(2),
                ))?;
            }
        }

        root.present()?;
        Ok(())
    }

    #[doc = r#"
        대체 경로 - 모든 타임스탬프를 대상 타임존의 naive 벽시계 값으로 바꿔
        동일한 차트를 그린다. 좌표 타입만 다를 뿐 제목/라벨/기하는
        존 인식 경로와 같아서 일반적인 경우 출력이 구분되지 않는다.
    "#]
    fn draw_graph_naive_local(
        &self,
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        spec: &GraphSpec,
        series: &TimeSeries,
    ) -> anyhow::Result<()> {
        root.fill(&WHITE)?;

        let wall_clock: Vec<NaiveDateTime> = series
            .timestamps()
            .iter()
            .map(|stamp| stamp.naive_local())
            .collect();

        let x_min: NaiveDateTime = *wall_clock.first().ok_or_else(|| {
            anyhow!("[ChartServiceImpl->draw_graph_naive_local] series has no timestamps")
        })?;
        let last: NaiveDateTime = *wall_clock.last().ok_or_else(|| {
            anyhow!("[ChartServiceImpl->draw_graph_naive_local] series has no timestamps")
        })?;

        /* 버킷 간격 추정은 원본 존 인식 타임스탬프 기준 - 델타는 동일하다 */
        let bar_width: Option<Duration> = match spec.graph_type() {
            GraphType::Bar => Some(Self::bar_width_duration(estimate_bucket_interval(
                series.timestamps(),
            ))),
            GraphType::Line => None,
        };

        let mut x_max: NaiveDateTime = match bar_width {
            Some(width) => last + width,
            None => last,
        };
        if x_min >= x_max {
            x_max = x_min + Duration::seconds(DEFAULT_BUCKET_INTERVAL_SEC as i64);
        }

        let include_zero: bool = bar_width.is_some();
        let (y_min, y_max) = Self::calculate_y_range(series.values(), include_zero);

        let title_px: f64 = Self::font_px(*spec.title_font_size(), self.dpi);
        let axis_px: f64 = Self::font_px(*spec.axis_label_font_size(), self.dpi);
        let tick_px: f64 = Self::font_px(*spec.tick_label_font_size(), self.dpi);

        let x_label_area: f64 =
            tick_px * 4.0 + if spec.xlabel().is_some() { axis_px * 1.5 } else { 0.0 };
        let y_label_area: f64 =
            tick_px * 5.0 + if spec.ylabel().is_some() { axis_px * 1.5 } else { 0.0 };

        let x_formatter = |stamp: &NaiveDateTime| stamp.format("%H:%M").to_string();

        let mut chart = ChartBuilder::on(root)
            .caption(
                spec.title(),
                ("sans-serif", title_px).into_font().style(FontStyle::Bold),
            )
            .margin(10)
            .x_label_area_size(x_label_area)
            .y_label_area_size(y_label_area)
            .build_cartesian_2d(
                Into::<RangedDateTime<NaiveDateTime>>::into(x_min..x_max),
                y_min..y_max,
            )?;

        let mut mesh = chart.configure_mesh();

        if let Some(xlabel) = spec.xlabel() {
            mesh.x_desc(xlabel.as_str());
        }
        if let Some(ylabel) = spec.ylabel() {
            mesh.y_desc(ylabel.as_str());
        }

        mesh.x_labels(Self::x_tick_count((x_max - x_min).num_seconds()))
            .x_label_formatter(&x_formatter)
            .x_label_style(
                ("sans-serif", tick_px)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .y_label_style(("sans-serif", tick_px).into_font())
            .axis_desc_style(("sans-serif", axis_px).into_font())
            .bold_line_style(RED.mix(0.3))
            .light_line_style(TRANSPARENT)
            .draw()?;

        match bar_width {
            Some(width) => {
                chart.draw_series(wall_clock.iter().zip(series.values().iter()).map(
                    |(stamp, value)| {
                        Rectangle::new([(*stamp, 0.0), (*stamp + width, *value)], BLUE.filled())
                    },
                ))?;
            }
            None => {
                chart.draw_series(LineSeries::new(
                    wall_clock
                        .iter()
                        .zip(series.values().iter())
                        .map(|(stamp, value)| (*stamp, *value)),
                    ShapeStyle::from(&BLUE).stroke_width(2),
                ))?;
            }
        }

        root.present()?;
        Ok(())
    }
}

impl ChartService for ChartServiceImpl {
    #[doc = r#"
        그래프 1건을 렌더링해서 출력 디렉토리에 저장하는 함수.

        1. 빈 시계열이면 파일을 쓰지 않고 NoData 로 종료 (오류 아님)
        2. spec 의 픽셀 크기 그대로의 RGB 버퍼에 차트를 그린다
        3. 버퍼가 완성된 뒤에만 파일로 저장 - 실패시 부분 파일이 남지 않는다
    "#]
    fn render_graph(&self, spec: &GraphSpec, series: &TimeSeries) -> anyhow::Result<RenderOutcome> {
        if series.is_empty() {
            info!("No data found for {}", spec.name());
            return Ok(RenderOutcome::NoData);
        }

        let width: u32 = *spec.width();
        let height: u32 = *spec.height();

        let mut buffer: Vec<u8> = vec![0u8; (width as usize) * (height as usize) * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();

            match self.tick_mode {
                TickMode::ZoneAware => self.draw_graph_zone_aware(&root, spec, series)?,
                TickMode::NaiveLocal => self.draw_graph_naive_local(&root, spec, series)?,
            }
        }

        let output_path: PathBuf = self.output_dir.join(spec.filename());
        save_raster_image(
            &output_path,
            &buffer,
            (width, height),
            self.format,
            self.dpi,
        )?;

        Ok(RenderOutcome::Saved(output_path))
    }
}
