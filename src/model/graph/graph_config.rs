use crate::common::*;

use crate::enums::graph_type::*;

use crate::model::graph::{font_size_config::*, graph_spec::*, size_config::*};

#[doc = r#"
    One graph entry as it appears in the graph list file.

    Every field deserializes as optional so that a single broken entry fails
    its own validation instead of failing the whole file parse - the batch
    must keep rendering the remaining graphs.
"#]
#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct GraphConfig {
    pub name: Option<String>,
    pub title: Option<String>,
    pub query: Option<String>,
    pub filename: Option<String>,
    pub size: Option<SizeConfig>,
    pub font_size: Option<FontSizeConfig>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub graph_type: Option<GraphType>,
}

impl GraphConfig {
    #[doc = r#"
        필수 필드 검증 후 렌더링에 쓰이는 GraphSpec 으로 변환해주는 함수.

        1. name / title / query / filename / size 누락시 해당 그래프만 실패 처리
        2. 폰트 크기는 미지정 항목마다 기본값(14/10/9 pt) 적용
        3. xlabel / ylabel 은 명시적으로 주어지고 비어있지 않을 때만 유지
        4. graph_type 미지정시 line

        # Returns
        * `Result<GraphSpec, anyhow::Error>` - 검증 실패시 누락 필드를 설명하는 오류
    "#]
    pub fn validate(&self) -> anyhow::Result<GraphSpec> {
        let name: &str = Self::required_field(&self.name, "name", "<unnamed>")?;
        let title: &str = Self::required_field(&self.title, "title", name)?;
        let query: &str = Self::required_field(&self.query, "query", name)?;
        let filename: &str = Self::required_field(&self.filename, "filename", name)?;

        let size: &SizeConfig = self.size.as_ref().ok_or_else(|| {
            anyhow!(
                "[GraphConfig->validate] graph '{}' is missing required field 'size'",
                name
            )
        })?;

        if *size.width() == 0 || *size.height() == 0 {
            return Err(anyhow!(
                "[GraphConfig->validate] graph '{}' has zero pixel dimensions: {}x{}",
                name,
                size.width(),
                size.height()
            ));
        }

        let title_font_size: f64 = self
            .font_size
            .as_ref()
            .and_then(|f| *f.title())
            .unwrap_or(DEFAULT_TITLE_FONT_SIZE);
        let axis_label_font_size: f64 = self
            .font_size
            .as_ref()
            .and_then(|f| *f.axis_label())
            .unwrap_or(DEFAULT_AXIS_LABEL_FONT_SIZE);
        let tick_label_font_size: f64 = self
            .font_size
            .as_ref()
            .and_then(|f| *f.tick_label())
            .unwrap_or(DEFAULT_TICK_LABEL_FONT_SIZE);

        Ok(GraphSpec::new(
            name.to_string(),
            title.to_string(),
            query.to_string(),
            filename.to_string(),
            *size.width(),
            *size.height(),
            title_font_size,
            axis_label_font_size,
            tick_label_font_size,
            Self::non_empty(&self.xlabel),
            Self::non_empty(&self.ylabel),
            self.graph_type.unwrap_or_default(),
        ))
    }

    fn required_field<'a>(
        field: &'a Option<String>,
        field_name: &str,
        graph_name: &str,
    ) -> anyhow::Result<&'a str> {
        field
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "[GraphConfig->validate] graph '{}' is missing required field '{}'",
                    graph_name,
                    field_name
                )
            })
    }

    /* 빈 문자열 라벨은 미지정과 동일하게 취급 */
    fn non_empty(field: &Option<String>) -> Option<String> {
        field.clone().filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> GraphConfig {
        toml::from_str(
            r#"
            name = "living_room_temp"
            title = "Living Room Temperature"
            query = "from(bucket: \"home\") |> range(start: -24h)"
            filename = "living_room_temp.jpg"
            xlabel = "Time"
            ylabel = ""

            [size]
            width = 800
            height = 480

            [font_size]
            title = 16.0
            "#,
        )
        .expect("config should parse")
    }

    #[test]
    fn validate_resolves_defaults() {
        let spec: GraphSpec = full_config().validate().expect("config should validate");

        assert_eq!(spec.name(), "living_room_temp");
        assert_eq!(*spec.width(), 800);
        assert_eq!(*spec.title_font_size(), 16.0);
        assert_eq!(*spec.axis_label_font_size(), DEFAULT_AXIS_LABEL_FONT_SIZE);
        assert_eq!(*spec.tick_label_font_size(), DEFAULT_TICK_LABEL_FONT_SIZE);
        assert_eq!(*spec.graph_type(), GraphType::Line);
        assert_eq!(spec.xlabel().as_deref(), Some("Time"));
        /* empty ylabel behaves as unset */
        assert!(spec.ylabel().is_none());
    }

    #[test]
    fn validate_rejects_missing_filename() {
        let config: GraphConfig = toml::from_str(
            r#"
            name = "no_file"
            title = "No file"
            query = "from(bucket: \"home\")"

            [size]
            width = 400
            height = 300
            "#,
        )
        .expect("config should parse");

        let err = config.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("filename"));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let config: GraphConfig = toml::from_str(
            r#"
            name = "zero"
            title = "Zero"
            query = "q"
            filename = "zero.png"

            [size]
            width = 0
            height = 300
            "#,
        )
        .expect("config should parse");

        assert!(config.validate().is_err());
    }

    #[test]
    fn graph_type_bar_parses() {
        let config: GraphConfig = toml::from_str(
            r#"
            name = "bars"
            title = "Bars"
            query = "q"
            filename = "bars.png"
            graph_type = "bar"

            [size]
            width = 400
            height = 300
            "#,
        )
        .expect("config should parse");

        let spec = config.validate().expect("config should validate");
        assert_eq!(*spec.graph_type(), GraphType::Bar);
    }
}
