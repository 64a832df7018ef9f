use crate::common::*;

use crate::enums::output_format::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 적절한 오류 반환

    # Type Parameters
    * `T` - `DeserializeOwned` 트레이트를 구현한 구조체 타입

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    완성된 RGB 래스터 버퍼를 이미지 파일로 저장하는 함수.

    1. 출력 경로의 부모 디렉토리가 없으면 생성
    2. 버퍼 전체를 메모리에서 지정 포맷으로 인코딩
    3. 임시 파일에 쓴 뒤 rename 으로 목적지 경로를 덮어쓴다

    인코딩이나 쓰기가 실패해도 목적지 경로에는 부분 파일이 남지 않는다.

    # Arguments
    * `output_path` - 최종 이미지 경로 (기존 파일은 덮어쓴다)
    * `rgb_buffer` - width * height * 3 크기의 RGB 픽셀 버퍼
    * `dimensions` - (width, height) 픽셀 크기
    * `format` - 출력 이미지 포맷
    * `dpi` - 출력 DPI (로그 용도 - 픽셀 크기는 이미 반영되어 있다)

    # Returns
    * `Result<(), anyhow::Error>` - 버퍼 크기 불일치, 인코딩/쓰기 실패 시 오류
"#]
pub fn save_raster_image(
    output_path: &Path,
    rgb_buffer: &[u8],
    dimensions: (u32, u32),
    format: OutputFormat,
    dpi: u32,
) -> Result<(), anyhow::Error> {
    let (width, height) = dimensions;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let image: RgbImage = ImageBuffer::from_raw(width, height, rgb_buffer.to_vec())
        .ok_or_else(|| {
            anyhow!(
                "[save_raster_image] buffer length {} does not match {}x{} RGB",
                rgb_buffer.len(),
                width,
                height
            )
        })?;

    let mut encoded: Vec<u8> = Vec::new();
    image.write_to(&mut Cursor::new(&mut encoded), format.to_image_format())?;

    let tmp_path: PathBuf = output_path.with_extension("tmp");
    fs::write(&tmp_path, &encoded)?;
    fs::rename(&tmp_path, output_path)?;

    info!(
        "Graph saved to: {:?} ({}x{}px, {:?} @ {} dpi)",
        output_path, width, height, format, dpi
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_rejects_mismatched_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");

        let result = save_raster_image(&path, &[0u8; 10], (4, 4), OutputFormat::Png, 100);

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn save_writes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        let buffer: Vec<u8> = vec![255u8; 4 * 4 * 3];

        save_raster_image(&path, &buffer, (4, 4), OutputFormat::Png, 100).unwrap();
        assert!(path.exists());
        let first_len: u64 = fs::metadata(&path).unwrap().len();

        save_raster_image(&path, &buffer, (4, 4), OutputFormat::Png, 100).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), first_len);
    }
}
