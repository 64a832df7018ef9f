use crate::common::*;

use flexi_logger::LoggerHandle;

#[doc = r#"
    전역로거 설정 함수.

    로그는 `logs/` 디렉토리에 파일로 남기고 stdout 으로도 복제한다.
    일 단위로 로그파일을 교체하며 최근 30개 파일만 보관한다.

    # Returns
    * `LoggerHandle` - 프로세스 종료 시점까지 살아있어야 하는 핸들
"#]
pub fn set_global_logger() -> LoggerHandle {
    Logger::try_with_str("info")
        .unwrap_or_else(|e| {
            panic!("[set_global_logger] invalid log spec: {:?}", e);
        })
        .log_to_file(FileSpec::default().directory("logs"))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .duplicate_to_stdout(Duplicate::All)
        .format(log_format)
        .start()
        .unwrap_or_else(|e| {
            panic!("[set_global_logger] failed to start logger: {:?}", e);
        })
}

fn log_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        &record.args()
    )
}
