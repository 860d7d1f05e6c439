use tracing_subscriber::{fmt, EnvFilter};

/// tracing subscriber 초기화
///
/// RUST_LOG가 있으면 그대로 사용하고, 없으면 `warn` (`--debug` 시 `debug`).
/// 로그는 stderr로 보내서 명령어 출력(stdout)과 섞이지 않게 한다.
pub fn init(debug: bool) {
    let default_level = if debug { "comando=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
