use env_logger::Env;

/// 初始化日誌（輸出到 stderr，預設只顯示 warn 以上）
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
