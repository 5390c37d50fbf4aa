/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 种子数据 TOML 文件
    pub seed_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            seed_file: "data/trivia.toml".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            host: std::env::var("TRIVIA_HOST").unwrap_or(default.host),
            port: std::env::var("TRIVIA_PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(default.port),
            seed_file: std::env::var("TRIVIA_SEED_FILE").unwrap_or(default.seed_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }

    /// `host:port`，交给 `TcpListener::bind` 解析
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
