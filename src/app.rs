use crate::api::create_router;
use crate::config::Config;
use crate::infrastructure::{MemoryStore, TriviaStore};
use crate::models::load_seed_file;
use crate::utils::logging::{append_log_line, init_log_file, log_shutdown, log_startup};
use crate::workflow::TriviaFlow;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    flow: TriviaFlow,
}

impl App {
    /// 初始化应用
    ///
    /// 写日志文件头、加载种子数据、创建题库。
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)
            .with_context(|| format!("无法初始化日志文件: {}", config.output_log_file))?;

        info!("\n📁 正在加载种子数据: {}", config.seed_file);
        let seed = load_seed_file(Path::new(&config.seed_file)).await?;
        let store = MemoryStore::from_seed(seed);

        let questions = store.list_questions().len();
        let categories = store.list_categories().len();
        append_log_line(
            &config.output_log_file,
            &format!("已加载 {} 道题目, {} 个分类", questions, categories),
        )?;
        log_startup(&config.socket_addr(), questions, categories);

        Ok(Self {
            config,
            flow: TriviaFlow::new(Arc::new(store)),
        })
    }

    /// 运行 HTTP 服务，直到收到停机信号
    pub async fn run(&self) -> Result<()> {
        let address = self.config.socket_addr();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("无法监听 {}", address))?;

        info!("✓ 服务已就绪: http://{}", address);

        axum::serve(listener, create_router(self.flow.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP 服务异常退出")?;

        log_shutdown(&self.config.output_log_file)?;
        Ok(())
    }
}

/// 等待 Ctrl+C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("无法监听 Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("收到 Ctrl+C，开始停机"),
        () = terminate => info!("收到 SIGTERM，开始停机"),
    }
}
