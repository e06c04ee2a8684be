use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use rust_school_admin::config::AppConfig;
use rust_school_admin::seed;
use rust_school_admin::storage;

/// 直接运行即按依赖顺序填充演示数据集
#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let start_datetime = chrono::Utc::now();

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting seeding...
        Project: {}
        Version: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    // 连接数据库并运行迁移
    let storage = storage::create_storage(config).await.unwrap_or_else(|e| {
        eprintln!("Storage initialization failed: {e}");
        std::process::exit(1);
    });

    // 填充演示数据，任何约束冲突即中止
    match seed::run(storage.as_ref()).await {
        Ok(summary) => {
            warn!(
                "Seeding completed: {} profiles, {} users, {} regulations, {} classes, {} subjects",
                summary.profiles,
                summary.users,
                summary.regulations,
                summary.classes,
                summary.subjects
            );
        }
        Err(e) => {
            // 无重试，无部分恢复，直接报错退出
            eprintln!("Seeding aborted: {e}");
            std::process::exit(1);
        }
    }

    // 显式关闭连接
    if let Err(e) = storage.close().await {
        warn!("Failed to close storage cleanly: {e}");
    }

    debug!(
        "Seeding finished in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start_datetime)
            .num_milliseconds()
    );

    Ok(())
}
