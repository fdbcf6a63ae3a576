use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn log_format(cfg: Option<&AppConfig>) -> LogFormat {
    cfg.map(|c| c.log.format.clone())
        .or_else(|| std::env::var("LOG_FORMAT").ok())
        .and_then(|f| f.parse().ok())
        .unwrap_or_default()
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, DATABASE_URL and friends apply
    dotenv().ok();

    let file_cfg = AppConfig::load_and_validate();
    init_logging(log_format(file_cfg.as_ref().ok()));
    info!(service = "server", event = "logger_init", "tracing subscriber initialized");

    let cfg = match file_cfg {
        Ok(cfg) => cfg,
        Err(file_err) => match AppConfig::from_env() {
            Ok(cfg) => {
                warn!(service = "server", event = "config_fallback", error = %file_err, "config file unusable, using environment");
                cfg
            }
            Err(e) => {
                error!(service = "server", event = "config_invalid", file_error = %file_err, error = %e, "no usable configuration");
                return std::process::ExitCode::FAILURE;
            }
        },
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "soda stock service starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
