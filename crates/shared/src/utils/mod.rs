mod logs;
mod metrics;
mod otel;
mod shutdown;
mod tracer;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::otel::Telemetry;
pub use self::shutdown::shutdown_signal;
pub use self::tracer::{ServiceTracer, TracingContext};
