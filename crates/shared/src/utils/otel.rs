use anyhow::{Context, Result};
use opentelemetry::global;
use opentelemetry_otlp::{LogExporter, MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    Resource, logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tracing::info;

/// OTLP providers for traces, metrics and logs.
///
/// Without an endpoint nothing is exported and the global tracer stays the
/// no-op default.
#[derive(Default)]
pub struct Telemetry {
    tracer: Option<SdkTracerProvider>,
    meter: Option<SdkMeterProvider>,
    logger: Option<SdkLoggerProvider>,
}

impl Telemetry {
    pub fn init(service_name: &str, otel_endpoint: Option<&str>) -> Result<Self> {
        let Some(endpoint) = otel_endpoint else {
            return Ok(Self::default());
        };

        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();

        let span_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create span exporter")?;

        let tracer = SdkTracerProvider::builder()
            .with_resource(resource.clone())
            .with_batch_exporter(span_exporter)
            .build();
        global::set_tracer_provider(tracer.clone());

        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create metric exporter")?;

        let meter = SdkMeterProvider::builder()
            .with_resource(resource.clone())
            .with_periodic_exporter(metric_exporter)
            .build();
        global::set_meter_provider(meter.clone());

        let log_exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .build()
            .context("Failed to create log exporter")?;

        let logger = SdkLoggerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(log_exporter)
            .build();

        Ok(Self {
            tracer: Some(tracer),
            meter: Some(meter),
            logger: Some(logger),
        })
    }

    pub fn logger_provider(&self) -> Option<&SdkLoggerProvider> {
        self.logger.as_ref()
    }

    pub fn is_enabled(&self) -> bool {
        self.tracer.is_some()
    }

    pub fn shutdown(self) -> Result<()> {
        let results = [
            ("tracer provider", self.tracer.map(|p| p.shutdown())),
            ("meter provider", self.meter.map(|p| p.shutdown())),
            ("logger provider", self.logger.map(|p| p.shutdown())),
        ];

        let errors: Vec<String> = results
            .into_iter()
            .filter_map(|(name, result)| match result {
                Some(Err(e)) => Some(format!("{name}: {e}")),
                _ => None,
            })
            .collect();

        if !errors.is_empty() {
            anyhow::bail!("Failed to shutdown providers:\n{}", errors.join("\n"));
        }

        info!("🛑 Telemetry providers shut down");
        Ok(())
    }
}
