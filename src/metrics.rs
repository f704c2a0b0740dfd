//! Process-wide Prometheus registry.
//!
//! Initialised once at startup. After that only atomic increments and
//! observations touch it from the request path; the host gauges are refreshed
//! while a scrape renders the exposition.

use prometheus::{
    Gauge, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, IntGaugeVec, Opts, Registry,
    TextEncoder,
};
use std::sync::{Mutex, OnceLock};
use std::time::Duration;
use sysinfo::System;

static METRICS: OnceLock<Metrics> = OnceLock::new();

/// Route label used for requests that matched no route.
pub const UNMATCHED_ROUTE: &str = "unmatched";

const REQUEST_LABELS: &[&str] = &["method", "route", "status"];

pub struct Metrics {
    registry: Registry,
    request_count: IntCounterVec,
    request_latency: HistogramVec,
    system_memory_used: IntGauge,
    system_memory_total: IntGauge,
    system_cpu_usage: Gauge,
    system: Mutex<System>,
}

impl Metrics {
    pub fn new(service_name: &str) -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let request_count = IntCounterVec::new(
            Opts::new("request_count", "Total API requests"),
            REQUEST_LABELS,
        )?;
        let request_latency = HistogramVec::new(
            HistogramOpts::new("request_latency_seconds", "Request latency in seconds"),
            REQUEST_LABELS,
        )?;
        let app_info = IntGaugeVec::new(
            Opts::new("app_info", "Information about the application"),
            &["service", "version"],
        )?;
        let system_memory_used =
            IntGauge::new("system_memory_used_bytes", "Host memory in use, in bytes")?;
        let system_memory_total =
            IntGauge::new("system_memory_total_bytes", "Total host memory, in bytes")?;
        let system_cpu_usage =
            Gauge::new("system_cpu_usage_percent", "Global host CPU usage, in percent")?;

        registry.register(Box::new(request_count.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;
        registry.register(Box::new(app_info.clone()))?;
        registry.register(Box::new(system_memory_used.clone()))?;
        registry.register(Box::new(system_memory_total.clone()))?;
        registry.register(Box::new(system_cpu_usage.clone()))?;

        #[cfg(target_os = "linux")]
        registry.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        app_info
            .with_label_values(&[service_name, env!("CARGO_PKG_VERSION")])
            .set(1);

        Ok(Self {
            registry,
            request_count,
            request_latency,
            system_memory_used,
            system_memory_total,
            system_cpu_usage,
            system: Mutex::new(System::new()),
        })
    }

    /// Record one finished request.
    pub fn observe_request(&self, method: &str, route: &str, status: u16, latency: Duration) {
        let status = status.to_string();
        let labels = [method, route, status.as_str()];
        self.request_count.with_label_values(&labels).inc();
        self.request_latency
            .with_label_values(&labels)
            .observe(latency.as_secs_f64());
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        self.refresh_system();
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }

    fn refresh_system(&self) {
        // A poisoned lock only means a previous scrape panicked mid-refresh.
        let mut sys = match self.system.lock() {
            Ok(sys) => sys,
            Err(poisoned) => poisoned.into_inner(),
        };
        sys.refresh_cpu();
        sys.refresh_memory();
        self.system_memory_used
            .set(i64::try_from(sys.used_memory()).unwrap_or(i64::MAX));
        self.system_memory_total
            .set(i64::try_from(sys.total_memory()).unwrap_or(i64::MAX));
        self.system_cpu_usage
            .set(f64::from(sys.global_cpu_info().cpu_usage()));
    }
}

/// Initialise the global registry. Later calls return the existing one.
pub fn init(service_name: &str) -> Result<&'static Metrics, prometheus::Error> {
    if let Some(metrics) = METRICS.get() {
        return Ok(metrics);
    }
    let metrics = Metrics::new(service_name)?;
    Ok(METRICS.get_or_init(|| metrics))
}

/// The global registry, if [`init`] has run.
pub fn global() -> Option<&'static Metrics> {
    METRICS.get()
}
