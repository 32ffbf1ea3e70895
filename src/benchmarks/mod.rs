//! Shared criterion configuration for the engine benchmarks.
pub mod config {
    use criterion::{measurement::WallTime, BenchmarkGroup, Criterion};
    #[cfg(not(target_os = "windows"))]
    use pprof::criterion::{Output, PProfProfiler};
    use std::time::Duration;

    #[cfg(not(target_os = "windows"))]
    pub fn get_default_profiling_configs() -> Criterion {
        Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
    }

    /// A single pass has to fit in a rendering frame, so every sample is short and we can
    /// afford many of them.
    pub fn set_default_benchmark_configs(benchmark: &mut BenchmarkGroup<WallTime>) {
        benchmark
            .sample_size(300)
            .measurement_time(Duration::from_secs(5))
            .confidence_level(0.97)
            .warm_up_time(Duration::from_secs(2))
            .noise_threshold(0.05);
    }
}
