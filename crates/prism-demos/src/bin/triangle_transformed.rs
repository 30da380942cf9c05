use prism_demos::triangle::{TriangleDemo, TriangleMode};
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "transformed triangle".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, GpuInit::default(), TriangleDemo::new(TriangleMode::Transformed))
}
