use prism_demos::simple_scene::SimpleScene;
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "simple scene".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, GpuInit::default(), SimpleScene::new())
}
