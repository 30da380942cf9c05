use prism_demos::tex_mipmap::{TexDemoConfig, TexMipmapDemo};
use prism_engine::device::GpuInit;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::window::{Runtime, RuntimeConfig};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    log::info!("controls: T texture, M min filter, G mag filter, Up/Down speed, Esc quit");

    let config = RuntimeConfig {
        title: "tex_mipmap".to_string(),
        ..RuntimeConfig::default()
    };
    Runtime::run(config, GpuInit::default(), TexMipmapDemo::new(TexDemoConfig::default()))
}
