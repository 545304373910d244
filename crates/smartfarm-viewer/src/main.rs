//! SmartFarm Viewer - Native entry point

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Result;
    use clap::Parser;
    use smartfarm_core::config::{load_config, save_default_config};
    use smartfarm_core::{Locale, Variant};
    use std::path::PathBuf;
    use tracing::{info, Level};
    use tracing_subscriber::FmtSubscriber;

    #[derive(Parser, Debug)]
    #[command(name = "smartfarm")]
    #[command(about = "Smart farm bench viewer with mock controls")]
    #[command(version)]
    struct Args {
        /// Path to configuration file
        #[arg(short, long, default_value = "smartfarm.toml")]
        config: PathBuf,

        /// Layout preset (lab, lab-sensors, capstone), overrides the file
        #[arg(long)]
        variant: Option<Variant>,

        /// Label language (en, ko), overrides the file
        #[arg(long)]
        locale: Option<Locale>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: String,

        /// Write a default configuration file and exit
        #[arg(long)]
        write_default_config: bool,
    }

    pub fn main() -> Result<()> {
        let args = Args::parse();

        // Initialize logging
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        info!("SmartFarm viewer v{}", env!("CARGO_PKG_VERSION"));

        if args.write_default_config {
            let variant = args.variant.unwrap_or_default();
            save_default_config(&args.config, variant)?;
            println!("Wrote {} configuration to {}", variant, args.config.display());
            return Ok(());
        }

        let mut file = load_config(&args.config)?;
        if let Some(variant) = args.variant {
            file.variant = variant;
        }
        if let Some(locale) = args.locale {
            file.locale = locale;
        }
        let config = file.resolve()?;

        smartfarm_viewer::run(config);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

#[cfg(target_arch = "wasm32")]
fn main() {}
