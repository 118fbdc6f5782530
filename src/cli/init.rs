use crate::cli::InitArgs;
use crate::config::Config;
use anyhow::bail;
use tracing::info;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(&args.path, yaml)?;
    info!("Wrote default config to {:?}", args.path);
    println!("Wrote {}", args.path.display());
    Ok(())
}
