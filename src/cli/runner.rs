use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use notestitch::{save_stitched_image, stitch_directory};

use super::args::CliArgs;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }

    let params = args.params();
    info!(
        "Stitching '.{}' images from {:?} ({} order)",
        params.extension, args.path, params.order
    );

    let stitched = stitch_directory(&args.path, &params)?;
    debug!("Stitch report:\n{}", stitched.report.to_json()?);

    let output = args.path.join(&params.output);
    save_stitched_image(&stitched.canvas, &output)?;
    info!("Successfully stitched: {:?} -> {:?}", args.path, output);

    Ok(())
}
