use getopts::Options;
use log::*;
use std::sync::Arc;
use whitrace::image::Image;
use whitrace::renderer::{RenderConfig, Renderer};
use whitrace::*;

struct Args {
    width: u32,
    height: u32,
    scene: String,
    output: String,
    config: RenderConfig,
}

fn parse_opt<T: std::str::FromStr>(matches: &getopts::Matches, name: &str, default: T) -> Result<T> {
    match matches.opt_str(name) {
        Some(s) => s
            .parse()
            .map_err(|_| Error::InvalidArgument(format!("--{}: cannot parse '{}'", name, s))),
        None => Ok(default),
    }
}

fn parse_args(args: &[String]) -> Result<Option<Args>> {
    let program = &args[0];
    let mut opts = Options::new();
    opts.optopt("w", "width", "image width in pixels (800)", "PX");
    opts.optopt("H", "height", "image height in pixels (600)", "PX");
    opts.optopt("d", "depth", "recursion depth, 1 disables reflections (2)", "N");
    opts.optopt("j", "threads", "worker threads (number of CPUs)", "N");
    opts.optopt("o", "output", "output file, format from extension (output.ppm)", "FILE");
    opts.optopt(
        "s",
        "scene",
        &format!("scene to render: {} (cornell)", example_scenes::SCENE_NAMES.join(", ")),
        "NAME",
    );
    opts.optflag("h", "help", "print this help");
    let matches = opts.parse(&args[1..])?;

    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        print!("{}", opts.usage(&brief));
        return Ok(None);
    }

    let default_config = RenderConfig::default();
    let args = Args {
        width: parse_opt(&matches, "width", 800)?,
        height: parse_opt(&matches, "height", 600)?,
        scene: matches.opt_str("scene").unwrap_or_else(|| "cornell".to_string()),
        output: matches.opt_str("output").unwrap_or_else(|| "output.ppm".to_string()),
        config: RenderConfig {
            depth: parse_opt(&matches, "depth", default_config.depth)?,
            nthread: parse_opt(&matches, "threads", default_config.nthread)?,
        },
    };
    if args.width == 0 || args.height == 0 {
        return Err(Error::InvalidArgument("image size must be positive".to_string()));
    }
    Ok(Some(args))
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let args = match parse_args(&args)? {
        Some(args) => args,
        None => return Ok(()),
    };

    let (camera, scene) = example_scenes::by_name(&args.scene, args.width, args.height)?;
    let mut image = Image::new(args.width, args.height)?;

    let start = std::time::Instant::now();
    let stats = Renderer.render(Arc::new(scene), &camera, &mut image, args.config)?;
    info!("render took {:.2?}", start.elapsed());
    debug!("{:?}", stats);

    image.save(&args.output)
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
