// SPDX-License-Identifier: MPL-2.0
use airlens::config;
use airlens::error::Result;
use airlens::media::{self, CodecSource};
use airlens::ui::state::ViewerSession;
use log::{error, warn};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Usage: airlens [OPTIONS] FILE

Prints the metadata of FILE and the zoom it would open at.

Options:
  --json            Print metadata as JSON
  --viewport WxH    Viewport size used for fit-to-window (e.g. 1920x1080)
  --config PATH     Read preferences from PATH instead of the user config
  -h, --help        Show this help
";

struct Args {
    json: bool,
    viewport: Option<(u32, u32)>,
    config: Option<PathBuf>,
    file: PathBuf,
}

fn parse_viewport(value: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let height = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Ok((width, height))
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        json: args.contains("--json"),
        viewport: args.opt_value_from_fn("--viewport", parse_viewport)?,
        config: args.opt_value_from_str("--config")?,
        file: args.free_from_str()?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        warn!("ignoring extra arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };

    if !media::is_supported_image(&args.file) {
        warn!("{}: unrecognized extension, probing content", args.file.display());
    }
    let metadata = media::load_metadata(&CodecSource, &args.file)?;

    if args.json {
        println!("{}", metadata.to_json()?);
        return Ok(());
    }

    for (key, value) in metadata.to_display_map() {
        println!("{key:>18}: {value}");
    }

    let mut session = ViewerSession::new(&config);
    if let Some((width, height)) = args.viewport {
        session.resize_viewport(width, height);
    }
    session.open_image(metadata.width(), metadata.height());

    let (view_w, view_h) = session.viewport_size();
    println!();
    println!("Viewport {view_w}x{view_h}, scale {:.4}", session.state().scale());
    println!("{}", session.status_line());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            error!("{err}");
            eprint!("{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}: {err}", args.file.display());
            ExitCode::FAILURE
        }
    }
}
