use namesurfer::api::{NameSurferConfig, NameSurferEngine, SubmitOutcome};
use namesurfer::core::Viewport;
use namesurfer::database::NameDatabase;
use namesurfer::render::NullRenderer;
use namesurfer::telemetry::init_default_tracing;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "usage: namesurfer_frame --data <path> [--width <px>] [--height <px>] [--name <name>]... [--config <json>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    data: PathBuf,
    width: Option<u32>,
    height: Option<u32>,
    names: Vec<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            NameSurferConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => NameSurferConfig::default(),
    };
    config.viewport = Viewport::new(
        args.width.unwrap_or(config.viewport.width),
        args.height.unwrap_or(config.viewport.height),
    );

    let database = NameDatabase::load(&args.data).map_err(|err| err.to_string())?;
    let mut engine = NameSurferEngine::new(NullRenderer::default(), database, config)
        .map_err(|err| err.to_string())?;

    for name in &args.names {
        match engine.on_submit_name(name).map_err(|err| err.to_string())? {
            SubmitOutcome::Added { .. } => {}
            SubmitOutcome::NotFound => eprintln!("name not found: {name}"),
        }
    }

    let payload = engine
        .build_render_frame()
        .and_then(|frame| frame.to_json_pretty())
        .map_err(|err| err.to_string())?;
    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut data = None::<PathBuf>;
    let mut width = None::<u32>;
    let mut height = None::<u32>;
    let mut names = Vec::new();
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--data" => data = Some(PathBuf::from(next_value(&mut args, "--data")?)),
            "--width" => width = Some(parse_px(&next_value(&mut args, "--width")?)?),
            "--height" => height = Some(parse_px(&next_value(&mut args, "--height")?)?),
            "--name" => names.push(next_value(&mut args, "--name")?),
            "--config" => config = Some(PathBuf::from(next_value(&mut args, "--config")?)),
            "--output" => output = Some(PathBuf::from(next_value(&mut args, "--output")?)),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let data = data.ok_or_else(|| format!("missing --data\n{USAGE}"))?;
    Ok(CliArgs {
        data,
        width,
        height,
        names,
        config,
        output,
    })
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_px(raw: &str) -> Result<u32, String> {
    raw.parse()
        .map_err(|_| format!("`{raw}` is not a valid pixel size"))
}
