use log::{debug, info};
use simplelog::{ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::path::PathBuf;
use structopt::StructOpt;
use uv_index::uv::Language;

const CONSOLE_DISPLAY_TYPE: &'static str = "console";
const JSON_DISPLAY_TYPE: &'static str = "json";

const LOG_NOTIFIER_TYPE: &'static str = "log";
const JSON_NOTIFIER_TYPE: &'static str = "json";
const NO_NOTIFIER_TYPE: &'static str = "none";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::from_args();

    let log_config = ConfigBuilder::new().set_time_to_local(true).build();
    TermLogger::init(args.log_level, log_config, TerminalMode::Mixed)?;
    debug!("logger initialized");

    let mut config = match &args.config {
        Some(path) => uv_index::Config::from_file(path)?,
        None => uv_index::Config::default(),
    };
    if args.lat.is_some() {
        config.lat = args.lat;
    }
    if args.lon.is_some() {
        config.lon = args.lon;
    }
    if let Some(appid) = args.appid {
        config.appid = appid;
    }
    if args.no_colors {
        config.colors = false;
    }
    if let Some(language) = args.language {
        config.language = language;
    }

    let displays = args
        .display_types
        .iter()
        .map(|d| -> Result<uv_index::DisplayType, String> {
            match d.as_str() {
                CONSOLE_DISPLAY_TYPE => Ok(uv_index::DisplayType::Console(
                    uv_index::ConsoleDisplay::new(),
                )),
                JSON_DISPLAY_TYPE => Ok(uv_index::DisplayType::Json(uv_index::JsonDisplay::new())),
                _ => Err(format!("Unrecognized display type: {}", d)),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut display = uv_index::DisplayType::Composite(displays);

    let mut notifier = match args.notifier.as_str() {
        LOG_NOTIFIER_TYPE => uv_index::NotifierType::Log(uv_index::LogNotifier::new()),
        JSON_NOTIFIER_TYPE => {
            uv_index::NotifierType::JsonLines(uv_index::JsonLinesNotifier::new())
        }
        NO_NOTIFIER_TYPE => uv_index::NotifierType::Silent,
        other => return Err(format!("Unrecognized notifier type: {}", other).into()),
    };

    info!("Initialization complete");

    uv_index::run(config, &mut display, &mut notifier, args.once)?;

    Ok(())
}

#[derive(StructOpt)]
struct Cli {
    /// JSON file with the widget configuration
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    #[structopt(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    #[structopt(long)]
    appid: Option<String>,

    #[structopt(long)]
    no_colors: bool,

    #[structopt(long)]
    language: Option<Language>,

    #[structopt(long = "display-type", default_value = CONSOLE_DISPLAY_TYPE)]
    display_types: Vec<String>,

    #[structopt(long = "notify", default_value = LOG_NOTIFIER_TYPE)]
    notifier: String,

    /// Poll once and exit
    #[structopt(long)]
    once: bool,

    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}
