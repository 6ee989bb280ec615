use clap::Parser;
use menunav::core::config::{self, CliOverrides};
use menunav::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "menunav", about = "Hierarchical menu navigator")]
struct Args {
    /// Menu config file (defaults to ~/.menunav/menu.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Line-oriented console instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Wrap around at the ends of a menu and of value ranges
    #[arg(long)]
    wrap: bool,

    /// Return to the top menu after an item is selected
    #[arg(long)]
    reset_on_select: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to menunav.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("menunav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; using defaults");
            log::warn!("{}", e);
            config::MenuConfig::default()
        }
    };

    // Bare flags only ever switch a behavior on; absent flags defer to env/file
    let cli = CliOverrides {
        wrap: args.wrap.then_some(true),
        reset_on_select: args.reset_on_select.then_some(true),
    };
    let resolved = config::resolve(&file_config, cli);
    log::info!("menunav starting up with {:?}", resolved.options);

    let (tx, rx) = mpsc::channel();
    let navigator = config::build_navigator(&resolved.menu, resolved.max_children, &tx);
    let app = App::new(navigator, resolved.options);

    if args.plain {
        let mut app = app;
        let stdin = std::io::stdin();
        menunav::console::run(&mut app, &rx, stdin.lock(), std::io::stdout())
    } else {
        menunav::tui::run(app, rx)
    }
}
