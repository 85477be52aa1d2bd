mod assets;
mod audio;
mod board;
mod camera;
mod effect;
mod error;
mod font;
mod graphics;
mod input;
mod label;
mod roster;
mod sound;
mod state;
mod widget;

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use druid::{AppLauncher, WindowDesc};
use tracing::Level;

use crate::assets::Assets;
use crate::audio::AudioOut;
use crate::board::Board;
use crate::state::AppState;
use crate::widget::BoardWidget;

#[derive(Parser, Debug)]
#[command(name = "soundboard", version, about)]
struct Cli {
    /// Directory holding the images, clips and label font.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Initial playback volume, 0.0 to 1.0.
    #[arg(long, default_value_t = roster::DEFAULT_VOLUME)]
    volume: f32,

    /// Skip the camera flourish at startup.
    #[arg(long)]
    no_intro: bool,

    /// Start with the diagnostics overlay shown.
    #[arg(long)]
    debug: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let mut assets = Assets::load(&cli.assets)
        .with_context(|| format!("load assets from {}", cli.assets.display()))?;
    let audio = AudioOut::open().context("open audio output")?;

    let items = std::mem::take(&mut assets.items);
    let mut board = Board::new(items, assets.icon.size(), cli.volume);
    if !cli.no_intro {
        board.start_intro();
    }

    let window = WindowDesc::new(BoardWidget::new(board, assets, audio))
        .title(roster::WINDOW_TITLE)
        .window_size((roster::WINDOW_WIDTH, roster::WINDOW_HEIGHT))
        .resizable(false);

    tracing::info!("launching window");
    AppLauncher::with_window(window)
        .launch(AppState { debug: cli.debug })
        .map_err(|e| anyhow::anyhow!("window error: {e}"))?;

    tracing::info!("shut down");
    Ok(())
}
