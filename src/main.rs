use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ttfblit::bitmaps::Canvas;
use ttfblit::{Color, Config, FontEngine};

#[derive(Parser)]
#[command(name = "ttfblit", about = "Rasterize TrueType text into colored points")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Pixel size, overrides the configured one
    #[arg(long, global = true)]
    size: Option<u32>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the rendered width of TEXT in pixels
    Width { font: PathBuf, text: String },
    /// Render TEXT onto a scratch surface and print it as ASCII art
    Preview {
        font: PathBuf,
        text: String,
        /// Text color: #rrggbb, #rrggbbaa, 0xRRGGBBAA or a color name
        #[arg(long)]
        color: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(size) = cli.size {
        config.font_size = size;
    }

    let engine = FontEngine::with_config(&config)?;
    match cli.command {
        Cmd::Width { font, text } => {
            let font = engine.load_font_file(&font)?;
            println!("{}", font.width(&text, config.font_size));
        }
        Cmd::Preview { font, text, color } => {
            let color = match color {
                Some(s) => Color::from_named_or_hex_string(&s)
                    .with_context(|| format!("unknown color: {}", s))?,
                None => config.color,
            };
            let font = engine.load_font_file(&font)?;
            let width = font.width(&text, config.font_size) as usize;
            let height = config.font_size as usize * 3 / 2;
            let mut canvas = Canvas::new(width.max(1), height.max(1));
            font.print(&mut canvas, 0, 0, &text, config.font_size, color);
            print!("{}", canvas.to_ascii());
        }
    }
    Ok(())
}
