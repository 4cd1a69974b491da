use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use color_code_matrix::cell_map::cell_map_json;
use color_code_matrix::layout::layout_text;
use color_code_matrix::probe::probe;
use color_code_matrix::render::render;
use color_code_matrix::decode_image;

#[derive(Parser, Debug)]
#[command(
    name = "matrix",
    about = "Encode text as a color-code matrix image and decode it back",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render text as a grid of solid-color blocks and save it as PNG
    Encode {
        /// Text to encode
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Cell width in pixels (minimum 5)
        #[arg(long, default_value_t = 10)]
        block_width: u32,

        /// Cell height in pixels (minimum 5)
        #[arg(long, default_value_t = 10)]
        block_height: u32,

        /// Output PNG path (default: color_matrix_<timestamp>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write per-cell metadata as JSON
        #[arg(long)]
        cell_map: Option<PathBuf>,
    },

    /// Recover the text embedded in a matrix image
    Decode {
        /// Image to decode (PNG or any format the image crate reads)
        image: PathBuf,

        /// Write the text to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report what a single pixel of an image decodes to
    Probe {
        image: PathBuf,

        #[arg(short)]
        x: u32,

        #[arg(short)]
        y: u32,
    },
}

fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn read_input_text(text: Option<String>, input: Option<PathBuf>) -> Result<String, Box<dyn Error>> {
    match (text, input) {
        (Some(t), None) => Ok(t),
        (None, Some(path)) => Ok(fs::read_to_string(&path)?),
        (None, None) => Err("provide TEXT or --input FILE".into()),
        (Some(_), Some(_)) => unreachable!("clap rejects both"),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Command::Encode {
            text,
            input,
            block_width,
            block_height,
            output,
            cell_map,
        } => {
            let text = read_input_text(text, input)?;
            let layout = layout_text(&text, block_width, block_height)?;
            let canvas = render(&layout);

            let out_path = output
                .unwrap_or_else(|| PathBuf::from(format!("color_matrix_{}.png", unix_timestamp())));
            canvas.save(&out_path)?;
            println!(
                "wrote {} ({}x{}, {} cells)",
                out_path.display(),
                layout.canvas_width,
                layout.canvas_height,
                layout.cells.len()
            );

            if let Some(map_path) = cell_map {
                fs::write(&map_path, cell_map_json(&layout)? + "\n")?;
                println!("wrote {}", map_path.display());
            }
        }

        Command::Decode { image, output } => {
            let raster = image::open(&image)?.to_rgba8();
            let text = decode_image(&raster)?;
            match output {
                Some(path) => {
                    fs::write(&path, text + "\n")?;
                    println!("wrote {}", path.display());
                }
                None => println!("{text}"),
            }
        }

        Command::Probe { image, x, y } => {
            let raster = image::open(&image)?.to_rgba8();
            println!("{}", probe(&raster, x, y));
        }
    }

    Ok(())
}
