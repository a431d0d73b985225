/// CLI argument parsing and command handling.
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use crate::clipboard::Clipboard;
use crate::color::Color;
use crate::palette::{generate_palette, random_palette};
use crate::types::{LockMask, PALETTE_SIZE, Palette};

#[derive(Parser)]
#[command(
    name = "palettr",
    version,
    about = "Palettr - A terminal-based color palette generator"
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub debug: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a fresh palette, one color per line
    Generate {
        /// Also print each color as rgb(R, G, B)
        #[arg(long)]
        rgb: bool,
        /// Copy the palette to the clipboard as "#RRGGBB, #RRGGBB, ..."
        #[arg(short = 'c', long)]
        copy: bool,
        /// Keep this color in the palette (fills slots from the left)
        #[arg(short = 'k', long = "keep", value_name = "COLOR")]
        keep: Vec<String>,
    },
    /// Show the rgb value and brightness class of colors
    Inspect {
        #[arg(required = true, value_name = "COLOR")]
        colors: Vec<String>,
    },
}

/// Execute a CLI command.
pub fn run(command: Command, clipboard: &mut dyn Clipboard) -> Result<()> {
    let lines = match command {
        Command::Generate { rgb, copy, keep } => handle_generate(rgb, copy, &keep, clipboard)?,
        Command::Inspect { colors } => handle_inspect(&colors)?,
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

fn handle_generate(
    rgb: bool,
    copy: bool,
    keep: &[String],
    clipboard: &mut dyn Clipboard,
) -> Result<Vec<String>> {
    let palette = palette_keeping(keep)?;
    info!(palette = %palette.joined(), "generated palette");
    if copy {
        if let Err(err) = clipboard.set_text(palette.joined()) {
            warn!(error = %err, "clipboard write failed");
        }
    }
    Ok(palette
        .iter()
        .map(|color| {
            if rgb {
                format!("{color}  {}", color.to_rgb_string())
            } else {
                color.to_string()
            }
        })
        .collect())
}

/// A random palette whose leading slots are the given colors, locked in place.
fn palette_keeping(keep: &[String]) -> Result<Palette> {
    if keep.len() > PALETTE_SIZE {
        bail!("At most {PALETTE_SIZE} colors can be kept, got {}", keep.len());
    }
    let mut colors = *random_palette().colors();
    let mut locked = [false; PALETTE_SIZE];
    for (index, value) in keep.iter().enumerate() {
        colors[index] = value.parse::<Color>()?;
        locked[index] = true;
    }
    Ok(generate_palette(&Palette::new(colors), &LockMask::new(locked)))
}

fn handle_inspect(colors: &[String]) -> Result<Vec<String>> {
    colors
        .iter()
        .map(|value| -> Result<String> {
            let color = value.parse::<Color>()?;
            let shade = if color.is_light() { "light" } else { "dark" };
            Ok(format!("{color}  {}  {shade}", color.to_rgb_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::RecordingClipboard;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["palettr", "generate", "--rgb", "-k", "#FF0000"]).unwrap();
        match cli.command {
            Some(Command::Generate { rgb, copy, keep }) => {
                assert!(rgb);
                assert!(!copy);
                assert_eq!(keep, strings(&["#FF0000"]));
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(Cli::try_parse_from(["palettr", "inspect"]).is_err());
        assert!(Cli::try_parse_from(["palettr"]).unwrap().command.is_none());
    }

    #[test]
    fn generate_keeps_colors_and_copies() {
        let mut clipboard = RecordingClipboard::default();
        let keep = strings(&["#ff0000", "00FF00"]);
        let lines = handle_generate(true, true, &keep, &mut clipboard).unwrap();
        assert_eq!(lines.len(), PALETTE_SIZE);
        assert_eq!(lines[0], "#FF0000  rgb(255, 0, 0)");
        assert_eq!(lines[1], "#00FF00  rgb(0, 255, 0)");

        let writes = clipboard.writes();
        assert_eq!(writes.len(), 1);
        assert!(writes[0].starts_with("#FF0000, #00FF00, #"));
        assert_eq!(writes[0].split(", ").count(), PALETTE_SIZE);
    }

    #[test]
    fn generate_rejects_bad_keeps() {
        let mut clipboard = RecordingClipboard::default();
        assert!(handle_generate(false, false, &strings(&["#XYZ"]), &mut clipboard).is_err());
        let too_many = strings(&["#000000"; PALETTE_SIZE + 1]);
        assert!(handle_generate(false, false, &too_many, &mut clipboard).is_err());
        assert!(clipboard.writes().is_empty());
    }

    #[test]
    fn inspect_reports_brightness() {
        let lines = handle_inspect(&strings(&["#FFFFFF", "#808080"])).unwrap();
        assert_eq!(
            lines,
            strings(&["#FFFFFF  rgb(255, 255, 255)  light", "#808080  rgb(128, 128, 128)  dark"])
        );
        assert!(handle_inspect(&strings(&["nope"])).is_err());
    }
}
