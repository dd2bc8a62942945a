//! Batch generator: one *.musicxml file per library melody.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use songbook::library::{self, MelodySpec};
use songbook::musicxml_render::{write_score, RenderSettings};

/// Render every melody of the songbook library to MusicXML.
#[derive(Parser, Debug)]
#[command(name = "songbook-generator", version, about)]
struct Args {
    /// Directory the *.musicxml files are written to.
    #[arg(long, default_value = "scores")]
    out_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let settings = RenderSettings::default();

    let melodies = library::all();
    let mut failed = 0usize;
    for melody in &melodies {
        match generate(melody, &args.out_dir, &settings) {
            Ok(path) => println!("Generated {}", path.display()),
            Err(error) => {
                // One bad melody must not abort the rest of the run.
                failed += 1;
                log::error!("{}: {:#}", melody.title, error);
            }
        }
    }
    if failed > 0 {
        eprintln!("{failed} of {} melodies failed", melodies.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn generate(
    melody: &MelodySpec,
    out_dir: &Path,
    settings: &RenderSettings,
) -> anyhow::Result<PathBuf> {
    let score = library::build_score(melody)?;
    Ok(write_score(&score, out_dir, settings)?)
}
