use std::fs;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use log::{error, info};
use snafu::ResultExt;

use scoresynth::error::IoSnafu;
use scoresynth::{Envelope, Event, Result, Song, Synth, Waveform, demo, instrument, parser};

#[derive(Parser)]
#[command(name = "scoresynth", about = "Render text scores to audio")]
#[command(version)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

/// Options shared by the commands that render audio.
#[derive(clap::Args)]
struct RenderOpts {
    /// Path to a score file; the built-in demo song is used when omitted
    file: Option<PathBuf>,

    /// Oscillator shape used for every note
    #[arg(short, long, value_enum, default_value_t = Waveform::Sine)]
    waveform: Waveform,

    /// Envelope settings from a .instr file
    #[arg(short, long)]
    instrument: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a score through the speakers
    Play {
        #[command(flatten)]
        opts: RenderOpts,
    },

    /// Render a score to a 16-bit WAV file
    Render {
        #[command(flatten)]
        opts: RenderOpts,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Parse a score file and display its structure
    Parse {
        /// Path to a score file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    if let Err(e) = simple_logger::init_with_level(level) {
        eprintln!("failed to initialize logging: {}", e);
    }

    if let Err(e) = run(cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Play { opts } => {
            let samples = render(&opts)?;
            scoresynth::playback::play(&samples)
        }
        Command::Render { opts, out } => {
            let samples = render(&opts)?;
            scoresynth::pcm::write_wav(&out, &samples)
        }
        Command::Parse { file } => {
            let song = load_song(&file)?;
            print_song(&song);
            Ok(())
        }
    }
}

fn load_song(path: &Path) -> Result<Song> {
    let input = fs::read_to_string(path).context(IoSnafu { path })?;
    parser::parse(&input)
}

fn render(opts: &RenderOpts) -> Result<Vec<f64>> {
    let song = match &opts.file {
        Some(path) => load_song(path)?,
        None => {
            info!("no score given, using the demo song");
            demo::mary_had_a_little_lamb()?
        }
    };
    let envelope = match &opts.instrument {
        Some(path) => instrument::load(path)?,
        None => Envelope::default(),
    };
    let synth = Synth::new(opts.waveform).with_envelope(envelope);

    info!(
        "rendering {} tracks, {:.2}s, key {}, {} time, {:?} wave",
        song.tracks().len(),
        song.duration(),
        song.key,
        song.time_signature,
        opts.waveform
    );
    Ok(song.render(&synth))
}

fn print_song(song: &Song) {
    println!("Key: {}", song.key);
    println!("Time signature: {}", song.time_signature);
    println!("Tracks: {}", song.tracks().len());
    println!();
    for track in song.tracks() {
        println!("--- Track: {} ({:.2}s) ---", track.name, track.duration());
        for (i, bar) in track.bars().iter().enumerate() {
            println!("  Bar {}", i + 1);
            for event in bar.events() {
                match event {
                    Event::Note(n) if n.is_rest() => {
                        println!("    {} ({:.4}s)", n, n.duration());
                    }
                    Event::Note(n) => {
                        println!("    {} ({:.2} Hz)", n, n.frequency());
                    }
                    Event::Chord(c) => {
                        let freqs: Vec<String> = c
                            .frequencies()
                            .iter()
                            .map(|f| format!("{:.2}", f))
                            .collect();
                        println!("    {} [{}] Hz", c, freqs.join(" "));
                    }
                }
            }
        }
        println!();
    }
}
