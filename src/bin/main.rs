use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;
use rustyline::error::ReadlineError;

use fretboard::command::{Command, HELP};
use fretboard::config::Config;
use fretboard::playback::{self, LogPlayer, Player, WavRecorder};
use fretboard::Session;


/// Explore scales on a fretted instrument.
#[derive(Debug, Parser)]
#[command(name = "fretboard-repl")]
struct Args {
    /// Config file, instead of $FRETBOARD_CONFIG or the user config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render everything played into this WAV file instead of the speakers
    #[arg(long)]
    record: Option<PathBuf>,

    #[arg(long)]
    root: Option<String>,

    #[arg(long)]
    scale: Option<String>,

    #[arg(long)]
    tuning: Option<String>,

    #[arg(long)]
    frets: Option<i64>,
}


enum Output {
    Speaker(Box<dyn Player>),
    Recording(WavRecorder, PathBuf),
}


impl Output {
    fn player(&self) -> &dyn Player {
        match self {
            Output::Speaker(player) => &**player,
            Output::Recording(recorder, _) => recorder,
        }
    }

    fn finish(self) -> Result<()> {
        if let Output::Recording(recorder, path) = self {
            recorder.save(&path).with_context(|| format!("saving {}", path.display()))?;
        }
        Ok(())
    }
}


#[cfg(feature = "live")]
fn speaker() -> Box<dyn Player> {
    match playback::CpalPlayer::new() {
        Ok(player) => Box::new(player),
        Err(e) => {
            log::warn!("{}, notes will only be logged", e);
            Box::new(LogPlayer)
        },
    }
}


#[cfg(not(feature = "live"))]
fn speaker() -> Box<dyn Player> {
    Box::new(LogPlayer)
}


fn run(session: &mut Session, command: Command, player: &dyn Player, beat: Duration) -> fretboard::Result<()> {
    match command {
        Command::Show => print!("{}\n{}", session.scale(), session.table()),
        Command::Root(root) => {
            session.set_root(&root)?;
            print!("{}\n{}", session.scale(), session.table());
        },
        Command::Scale(name) => {
            session.set_scale_type(&name)?;
            print!("{}\n{}", session.scale(), session.table());
        },
        Command::Tuning(name) => {
            session.set_tuning(&name)?;
            print!("{}", session.table());
        },
        Command::Frets(frets) => {
            session.set_frets(frets)?;
            print!("{}", session.table());
        },
        Command::Mode(mode) => {
            session.set_mode(mode);
            print!("{}", session.table());
        },
        Command::Scales => println!("{}", session.vocabulary().scale_type_names().join(", ")),
        Command::Tunings => {
            for tuning in session.vocabulary().tunings() {
                println!("{}", tuning);
            }
        },
        Command::Play(name) => {
            let note: fretboard::Note = name.parse()?;
            playback::play_note(player, &note, beat)?;
        },
        Command::PlayScale => playback::play_scale(player, session.scale(), beat)?,
        Command::Strum => playback::strum(player, session.fretboard(), beat)?,
        Command::Pick(string, fret) => playback::pick(player, session.fretboard(), string, fret, beat)?,
        Command::Tab(positions) => playback::play_tab(player, session.fretboard(), &positions, beat)?,
        Command::Help => println!("{}", HELP),
        Command::Quit => {},
    }
    Ok(())
}


fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_or_default(),
    };
    let mut defaults = config.defaults.clone();
    if let Some(root) = args.root {
        defaults.root = root;
    }
    if let Some(scale) = args.scale {
        defaults.scale = scale;
    }
    if let Some(tuning) = args.tuning {
        defaults.tuning = tuning;
    }
    if let Some(frets) = args.frets {
        defaults.frets = frets;
    }
    let beat = defaults.note_duration();

    let mut session = Session::from_defaults(config.vocabulary()?, &defaults)?;
    let output = match args.record {
        Some(path) => Output::Recording(WavRecorder::default(), path),
        None => Output::Speaker(speaker()),
    };
    print!("{}\n{}", session.scale(), session.table());

    let mut reader = rustyline::Editor::<()>::new();
    loop {
        match reader.readline("fretboard> ") {
            Ok(line) => {
                reader.add_history_entry(line.as_str());
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if let Err(e) = run(&mut session, command, output.player(), beat) {
                            eprintln!("{}", e);
                        }
                    },
                    Err(e) => eprintln!("{}", e),
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(anyhow!("readline error: {:?}", e)),
        }
    }

    info!("exit requested, exiting gracefully...");
    output.finish()
}
