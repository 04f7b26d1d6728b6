//! Line-oriented commands understood by the interactive explorer.
use thiserror::Error;

use crate::display::DisplayMode;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Root(String),
    Scale(String),
    Tuning(String),
    Frets(i64),
    Mode(DisplayMode),
    Scales,
    Tunings,
    Play(String),
    PlayScale,
    Strum,
    /// String number (1 = highest) and fret.
    Pick(usize, usize),
    Tab(Vec<(usize, usize)>),
    Help,
    Quit,
}


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{command}' expects {expected}")]
    Usage { command: &'static str, expected: &'static str },
}


pub const HELP: &str = "\
show                   print the fretboard
root <note>            set the scale root, e.g. 'root F#'
scale <type>           set the scale type, e.g. 'scale Harmonic Minor'
tuning <name>          set the tuning, e.g. 'tuning Drop D'
frets <n>              set the number of frets
mode notes|tabs        label highlighted cells with note names or fret numbers
scales, tunings        list what can be picked
play <note>            play a single note, e.g. 'play A4'
playscale              play the current scale
strum                  play the open strings
pick <string> <fret>   play one position, string 1 being the highest
tab <s:f> ...          play a run of positions, e.g. 'tab 2:5 3:7'
quit                   exit";


impl Command {
    /// Parse one input line. Blank lines are treated as `show`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };
        let usage = |command: &'static str, expected: &'static str| {
            CommandError::Usage { command, expected }
        };

        match word.to_ascii_lowercase().as_str() {
            "" | "show" => Ok(Command::Show),
            "root" if !rest.is_empty() => Ok(Command::Root(rest.to_string())),
            "root" => Err(usage("root", "a note name")),
            "scale" if !rest.is_empty() => Ok(Command::Scale(rest.to_string())),
            "scale" => Err(usage("scale", "a scale type")),
            "tuning" if !rest.is_empty() => Ok(Command::Tuning(rest.to_string())),
            "tuning" => Err(usage("tuning", "a tuning name")),
            "frets" => rest
                .parse()
                .map(Command::Frets)
                .map_err(|_| usage("frets", "a whole number")),
            "mode" => rest
                .parse()
                .map(Command::Mode)
                .map_err(|_| usage("mode", "'notes' or 'tabs'")),
            "scales" => Ok(Command::Scales),
            "tunings" => Ok(Command::Tunings),
            "play" if !rest.is_empty() => Ok(Command::Play(rest.to_string())),
            "play" => Err(usage("play", "a note name")),
            "playscale" => Ok(Command::PlayScale),
            "strum" => Ok(Command::Strum),
            "pick" => {
                let numbers: Vec<&str> = rest.split_whitespace().collect();
                match numbers.as_slice() {
                    [string, fret] => match (string.parse::<usize>(), fret.parse::<usize>()) {
                        (Ok(s), Ok(f)) => Ok(Command::Pick(s, f)),
                        _ => Err(usage("pick", "a string number and a fret")),
                    },
                    _ => Err(usage("pick", "a string number and a fret")),
                }
            },
            "tab" => {
                let positions = rest
                    .split_whitespace()
                    .map(parse_position)
                    .collect::<Option<Vec<(usize, usize)>>>()
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| usage("tab", "positions like '2:5'"))?;
                Ok(Command::Tab(positions))
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}


/// `"<string>:<fret>"`
fn parse_position(token: &str) -> Option<(usize, usize)> {
    let mut parts = token.splitn(2, ':');
    let string = parts.next()?.parse().ok()?;
    let fret = parts.next()?.parse().ok()?;
    Some((string, fret))
}
