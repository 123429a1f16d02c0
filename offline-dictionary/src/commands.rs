pub const DEFAULT_RANDOM_COUNT: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    Help,
    Define(String),
    Random(usize),
    Validate,
    Unknown(String),
}

impl Command {
    /// Parses one prompt line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let mut parts = line.split_ascii_whitespace();
        let command = parts.next()?;
        let rest = || parts.clone().collect::<Vec<&str>>().join(" ");
        let command = match command {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => Self::Exit,
            "help" | "?" => Self::Help,
            "define" | "find" => match rest() {
                word if word.is_empty() => Self::Unknown(line.to_owned()),
                word => Self::Define(word),
            },
            "random" => match rest() {
                count if count.is_empty() => Self::Random(DEFAULT_RANDOM_COUNT),
                count => match count.parse() {
                    Ok(count) => Self::Random(count),
                    Err(_) => Self::Unknown(line.to_owned()),
                },
            },
            "validate" => Self::Validate,
            // Anything else is a word to look up.
            _ => Self::Define(line.split_ascii_whitespace().collect::<Vec<&str>>().join(" ")),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
    define <word>    show every meaning of <word> (or just type the word)
    random [n]       list up to n random headwords (default 5)
    validate         check the dataset's shard files
    help             show this message
    exit             leave";
