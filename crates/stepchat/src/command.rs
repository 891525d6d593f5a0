/// A line typed into the REPL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// Text to send to the model.
    Prompt(&'a str),
    /// `/cot`: flip chain-of-thought mode.
    ToggleCot,
    /// `/reset`: start over with the next message.
    Reset,
    /// `/history`: print the conversation.
    History,
    /// `/log`: print the reasoning log.
    Log,
    /// `/quit` or `/exit`.
    Quit,
    /// A slash command nobody knows.
    Unknown(&'a str),
    /// Blank input.
    Empty,
}

impl<'a> Command<'a> {
    /// Parses a raw input line.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }
        let Some(name) = line.strip_prefix('/') else {
            return Command::Prompt(line);
        };
        match name {
            "cot" => Command::ToggleCot,
            "reset" => Command::Reset,
            "history" => Command::History,
            "log" => Command::Log,
            "quit" | "exit" => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}
