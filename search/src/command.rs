//! Query input classification and slash commands.

/// Raw input classified as either search text or a slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryInput<'a> {
    /// Plain fuzzy search text.
    Search(&'a str),
    /// `/name args` form; `name` is everything up to the first space.
    Command { name: &'a str, args: &'a str },
}

impl<'a> QueryInput<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let raw = raw.trim();
        let Some(rest) = raw.strip_prefix('/') else {
            return Self::Search(raw);
        };
        match rest.split_once(' ') {
            Some((name, args)) => Self::Command { name, args },
            None => Self::Command {
                name: rest,
                args: "",
            },
        }
    }
}

/// A recognized (or not) slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `t <tag>`: add a tag to the active filter set.
    AddFilter(String),
    /// `r [count]`: list `count` random items.
    Random(usize),
    /// Anything else; observable as a no-op.
    Unknown,
}

impl Command {
    /// Interprets a parsed command.
    ///
    /// A missing, non-numeric, zero or negative `r` count falls back to
    /// `default_count`; argument problems never surface as errors.
    pub fn parse(name: &str, args: &str, default_count: usize) -> Self {
        match name {
            "t" => Self::AddFilter(args.trim().to_string()),
            "r" => {
                let count = match args.trim().parse::<i64>() {
                    Ok(n) if n > 0 => n as usize,
                    _ => default_count,
                };
                Self::Random(count)
            }
            _ => Self::Unknown,
        }
    }
}

/// Extracts the partial tag of an un-submitted `/t …` input, for
/// autocomplete. `None` when the input is not a `t` command or the
/// partial tag is still blank.
pub(crate) fn tag_prefix(raw: &str) -> Option<&str> {
    match QueryInput::parse(raw) {
        QueryInput::Command { name: "t", args } => {
            let partial = args.trim();
            (!partial.is_empty()).then_some(partial)
        }
        _ => None,
    }
}
