use std::fmt;

pub mod config;
pub mod copy;
pub mod delete;
pub mod edit;
pub mod print;
pub mod run;

/// The five things you can do to a snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Run,
    Print,
    Copy,
    Edit,
    Delete,
}

impl Action {
    /// Menu order for the interactive selector.
    pub const ALL: [Action; 5] = [
        Action::Run,
        Action::Print,
        Action::Copy,
        Action::Edit,
        Action::Delete,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::Run => "Run",
            Action::Print => "Print",
            Action::Copy => "Copy",
            Action::Edit => "Edit",
            Action::Delete => "Delete",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, rendered by the CLI layer.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Verbatim snippet content to print (the `print` action)
    pub content: Option<String>,
    /// Key/value pairs to list (the `config` command)
    pub entries: Vec<(String, String)>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_content(mut self, content: String) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_entries(mut self, entries: Vec<(String, String)>) -> Self {
        self.entries = entries;
        self
    }
}
