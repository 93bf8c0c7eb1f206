use serde::Serialize;

/// Rendering switches that only affect plain-text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub color: bool,
}

/// One-line outcome shown above a command's content.
#[derive(Debug, Clone, Serialize)]
pub struct StatusBadge {
    pub level: StatusLevel,
    pub label: String,
}

impl StatusBadge {
    pub fn new(level: StatusLevel, label: impl Into<String>) -> Self {
        Self {
            level,
            label: label.into(),
        }
    }

    pub fn success(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, label)
    }

    pub fn info(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, label)
    }

    pub fn warning(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Warning, label)
    }

    pub fn error(label: impl Into<String>) -> Self {
        Self::new(StatusLevel::Error, label)
    }

    pub fn icon(&self) -> &'static str {
        self.level.icon()
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn icon(self) -> &'static str {
        match self {
            StatusLevel::Success => "✅",
            StatusLevel::Info => "ℹ️",
            StatusLevel::Warning => "⚠️",
            StatusLevel::Error => "❌",
        }
    }
}

/// A follow-up the user can type next: a browse command or a shell invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Guidance {
    pub description: String,
    pub command: String,
}

impl Guidance {
    pub fn new(description: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            command: command.into(),
        }
    }
}
