use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use crate::presentation::view_models::{CommandResultViewModel, CreateView, ViewOptions};
use crate::types::OutputFormat;

/// Writes a command result to stdout as pretty JSON or laid-out text.
pub struct ConsoleRenderer {
    format: OutputFormat,
    options: ViewOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            format,
            options: ViewOptions { color },
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn render<T>(&self, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, result)?;
        out.flush()?;
        Ok(())
    }

    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.is_json() {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            let label = if self.options.color {
                badge.label.bold().to_string()
            } else {
                badge.label.clone()
            };
            writeln!(out, "{} {}", badge.icon(), label)?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            let heading = if self.options.color {
                "Tips:".yellow().bold().to_string()
            } else {
                "Tips:".to_string()
            };
            writeln!(out, "\n{}", heading)?;
            for tip in &result.suggestions {
                if self.options.color {
                    writeln!(out, "  • {}: {}", tip.description, tip.command.cyan())?;
                } else {
                    writeln!(out, "  • {}: {}", tip.description, tip.command)?;
                }
            }
        }

        Ok(())
    }
}
