use console::{Style, Term};
use packsmith_core::{LogSink, LogStyle};

/// Writes styled log lines to a terminal. Colors are dropped when the
/// terminal does not support them.
pub struct ConsoleSink {
    term: Term,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

pub fn style_for(style: LogStyle) -> Style {
    match style {
        LogStyle::Dim => Style::new().dim(),
        LogStyle::Alert => Style::new().red(),
        LogStyle::BoldAlert => Style::new().red().bold(),
    }
}

impl LogSink for ConsoleSink {
    fn blank_line(&mut self) {
        let _ = self.term.write_line("");
    }

    fn styled_line(&mut self, text: &str, style: LogStyle) {
        let _ = self
            .term
            .write_line(&style_for(style).apply_to(text).to_string());
    }
}
