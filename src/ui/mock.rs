//! Mock UI for tests.

use crate::ui::{OutputMode, UserInterface};

/// A UI that records output instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    pub mode: OutputMode,
    pub messages: Vec<String>,
    pub successes: Vec<String>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl MockUI {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_records_each_channel() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        assert_eq!(ui.messages, vec!["m"]);
        assert_eq!(ui.successes, vec!["s"]);
        assert_eq!(ui.warnings, vec!["w"]);
        assert_eq!(ui.errors, vec!["e"]);
    }
}
