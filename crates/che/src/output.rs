//! Terminal output utilities

use std::io::Write;

use console::style;

/// Output and error streams for user-facing messages
///
/// Write failures are ignored: there is nowhere left to report them.
pub struct Console<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// The output stream, for components that write their own progress
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Print plain text as-is
    pub fn print(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
        if !text.ends_with('\n') {
            let _ = writeln!(self.out);
        }
    }

    /// Print plain text to the error stream as-is
    pub fn eprint(&mut self, text: &str) {
        let _ = write!(self.err, "{}", text);
        if !text.ends_with('\n') {
            let _ = writeln!(self.err);
        }
    }

    /// Print an error message
    pub fn error(&mut self, msg: &str) {
        let _ = writeln!(self.err, "{}", style(msg).red().bold());
    }

    /// Print a de-emphasised notice
    pub fn notice(&mut self, msg: &str) {
        let _ = writeln!(self.out, "{}", style(msg).dim());
    }

    /// Report a command that is not registered
    pub fn unknown_command(&mut self, input: &str) {
        let _ = writeln!(
            self.out,
            "{} {}{}",
            style("  Unknown command").red().bold(),
            style(input).yellow(),
            style(".").red().bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streams_are_separate() {
        console::set_colors_enabled(false);
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();

        let mut console = Console::new(&mut out, &mut err);
        console.print("help text");
        console.error("boom");

        assert_eq!(String::from_utf8(out).unwrap(), "help text\n");
        assert_eq!(String::from_utf8(err).unwrap(), "boom\n");
    }

    #[test]
    fn test_unknown_command_echoes_input() {
        console::set_colors_enabled(false);
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();

        Console::new(&mut out, &mut err).unknown_command("build --fast");

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  Unknown command build --fast.\n"
        );
    }
}
