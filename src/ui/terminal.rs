use crate::app::{App, AppEvent, AppMode};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::report::ReportRenderer;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "recite> ";

/// Line-oriented practice loop over any reader/writer pair.
pub struct PromptSession<R, W> {
    input: R,
    output: W,
    renderer: ReportRenderer,
}

impl<R: BufRead, W: Write> PromptSession<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            renderer: ReportRenderer::new(color),
        }
    }

    /// Runs until `:q` or end of input. Returns the final mode.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        let intro = app.handle_event(AppEvent::ShowSentence);
        write!(self.output, "{}", self.renderer.render(&intro))?;

        let mut line = String::new();
        loop {
            if app.mode == AppMode::Quit {
                return Ok(AppMode::Quit);
            }

            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(app.mode);
            }

            // Blank lines just re-prompt
            if line.trim().is_empty() {
                continue;
            }

            let event = command_to_app_event(parse_command(&line));
            let response = app.handle_event(event);
            write!(self.output, "{}", self.renderer.render(&response))?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
