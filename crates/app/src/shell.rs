use std::io::{self, BufRead, Write};

use services::{PlayError, QuizPlayService};

use crate::render::{self, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Menu,
    Quit,
}

/// Line-oriented terminal front end over a play service.
pub struct Shell<R, W> {
    input: R,
    output: W,
    style: Style,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, style: Style) -> Self {
        Self {
            input,
            output,
            style,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the terminal streams.
    pub fn run(&mut self, play: &mut QuizPlayService) -> io::Result<()> {
        loop {
            write!(self.output, "{}", render::overview(&play.overview()))?;
            let Some(choice) =
                self.prompt("\nChoose an activity by number, r to restart, q to quit: ")?
            else {
                return Ok(());
            };

            let flow = match choice.as_str() {
                "q" => Flow::Quit,
                "r" => {
                    play.restart();
                    writeln!(self.output, "All answers cleared.\n")?;
                    Flow::Menu
                }
                other => match other.parse::<u32>() {
                    Ok(order) => self.play_activity(play, order)?,
                    Err(_) => {
                        writeln!(self.output, "Unrecognised choice: {other}\n")?;
                        Flow::Menu
                    }
                },
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn play_activity(&mut self, play: &mut QuizPlayService, order: u32) -> io::Result<Flow> {
        if let Err(err) = play.set_activity(order) {
            writeln!(self.output, "{err}\n")?;
            return Ok(Flow::Menu);
        }
        if play.is_current_activity_complete() {
            self.show_report(play, order)?;
            return Ok(Flow::Menu);
        }

        loop {
            let Some(view) = play.question_view() else {
                writeln!(self.output, "{}\n", PlayError::NoCurrentQuestion)?;
                return Ok(Flow::Menu);
            };
            write!(self.output, "{}", render::question(&view, self.style))?;

            let Some(input) = self.prompt("Correct? t/f (r restart, q quit): ")? else {
                return Ok(Flow::Quit);
            };
            let answer = match input.as_str() {
                "t" | "true" => true,
                "f" | "false" => false,
                "r" => {
                    play.restart();
                    writeln!(self.output, "All answers cleared.\n")?;
                    return Ok(Flow::Menu);
                }
                "q" => return Ok(Flow::Quit),
                _ => {
                    writeln!(self.output, "Please answer t or f.")?;
                    continue;
                }
            };

            match play.answer_current(answer) {
                Ok(outcome) if outcome.activity_complete => {
                    self.show_report(play, order)?;
                    return Ok(Flow::Menu);
                }
                Ok(_) => {}
                Err(err) => {
                    writeln!(self.output, "{err}\n")?;
                    return Ok(Flow::Menu);
                }
            }
        }
    }

    fn show_report(&mut self, play: &QuizPlayService, order: u32) -> io::Result<()> {
        if let Some(report) = play.report(order) {
            writeln!(self.output, "{}", render::report(&report, self.style))?;
        }
        Ok(())
    }

    /// `None` on end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_ascii_lowercase()))
    }
}
