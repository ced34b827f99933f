use std::io::IsTerminal;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use services::{ActivityReport, QuestionView, QuizOverview};

/// How emphasised text is marked in terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Ansi,
    Plain,
}

impl Style {
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Style::Ansi
        } else {
            Style::Plain
        }
    }

    fn open(self) -> &'static str {
        match self {
            Style::Ansi => "\x1b[1m",
            Style::Plain => "*",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Style::Ansi => "\x1b[0m",
            Style::Plain => "*",
        }
    }
}

/// Render markdown emphasis (`*word*`) as bold; all other markup is flattened
/// to its text.
#[must_use]
pub fn emphasis(input: &str, style: Style) -> String {
    let mut out = String::with_capacity(input.len());
    let mut paragraphs = 0_usize;

    for event in Parser::new(input) {
        match event {
            Event::Start(Tag::Paragraph) => {
                if paragraphs > 0 {
                    out.push('\n');
                }
                paragraphs += 1;
            }
            Event::Start(Tag::Emphasis | Tag::Strong) => out.push_str(style.open()),
            Event::End(TagEnd::Emphasis | TagEnd::Strong) => out.push_str(style.close()),
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
    out
}

#[must_use]
pub fn overview(overview: &QuizOverview) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", overview.name));
    if !overview.heading.is_empty() {
        out.push_str(&format!("{}\n", overview.heading));
    }
    out.push('\n');

    for item in &overview.activities {
        let status = if item.is_complete { "  [done]" } else { "" };
        out.push_str(&format!(
            "  {}. {} ({}/{} answered){status}\n",
            item.order, item.name, item.answered, item.question_count
        ));
    }
    out
}

#[must_use]
pub fn question(view: &QuestionView, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", view.activity_name));
    if let Some(round) = &view.round {
        out.push_str(&format!(
            "{} (question {} of {})\n",
            round.title, round.question_number, round.question_count
        ));
    }
    out.push_str(&format!("  {}\n", emphasis(&view.stimulus, style)));
    out
}

#[must_use]
pub fn report(report: &ActivityReport, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "\nResults for {}: {} of {} correct\n",
        report.name, report.correct, report.total
    ));

    let mut round_title: Option<&str> = None;
    for line in &report.lines {
        if line.round_title.as_deref() != round_title {
            round_title = line.round_title.as_deref();
            if let Some(title) = round_title {
                out.push_str(&format!("  {title}\n"));
            }
        }

        let number = line
            .position
            .round_question()
            .unwrap_or_else(|| line.position.entry());
        let mark = if line.was_correct { "correct" } else { "wrong  " };
        let indent = if round_title.is_some() { "    " } else { "  " };
        out.push_str(&format!(
            "{indent}Q{number}  {mark}  {}\n",
            emphasis(&line.stimulus, style)
        ));
        if let Some(feedback) = &line.feedback {
            out.push_str(&format!("{indent}          {}\n", emphasis(feedback, style)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use quiz_core::Quiz;
    use services::QuizPlayService;

    #[test]
    fn emphasis_becomes_bold() {
        assert_eq!(
            emphasis("I really enjoy *to play football* with friends.", Style::Ansi),
            "I really enjoy \x1b[1mto play football\x1b[0m with friends."
        );
    }

    #[test]
    fn plain_style_keeps_markers() {
        assert_eq!(
            emphasis("Watching films is *more cheaper*.", Style::Plain),
            "Watching films is *more cheaper*."
        );
        assert_eq!(emphasis("no markup", Style::Plain), "no markup");
    }

    #[test]
    fn report_groups_round_lines() {
        let quiz = Quiz::from_json(services::SAMPLE_QUIZ_JSON).unwrap();
        let mut play = QuizPlayService::new(Arc::new(quiz));
        play.set_activity(2).unwrap();
        play.answer_current(false).unwrap();
        play.answer_current(true).unwrap();

        let text = report(&play.report(2).unwrap(), Style::Plain);
        assert!(text.contains("Results for Activity Two: 1 of 4 correct"));
        assert!(text.contains("  Round 1\n"));
        assert!(text.contains("    Q1  correct  "));
        assert!(text.contains("    Q2  wrong    "));
        assert!(!text.contains("Round 2"));
    }

    #[test]
    fn overview_marks_completed_activities() {
        let quiz = Quiz::from_json(services::SAMPLE_QUIZ_JSON).unwrap();
        let mut play = QuizPlayService::new(Arc::new(quiz));
        play.set_activity(1).unwrap();
        for _ in 0..5 {
            play.answer_current(true).unwrap();
        }

        let text = overview(&play.overview());
        assert!(text.starts_with("Error Find\n"));
        assert!(text.contains("  1. Activity One (5/5 answered)  [done]"));
        assert!(text.contains("  2. Activity Two (0/4 answered)\n"));
    }
}
