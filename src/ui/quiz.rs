use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, QuestionOption};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_question_text(frame, chunks[1], app.current_question_number(), &question.text);

    let answer = app.session().answer(app.session().current_index());
    render_options(frame, chunks[2], question, answer, app.selected_option());
    render_controls(frame, chunks[3], app);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}/{}  ·  answered {}",
        app.current_question_number(),
        app.total_questions(),
        app.session().answered_count()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, number: usize, text: &str) {
    let widget = Paragraph::new(format!("{}. {}", number, text))
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold()
        .block(Block::default().borders(Borders::BOTTOM).border_style(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<&str>,
    selected: usize,
) {
    let correct = question.correct_letter();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(option, answer, correct, index == selected);
        let marker = if answer.is_none() && index == selected {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}) ", option.letter), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Before answering the cursor is highlighted. Afterwards the chosen option
/// is green or red and the expected option is green.
fn option_style(
    option: &QuestionOption,
    answer: Option<&str>,
    correct: Option<&str>,
    is_selected: bool,
) -> Style {
    let letter = option.letter.as_str();
    match answer {
        None if is_selected => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
        Some(given) if given == letter && option.is_correct => {
            Style::default().fg(Color::Green).bold()
        }
        Some(given) if given == letter => Style::default().fg(Color::Red).bold(),
        Some(_) if correct == Some(letter) => Style::default().fg(Color::Green),
        Some(_) => Style::default().fg(Color::DarkGray),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.session().can_submit() {
        "s submit  ·  h/l question  ·  ? notes  ·  q quit"
    } else {
        "j/k option  ·  enter answer  ·  h/l question  ·  ? notes  ·  q quit"
    };
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
