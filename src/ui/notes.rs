use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

const NOTES: [&str; 7] = [
    "Start every question on its own line with \"Q:\".",
    "Put each option on the following lines as \"A) text\", \"B) text\", ...",
    "Mark the correct option with a leading \"*\", e.g. \"*B) text\".",
    "Lines before the first \"Q:\" are ignored.",
    "Questions are shuffled for every attempt.",
    "Your first answer to a question is final.",
    "A question without options cannot be answered and never scores.",
];

pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 70, 15);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "IMPORTANT NOTES",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];
    lines.extend(NOTES.iter().map(|note| {
        Line::from(vec![
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(*note, Style::default().fg(Color::Gray)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from("esc close".fg(Color::DarkGray)).alignment(Alignment::Center));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Cyan)
            .padding(Padding::horizontal(1)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}
