//! Live preview panel for the latest rendered component.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Wrap};

use crate::core::components::{
    InterviewProps, LearningProps, ProjectProps, RenderedComponent,
};

use super::super::constants::{ACCENT, ACCENT_SECONDARY};

const PANEL_TITLE: &str = " ● Live UI Result ";

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ACCENT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))
}

fn learning_lines(props: &LearningProps) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Topics")];
    for (i, topic) in props.topics.iter().enumerate() {
        let (mark, mark_style) = if props.is_topic_unlocked(i) {
            ("✓", Style::default().fg(ACCENT))
        } else {
            ("🔒", dim())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:02} ", i + 1), dim()),
            Span::styled(topic.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(mark, mark_style),
        ]));
        lines.push(Line::from(Span::styled(
            "   Master the core concepts and applications",
            dim(),
        )));
    }
    lines
}

fn interview_lines(props: &InterviewProps) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !props.tips.is_empty() {
        lines.push(heading("Strategic Tips"));
        for tip in &props.tips {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(ACCENT)),
                Span::raw(tip.clone()),
            ]));
        }
        lines.push(Line::default());
    }
    if !props.checklist.is_empty() {
        lines.push(heading("Preparation Checklist"));
        for (i, item) in props.checklist.iter().enumerate() {
            let (check, status) = if item.completed {
                ("[x]", "Task finalized and verified")
            } else {
                ("[ ]", "Action required")
            };
            let task_style = if item.completed {
                dim().add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}. ", i + 1), dim()),
                Span::styled(format!("{} ", check), Style::default().fg(ACCENT)),
                Span::styled(item.task.clone(), task_style),
            ]));
            lines.push(Line::from(Span::styled(format!("       {}", status), dim())));
        }
    }
    lines
}

fn project_lines(props: &ProjectProps) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for idea in &props.ideas {
        lines.push(Line::from(vec![
            Span::styled(
                idea.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Intelligent", Style::default().fg(ACCENT_SECONDARY)),
        ]));
        if !idea.description.is_empty() {
            lines.push(Line::from(Span::styled(idea.description.clone(), dim())));
        }
        if !idea.tech_stack.is_empty() {
            let mut chips = Vec::new();
            for tech in &idea.tech_stack {
                chips.push(Span::styled(
                    format!("[{}]", tech),
                    Style::default().fg(ACCENT),
                ));
                chips.push(Span::raw(" "));
            }
            lines.push(Line::from(chips));
        }
        lines.push(Line::default());
    }
    lines
}

/// Body lines for a component, without the badge, title or gauge.
pub(crate) fn component_lines(component: &RenderedComponent) -> Vec<Line<'static>> {
    if let Some(hint) = component.empty_hint() {
        return vec![Line::from(Span::styled(
            hint,
            dim().add_modifier(Modifier::ITALIC),
        ))];
    }
    match component {
        RenderedComponent::Learning(p) => learning_lines(p),
        RenderedComponent::Interview(p) => interview_lines(p),
        RenderedComponent::Project(p) => project_lines(p),
    }
}

/// Badge with the component name, then the panel heading.
fn header_lines(component: &RenderedComponent) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", component.badge()),
                Style::default().fg(Color::Black).bg(ACCENT_SECONDARY),
            ),
            Span::styled(format!("  {}", component.kind().name()), dim()),
        ]),
        Line::from(Span::styled(
            component.title(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ]
}

pub(crate) fn draw_preview(f: &mut Frame, component: &RenderedComponent, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT_SECONDARY))
        .title(Span::styled(PANEL_TITLE, Style::default().fg(ACCENT)));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let gauge_height = match component {
        RenderedComponent::Learning(p) if !p.topics.is_empty() => 3,
        _ => 0,
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(gauge_height),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(header_lines(component)), rows[0]);

    if let RenderedComponent::Learning(p) = component
        && gauge_height > 0
    {
        let percent = p.progress_percent();
        let gauge = Gauge::default()
            .block(Block::default().title("Overall Mastery"))
            .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
            .ratio(percent / 100.0)
            .label(format!("{:.0}%", percent));
        f.render_widget(gauge, rows[1]);
    }

    f.render_widget(
        Paragraph::new(component_lines(component)).wrap(Wrap { trim: false }),
        rows[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::components::{ChecklistItem, ProjectIdea};

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn header_names_the_component() {
        let lines = header_lines(&RenderedComponent::Interview(InterviewProps::default()));
        let text = text_of(&lines);
        assert!(text.contains("Career Prep"));
        assert!(text.contains("InterviewMode"));
        assert!(text.contains("Interview Roadmap"));
    }

    #[test]
    fn empty_component_shows_hint() {
        let lines = component_lines(&RenderedComponent::Project(ProjectProps::default()));
        assert!(text_of(&lines).contains("Looking for inspiration?"));
    }

    #[test]
    fn learning_marks_unlocked_topics() {
        let props = LearningProps {
            topics: vec!["Basics".into(), "Advanced".into()],
            progress: 40.0,
        };
        let text = text_of(&learning_lines(&props));
        assert!(text.contains("01 Basics ✓"));
        assert!(text.contains("02 Advanced 🔒"));
    }

    #[test]
    fn interview_checklist_status() {
        let props = InterviewProps {
            tips: vec!["Practice".into()],
            checklist: vec![
                ChecklistItem {
                    task: "Resume".into(),
                    completed: true,
                },
                ChecklistItem {
                    task: "Mock".into(),
                    completed: false,
                },
            ],
        };
        let text = text_of(&interview_lines(&props));
        assert!(text.contains("Strategic Tips"));
        assert!(text.contains("1. [x] Resume"));
        assert!(text.contains("Task finalized and verified"));
        assert!(text.contains("2. [ ] Mock"));
        assert!(text.contains("Action required"));
    }

    #[test]
    fn project_shows_tech_chips() {
        let props = ProjectProps {
            ideas: vec![ProjectIdea {
                title: "Todo".into(),
                description: "A list".into(),
                tech_stack: vec!["React".into(), "Vite".into()],
            }],
        };
        let text = text_of(&project_lines(&props));
        assert!(text.contains("Todo Intelligent"));
        assert!(text.contains("[React] [Vite]"));
    }
}
