use crate::app::state::CardFace;
use crate::app::App;
use crate::ui::widgets::spinner::render_spinner;
use crate::ui::widgets::stat_bars::stat_line;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tachyonfx::EffectRenderer;

const BAR_WIDTH: u16 = 16;

pub fn render_details(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let Some(alien) = app.selected_alien().cloned() else {
        let paragraph = Paragraph::new("No subject selected")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    };

    // Centered flip-card
    let card_area = Rect {
        x: area.width.saturating_sub(52) / 2,
        y: area.height.saturating_sub(22) / 2,
        width: 52.min(area.width),
        height: 22.min(area.height),
    };

    match app.card_face {
        CardFace::Front => render_front(app, &alien, f, card_area),
        CardFace::Back => render_back(app, &alien, f, card_area),
    }

    render_footer(app, f, area);
}

fn render_front(app: &App, alien: &crate::data::models::Alien, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Subject: {} ", alien.name))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("Species: ", Style::default().fg(Color::Gray)),
            Span::styled(
                alien.species.clone().unwrap_or_else(|| "(unknown)".to_string()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        TextLine::from(vec![
            Span::styled("Archive image: ", Style::default().fg(Color::Gray)),
            Span::styled(alien.image.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        TextLine::from(""),
    ];

    lines.push(stat_line("STR", alien.strength, BAR_WIDTH, Color::Cyan));
    lines.push(stat_line("SPD", alien.speed, BAR_WIDTH, Color::Cyan));
    lines.push(stat_line("INT", alien.intelligence, BAR_WIDTH, Color::Cyan));
    lines.push(stat_line("DUR", alien.durability, BAR_WIDTH, Color::Cyan));

    if let Some(energy) = alien.energy {
        lines.push(stat_line("NRG", energy, BAR_WIDTH, Color::DarkGray));
    }
    if let Some(agility) = alien.agility {
        lines.push(stat_line("AGI", agility, BAR_WIDTH, Color::DarkGray));
    }

    lines.push(TextLine::from(""));
    let blink = (app.animation_counter * 2.0).sin() > 0.0;
    lines.push(TextLine::from(Span::styled(
        "[ f: flip for full profile ]",
        Style::default().fg(if blink { Color::Cyan } else { Color::Gray }),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_back(app: &mut App, alien: &crate::data::models::Alien, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(" Profile: {} ", alien.name))
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.detail_loading {
        let spinner_area = Rect {
            x: inner.x,
            y: inner.y + inner.height / 2,
            width: inner.width,
            height: 1,
        };
        render_spinner(
            f,
            spinner_area,
            &mut app.throbber_state,
            "Contacting catalog service...",
        );
        return;
    }

    if let Some(error) = &app.detail_error {
        let lines = vec![
            TextLine::from(Span::styled(
                "UNABLE TO LOAD SUBJECT PROFILE",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            TextLine::from(""),
            TextLine::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Gray),
            )),
            TextLine::from(""),
            TextLine::from(Span::styled(
                "[ f: flip back ]",
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, inner);
        return;
    }

    let Some(detail) = &app.detail else {
        return;
    };

    let mut lines = vec![
        TextLine::from(vec![
            Span::styled("Origin: ", Style::default().fg(Color::Gray)),
            Span::styled(
                detail.original_name.clone(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        TextLine::from(""),
    ];

    lines.push(stat_line("STR", detail.stats.strength, BAR_WIDTH, Color::Magenta));
    lines.push(stat_line("SPD", detail.stats.speed, BAR_WIDTH, Color::Magenta));
    lines.push(stat_line("INT", detail.stats.intelligence, BAR_WIDTH, Color::Magenta));
    lines.push(stat_line("DUR", detail.stats.durability, BAR_WIDTH, Color::Magenta));
    lines.push(stat_line("PWR", detail.stats.power, BAR_WIDTH, Color::Magenta));
    lines.push(stat_line("CMB", detail.stats.combat, BAR_WIDTH, Color::Magenta));

    lines.push(TextLine::from(""));
    if detail.super_powers.is_empty() {
        lines.push(TextLine::from(Span::styled(
            "No recorded powers",
            Style::default().fg(Color::Gray),
        )));
    } else {
        lines.push(TextLine::from(Span::styled(
            format!("POWERS ({})", detail.super_powers.len()),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        )));
        lines.push(TextLine::from(Span::styled(
            detail.super_powers.join(" · "),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "[ f: flip back ]",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);

    let last_tick = app.last_tick;
    if let Some(effect) = app.completion_fx.as_mut() {
        let buffer = f.buffer_mut();
        buffer.render_effect(effect, inner, last_tick);
    }
}

fn render_footer(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let mut spans = vec![
        Span::styled("f/Enter", key_style),
        Span::styled(": Flip | ", text_style),
        Span::styled("s", key_style),
        Span::styled(": Similarity | ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(": Gallery", text_style),
    ];

    if !app.status_message.is_empty() {
        spans.push(Span::styled("   ", text_style));
        spans.push(Span::styled(
            app.status_message.clone(),
            Style::default().fg(Color::Green),
        ));
    }

    let footer_area = Rect {
        x: area.x,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, footer_area);
}
