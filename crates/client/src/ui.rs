//! Ratatui view of the player's current hall.
//!
//! The layout mirrors the corridor itself: one glyph row flanked by `#`
//! walls, a telegraph row above it previewing each enemy's next action, and
//! status lines below. The shop renders as a centered overlay; death
//! replaces the hint line with the restart banner.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use corridor_core::{Facing, GameState, Hall, TelegraphStyle, TileKind, enemy_at};
use corridor_runtime::{GameSession, SessionFlow};

pub fn render(frame: &mut Frame, session: &GameSession, message: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // level and room
        Constraint::Length(1),
        Constraint::Length(1), // telegraphs
        Constraint::Length(1), // the hall
        Constraint::Length(1),
        Constraint::Length(1), // hearts and gold
        Constraint::Length(1), // inventory
        Constraint::Length(1), // hint or message
        Constraint::Min(0),
        Constraint::Length(1), // key help
    ])
    .split(frame.area());

    let state = session.state();
    let Some(hall) = state.current_hall() else {
        return;
    };

    fn centered(paragraph: Paragraph<'_>) -> Paragraph<'_> {
        paragraph.alignment(Alignment::Center)
    }

    frame.render_widget(
        centered(Paragraph::new(format!(
            "Level {} - Room {}",
            state.current_level,
            hall.id + 1
        ))),
        chunks[0],
    );
    frame.render_widget(centered(telegraph_row(session, state, hall)), chunks[2]);
    frame.render_widget(centered(hall_row(session, state, hall)), chunks[3]);
    frame.render_widget(centered(status_line(state)), chunks[5]);
    frame.render_widget(centered(inventory_line(session, state)), chunks[6]);
    frame.render_widget(centered(hint_line(session, state, message)), chunks[7]);
    frame.render_widget(
        centered(
            Paragraph::new("\u{2190}/\u{2192} move  \u{2191} attack  \u{2193} interact  e item  q quit")
                .style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[9],
    );

    if session.flow() == SessionFlow::Shopping {
        shop_overlay(frame, session);
    }
}

fn hall_row(session: &GameSession, state: &GameState, hall: &Hall) -> Paragraph<'static> {
    let wall = Span::styled("#", Style::default().fg(Color::DarkGray));
    let mut spans = vec![wall.clone()];
    for pos in hall.positions() {
        if pos == state.player.pos {
            spans.push(Span::styled(
                "@",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if let Some(enemy) = enemy_at(&state.enemies, pos) {
            let glyph = session
                .oracles()
                .enemies()
                .definition(&enemy.type_id)
                .map_or('?', |def| def.glyph);
            spans.push(Span::styled(
                glyph.to_string(),
                Style::default().fg(Color::Red),
            ));
        } else {
            spans.push(tile_span(session, state, pos));
        }
    }
    spans.push(wall);
    Paragraph::new(Line::from(spans))
}

fn tile_span(session: &GameSession, state: &GameState, pos: usize) -> Span<'static> {
    let kind = state.dungeon[pos].kind();
    let glyph = session
        .oracles()
        .tiles()
        .definition(kind)
        .map_or(' ', |def| def.glyph);
    let color = match kind {
        TileKind::Door => Color::Cyan,
        TileKind::Stairs => Color::Green,
        TileKind::Gold => Color::Yellow,
        TileKind::Floor | TileKind::Wall => Color::DarkGray,
    };
    Span::styled(glyph.to_string(), Style::default().fg(color))
}

/// One cell per hall position: the player's facing arrow, each enemy's next
/// action, blanks elsewhere.
fn telegraph_row(session: &GameSession, state: &GameState, hall: &Hall) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(" ")];
    for pos in hall.positions() {
        if pos == state.player.pos {
            let arrow = match state.player.facing {
                Facing::Right => "\u{2192}",
                Facing::Left => "\u{2190}",
            };
            spans.push(Span::styled(arrow, Style::default().fg(Color::Yellow)));
        } else if let Some(enemy) = enemy_at(&state.enemies, pos) {
            let telegraph = session
                .oracles()
                .enemies()
                .definition(&enemy.type_id)
                .map(|def| def.behavior.telegraph(enemy, state.player.pos));
            match telegraph {
                Some(telegraph) => {
                    let style = match telegraph.style {
                        TelegraphStyle::Attack => Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                        TelegraphStyle::Move => Style::default().fg(Color::DarkGray),
                    };
                    spans.push(Span::styled(telegraph.glyph.to_string(), style));
                }
                None => spans.push(Span::raw(" ")),
            }
        } else {
            spans.push(Span::raw(" "));
        }
    }
    spans.push(Span::raw(" "));
    Paragraph::new(Line::from(spans))
}

fn status_line(state: &GameState) -> Paragraph<'static> {
    let hp = state.player.hp.max(0) as usize;
    let max = state.player.max_hp.max(0) as usize;
    let spans = vec![
        Span::styled("\u{2665}".repeat(hp), Style::default().fg(Color::Red)),
        Span::styled(
            "\u{2665}".repeat(max.saturating_sub(hp)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}g", state.player.gold),
            Style::default().fg(Color::Yellow),
        ),
    ];
    Paragraph::new(Line::from(spans))
}

fn inventory_line(session: &GameSession, state: &GameState) -> Paragraph<'static> {
    if state.player.items.is_empty() {
        return Paragraph::new("");
    }
    let glyphs: Vec<String> = state
        .player
        .items
        .iter()
        .map(|id| {
            session
                .oracles()
                .items()
                .definition(id)
                .map_or_else(|| id.clone(), |def| def.glyph.to_string())
        })
        .collect();
    Paragraph::new(Line::from(Span::styled(
        format!("items: {}", glyphs.join(" ")),
        Style::default().fg(Color::Cyan),
    )))
}

/// Priority: death banner, transient message, turn notice, tile hint.
fn hint_line(
    session: &GameSession,
    state: &GameState,
    message: Option<&str>,
) -> Paragraph<'static> {
    if state.player.is_dead() {
        return Paragraph::new("You died! Press Enter to restart.")
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
    }
    if let Some(message) = message {
        return Paragraph::new(message.to_string()).style(Style::default().fg(Color::White));
    }
    if state.last_action_was_turn {
        let dir = match state.player.facing {
            Facing::Right => "right",
            Facing::Left => "left",
        };
        return Paragraph::new(format!("Turned to face {dir}"))
            .style(Style::default().fg(Color::DarkGray));
    }
    let hint = state
        .dungeon
        .get(state.player.pos)
        .and_then(|tile| session.oracles().tiles().definition(tile.kind()))
        .map(|def| def.hint.clone())
        .unwrap_or_default();
    Paragraph::new(hint).style(Style::default().fg(Color::DarkGray))
}

fn shop_overlay(frame: &mut Frame, session: &GameSession) {
    let shop = session.shop();
    let state = session.state();
    let height = shop.offers().len() as u16 + 5;
    let area = center(frame.area(), 44, height);

    let mut lines: Vec<Line> = Vec::new();
    for (index, offer) in shop.offers().iter().enumerate() {
        lines.push(menu_line(
            index == shop.cursor(),
            format!("{} {}  ({}g)", offer.glyph, offer.name, offer.cost),
        ));
    }
    lines.push(menu_line(shop.on_leave(), "Leave".to_string()));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("Gold: {}", state.player.gold),
        Style::default().fg(Color::Yellow),
    ));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Shop ")
                .title_alignment(Alignment::Center),
        ),
        area,
    );
}

fn menu_line(selected: bool, text: String) -> Line<'static> {
    if selected {
        Line::styled(
            format!("> {text}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Line::raw(format!("  {text}"))
    }
}

fn center(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
