use crate::model::{Applicability, PropertyDef};
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

// Brandbook colors
#[allow(dead_code)]
const BRAND_BG: Color = Color::Rgb(0xED, 0xED, 0xED); // #ededed - tło
const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C); // #1f2f3c - główny ciemny
#[allow(dead_code)]
const BRAND_ACCENT: Color = Color::Rgb(0x58, 0x6B, 0x71); // #586b71 - akcent niebieski (reserved)
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0); // #c3d3e0 - tło zaznaczenia
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // #829a68 - zielony (count)
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // #9e683c - pomarańczowy (focus)
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // #716565 - przygaszony (footer)

// Styles
const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const INSTANCE_COLOR: Color = BRAND_GREEN;
const TYPE_COLOR: Color = BRAND_ORANGE;

const MODE_LABELS: &[&str] = &["All", "Instance", "Type"];

fn mode_color(applicability: Applicability) -> Color {
    match applicability {
        Applicability::Instance => INSTANCE_COLOR,
        Applicability::Type => TYPE_COLOR,
    }
}

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        " ←→ Panel | ↑↓ Navigate | Enter Details | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(
        " Pset Inspector | {} | {} sets | {} properties ",
        app.mapping.file_path,
        app.mapping.total_sets(),
        app.mapping.total_properties()
    );

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(15), // Applicability modes
        Constraint::Percentage(35), // Property sets
        Constraint::Percentage(50), // Properties
    ])
    .split(area);

    draw_modes(frame, chunks[0], app);
    draw_sets(frame, chunks[1], app);
    draw_properties(frame, chunks[2], app);
}

fn draw_modes(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Modes;

    let filters = [
        None,
        Some(Applicability::Instance),
        Some(Applicability::Type),
    ];

    let items: Vec<ListItem> = MODE_LABELS
        .iter()
        .zip(filters)
        .enumerate()
        .map(|(i, (label, filter))| {
            let is_selected = i == app.selected_mode;

            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if is_selected && is_focused { " ◄" } else { "" };

            let count = app.get_mode_count(filter);

            let content = Line::from(vec![
                Span::styled(*label, style),
                Span::styled(format!(" {count}"), Style::default().fg(BRAND_MUTED)),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]);

            ListItem::new(content)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Applicability ")
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

fn draw_sets(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Sets;

    let filtered_sets = app.get_filtered_sets();

    let items: Vec<ListItem> = filtered_sets
        .iter()
        .enumerate()
        .map(|(i, set)| {
            let is_selected = i == app.selected_set;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let marker = if is_selected && is_focused { " ◄" } else { "" };

            let content = Line::from(vec![
                Span::styled(
                    format!("[{}] ", set.applicability.code()),
                    Style::default().fg(mode_color(set.applicability)),
                ),
                Span::styled(&set.name, style),
                Span::raw(" "),
                Span::styled(
                    format!("({})", set.properties.len()),
                    Style::default().fg(BRAND_GREEN),
                ),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]);

            ListItem::new(content)
        })
        .collect();

    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    let title = format!(" Property Sets ({}) ", filtered_sets.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(list, area);
}

fn draw_properties(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Properties;

    let (set_name, properties): (String, &[PropertyDef]) = match app.get_selected_set() {
        Some(s) => (s.name.clone(), &s.properties),
        None => (String::new(), &[]),
    };

    // Calculate visible area (subtract 3 for borders and header)
    let visible_rows = (area.height as usize).saturating_sub(3);

    // Calculate scroll offset to keep selected item visible
    let scroll_offset = if app.selected_property >= visible_rows {
        app.selected_property - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["Property", "Data Type", "Source Field"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = properties
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, property)| {
            let is_selected = i == app.selected_property;
            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                property.name.clone(),
                property.data_type.as_str().to_string(),
                property.source_field().to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Percentage(35),
    ];

    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    let title = format!(" {} ({} properties) ", set_name, properties.len());
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );

    frame.render_widget(table, area);

    // Draw scrollbar if needed
    if properties.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(properties.len()).position(app.selected_property);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

pub fn draw_set_detail(frame: &mut Frame, app: &App) {
    let set = match app.get_selected_set() {
        Some(s) => s,
        None => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: Set name
        Constraint::Length(3), // Info: Applicability | Categories | Properties
        Constraint::Length(3), // Category strip
        Constraint::Min(6),    // Properties (scrollable)
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    // Header - Set name
    let header = Paragraph::new(format!(" Property Set: {} ", set.name))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // Info line
    let info_text = format!(
        "Applicability: {}  |  Categories: {}  |  Properties: {}",
        set.applicability.label(),
        set.categories.len(),
        set.properties.len()
    );
    let info_widget = Paragraph::new(info_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info_widget, chunks[1]);

    // Category strip - selected category is the resolve target
    let mut spans: Vec<Span> = Vec::new();
    for (i, category) in set.categories.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if i == app.selected_category {
            SELECTED_STYLE
        } else {
            Style::default().fg(mode_color(set.applicability))
        };
        spans.push(Span::styled(category.as_str(), style));
    }
    let categories_widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL),
    );
    frame.render_widget(categories_widget, chunks[2]);

    // Properties table (scrollable)
    let visible_props = (chunks[3].height as usize).saturating_sub(3);

    let rows: Vec<Row> = set
        .properties
        .iter()
        .skip(app.detail_scroll_offset)
        .take(visible_props)
        .map(|property| {
            let alias_marker = if property.alias.is_some() { "alias" } else { "" };
            Row::new(vec![
                property.name.clone(),
                property.data_type.as_str().to_string(),
                property.source_field().to_string(),
                alias_marker.to_string(),
            ])
        })
        .collect();

    let prop_widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(20),
        Constraint::Percentage(35),
        Constraint::Percentage(10),
    ];
    let prop_header = Row::new(vec!["Property", "Data Type", "Source Field", ""]).style(HEADER_STYLE);

    let prop_table = Table::new(rows, prop_widths).header(prop_header).block(
        Block::default()
            .title(format!(" Properties ({}) ", set.properties.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(prop_table, chunks[3]);

    // Scrollbar if needed
    if set.properties.len() > visible_props {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(set.properties.len()).position(app.detail_scroll_offset);

        let scrollbar_area = Rect {
            x: chunks[3].x + chunks[3].width - 1,
            y: chunks[3].y + 2,
            width: 1,
            height: chunks[3].height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Footer
    draw_footer(
        frame,
        chunks[4],
        " Esc Back | ↑↓ Scroll | ←→ Category | Enter Resolve | q Quit ",
    );
}

pub fn draw_category_resolve(frame: &mut Frame, app: &App) {
    let set = match app.get_selected_set() {
        Some(s) => s,
        None => return,
    };
    let category = match app.get_selected_category() {
        Some(c) => c.to_string(),
        None => return,
    };

    let resolved = app.get_resolved();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Resolved property list
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    // Header
    let header = Paragraph::new(format!(
        " Resolved for: {} ({} mode, {} properties) ",
        category,
        set.applicability.label(),
        resolved.len()
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    // Resolved list - every set contributing to this category/mode pair
    let visible_rows = (chunks[1].height as usize).saturating_sub(3);

    let resolve_header = Row::new(vec!["Property Set", "Property", "Data Type", "Source Field"])
        .style(HEADER_STYLE)
        .height(1);

    let resolve_rows: Vec<Row> = resolved
        .iter()
        .enumerate()
        .skip(app.resolve_scroll_offset)
        .take(visible_rows)
        .map(|(i, entry)| {
            let style = if i == app.resolve_scroll_offset {
                SELECTED_STYLE
            } else {
                Style::default()
            };

            Row::new(vec![
                entry.set.clone(),
                entry.name.clone(),
                entry.data_type.as_str().to_string(),
                entry.source_field.clone(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
        Constraint::Percentage(25),
    ];

    let resolve_table = Table::new(resolve_rows, widths)
        .header(resolve_header)
        .block(
            Block::default()
                .title(" Resolved Properties ")
                .borders(Borders::ALL),
        );
    frame.render_widget(resolve_table, chunks[1]);

    // Scrollbar
    if resolved.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state =
            ScrollbarState::new(resolved.len()).position(app.resolve_scroll_offset);

        let scrollbar_area = Rect {
            x: chunks[1].x + chunks[1].width - 1,
            y: chunks[1].y + 2,
            width: 1,
            height: chunks[1].height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }

    // Footer
    draw_footer(
        frame,
        chunks[2],
        " Esc Back to Set | ↑↓ Navigate | q Quit ",
    );
}
