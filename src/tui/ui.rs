use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::{FavoriteRecord, Meal};
use crate::state::contains_meal;

use super::app::{MealApp, Screen};

pub(crate) fn render(app: &MealApp, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_screen_bar(app.screen, frame, chunks[0]);

    match app.screen {
        Screen::Random => render_random(app, frame, chunks[1]),
        Screen::Search => render_search(app, frame, chunks[1]),
        Screen::Favorites => render_favorites(app, frame, chunks[1]),
    }

    render_footer(app.screen, frame, chunks[2]);
}

fn render_screen_bar(current: Screen, frame: &mut Frame, area: Rect) {
    let tab = |label: &str, screen: Screen| {
        if screen == current {
            Span::styled(
                format!(" {label} "),
                Style::default().add_modifier(Modifier::REVERSED),
            )
        } else {
            Span::raw(format!(" {label} "))
        }
    };

    let bar = Line::from(vec![
        tab("Random", Screen::Random),
        tab("Search", Screen::Search),
        tab("Favorites", Screen::Favorites),
    ]);
    frame.render_widget(Paragraph::new(bar), area);
}

fn render_footer(screen: Screen, frame: &mut Frame, area: Rect) {
    let hints = match screen {
        Screen::Random => "Tab: switch | r: new random meal | f: toggle favorite | q/Esc: quit",
        Screen::Search => {
            "Tab: switch | type + Enter: search | Up/Down: select | Right: toggle favorite | Esc: quit"
        }
        Screen::Favorites => "Tab: switch | Up/Down: select | d: remove favorite | q/Esc: quit",
    };

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}

fn render_random(app: &MealApp, frame: &mut Frame, area: Rect) {
    if app.random.loading {
        frame.render_widget(
            Paragraph::new("Loading a random meal...")
                .block(Block::default().borders(Borders::ALL).title("Random Meal")),
            area,
        );
        return;
    }

    if let Some(error) = &app.random.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title("Random Meal")),
            area,
        );
        return;
    }

    match &app.random.meal {
        Some(meal) => {
            let favorited = contains_meal(&app.favorites_rx.borrow(), &meal.meal_id);
            render_meal(meal, favorited, "Random Meal", frame, area);
        }
        None => frame.render_widget(
            Paragraph::new("No meal loaded. Press 'r' to fetch one.")
                .block(Block::default().borders(Borders::ALL).title("Random Meal")),
            area,
        ),
    }
}

fn render_search(app: &MealApp, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let input_title = match (&app.search.error, app.search.loading) {
        (Some(error), _) => format!("Search - {error}"),
        (None, true) => "Search (searching...)".to_string(),
        (None, false) => "Search (Enter to run)".to_string(),
    };
    frame.render_widget(
        Paragraph::new(app.search.query.as_str())
            .block(Block::default().borders(Borders::ALL).title(input_title)),
        chunks[0],
    );

    if app.search.meals.is_empty() {
        frame.render_widget(
            Paragraph::new("No results. Type a meal name and press Enter.")
                .block(Block::default().borders(Borders::ALL).title("Results")),
            chunks[1],
        );
        return;
    }

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    let snapshot = app.favorites_rx.borrow();
    let result_lines: Vec<Line> = app
        .search
        .meals
        .values()
        .enumerate()
        .map(|(i, meal)| {
            let marker = if contains_meal(&snapshot, &meal.meal_id) {
                "♥ "
            } else {
                "♡ "
            };
            let text = format!("{marker}{}", meal.name);

            if i == app.search.selected {
                Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Line::from(text)
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(result_lines)
            .block(Block::default().borders(Borders::ALL).title("Results")),
        body[0],
    );

    if let Some((_, meal)) = app.search.meals.get_index(app.search.selected) {
        let favorited = contains_meal(&snapshot, &meal.meal_id);
        render_meal(meal, favorited, "Details", frame, body[1]);
    }
}

fn render_favorites(app: &MealApp, frame: &mut Frame, area: Rect) {
    let snapshot = app.favorites_rx.borrow();

    if snapshot.is_empty() {
        frame.render_widget(
            Paragraph::new("No favorites yet. Favorite a meal with 'f' and it will show up here.")
                .block(Block::default().borders(Borders::ALL).title("Favorites")),
            area,
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let selected = app.favorites_selected.min(snapshot.len() - 1);

    let lines: Vec<Line> = snapshot
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let text = format!("♥ {}", record.name);
            if i == selected {
                Line::styled(text, Style::default().add_modifier(Modifier::REVERSED))
            } else {
                Line::from(text)
            }
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Favorites")),
        chunks[0],
    );

    render_favorite_detail(&snapshot[selected], frame, chunks[1]);
}

fn render_meal(meal: &Meal, favorited: bool, title: &str, frame: &mut Frame, area: Rect) {
    let heart = if favorited { "♥" } else { "♡" };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            meal.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(heart, Style::default().fg(Color::Red)),
    ])];

    if let Some(origin) = &meal.origin {
        lines.push(Line::styled(
            format!("Origin: {origin}"),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Ingredients:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ));
    for ingredient in meal.ingredients() {
        lines.push(Line::from(format!(
            "• {}: {}",
            ingredient.name, ingredient.measurement
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Instructions:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ));
    for step in meal.instructions.lines() {
        lines.push(Line::from(step.to_string()));
    }

    if let Some(link) = &meal.youtube_link {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Video: {link}")));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title.to_string())),
        area,
    );
}

fn render_favorite_detail(record: &FavoriteRecord, frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::styled(
        record.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if let Some(origin) = &record.origin {
        lines.push(Line::styled(
            format!("Origin: {origin}"),
            Style::default().add_modifier(Modifier::ITALIC),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Ingredients:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ));
    for ingredient in record.ingredient_pairs() {
        lines.push(Line::from(format!(
            "• {}: {}",
            ingredient.name, ingredient.measurement
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Instructions:",
        Style::default().add_modifier(Modifier::UNDERLINED),
    ));
    for step in record.instructions.lines() {
        lines.push(Line::from(step.to_string()));
    }

    if let Some(link) = &record.youtube_link {
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Video: {link}")));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title("Details")),
        area,
    );
}
