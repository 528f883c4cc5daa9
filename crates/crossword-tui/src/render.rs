use crate::app::{App, Layout};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use crossword_core::{Board, Coordinate};
use std::io;
use unicode_width::UnicodeWidthChar;

/// Each cell is drawn as a 5x3 box; neighbours share their borders
const CELL_WIDTH: u16 = 4;
const CELL_HEIGHT: u16 = 2;
const INFO_WIDTH: u16 = 28;

/// Terminal columns and rows needed to draw `board`, or `None` when the
/// grid is too large for a terminal to address
pub fn grid_extent(board: &Board) -> Option<(u16, u16)> {
    let width = extent(board.cols(), CELL_WIDTH)?;
    let height = extent(board.rows(), CELL_HEIGHT)?;
    Some((width, height))
}

fn extent(cells: usize, step: u16) -> Option<u16> {
    u16::try_from(cells).ok()?.checked_mul(step)?.checked_add(1)
}

/// The glyph shown for `letter` and the columns it takes.
///
/// Letters are uppercased when that yields a single character. Anything that
/// is not one or two columns wide is drawn as `?` so boxes stay aligned.
fn display_letter(letter: char) -> (char, usize) {
    let mut upper = letter.to_uppercase();
    let shown = match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => letter,
    };
    match shown.width() {
        Some(width @ (1 | 2)) => (shown, width),
        _ => ('?', 1),
    }
}

/// Draw a board as boxed letters, for printing outside the TUI.
///
/// Empty cells are left blank so the word shapes stand out:
///
/// ```text
/// +---+---+
/// | T | E |
/// +---+---+
/// ```
///
/// A double-width letter fills the space to its right inside the box.
pub fn board_text(board: &Board, hide_letters: bool) -> String {
    let width = board.cols() * CELL_WIDTH as usize + 1;
    let height = board.rows() * CELL_HEIGHT as usize + 1;
    // `None` marks a column covered by the double-width letter before it
    let mut canvas = vec![vec![Some(' '); width]; height];

    for (coord, letter) in board.occupied() {
        let x = coord.col as usize * CELL_WIDTH as usize;
        let y = coord.row as usize * CELL_HEIGHT as usize;
        for dy in [0, 2] {
            for (dx, c) in "+---+".chars().enumerate() {
                canvas[y + dy][x + dx] = Some(c);
            }
        }
        canvas[y + 1][x] = Some('|');
        canvas[y + 1][x + 4] = Some('|');
        if !hide_letters {
            let (shown, columns) = display_letter(letter);
            canvas[y + 1][x + 2] = Some(shown);
            if columns == 2 {
                canvas[y + 1][x + 3] = None;
            }
        }
    }

    canvas
        .into_iter()
        .map(|line| line.into_iter().flatten().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    match &app.layout {
        Some(layout) => render_layout_screen(stdout, app, layout, term_width, term_height)?,
        None => render_error_screen(stdout, app, term_width)?,
    }

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_layout_screen(
    stdout: &mut io::Stdout,
    app: &App,
    layout: &Layout,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    // Grid, gap, info panel, and the controls below
    let fits = grid_extent(&layout.board).and_then(|(grid_width, grid_height)| {
        let total_width = grid_width.checked_add(3 + INFO_WIDTH)?;
        let wide_enough = total_width.checked_add(2)? <= term_width;
        let tall_enough = grid_height.checked_add(7)? <= term_height;
        (wide_enough && tall_enough).then_some((grid_width, grid_height, total_width))
    });
    let Some((grid_width, grid_height, total_width)) = fits else {
        let msg = format!(
            "Terminal too small for a {}x{} grid ({}x{}); try --print",
            layout.board.rows(),
            layout.board.cols(),
            term_width,
            term_height
        );
        execute!(
            stdout,
            MoveTo(1, 1),
            SetForegroundColor(app.theme.error),
            Print(msg)
        )?;
        return Ok(());
    };

    let start_x = (term_width - total_width) / 2;
    let start_y = 2;

    render_grid(stdout, app, &layout.board, start_x, start_y)?;
    render_info_panel(stdout, app, layout, start_x + grid_width + 3, start_y, term_height)?;
    render_controls(stdout, app, start_x, start_y + grid_height + 1)?;

    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, board: &Board, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    // Borders first, so letters are never overdrawn by a neighbour's box
    execute!(stdout, SetForegroundColor(theme.border))?;
    for (coord, _) in board.occupied() {
        let (cx, cy) = cell_origin(coord, x, y);
        execute!(
            stdout,
            MoveTo(cx, cy),
            Print("+---+"),
            MoveTo(cx, cy + 1),
            Print("|"),
            MoveTo(cx + 4, cy + 1),
            Print("|"),
            MoveTo(cx, cy + 2),
            Print("+---+")
        )?;
    }

    if app.hide_letters {
        return Ok(());
    }

    for (coord, letter) in board.occupied() {
        let (cx, cy) = cell_origin(coord, x, y);
        let crossed = board.cell(coord).is_some_and(|cell| cell.is_crossed());
        let color = if crossed { theme.crossing } else { theme.letter };
        let (shown, _) = display_letter(letter);
        execute!(
            stdout,
            MoveTo(cx + 2, cy + 1),
            SetForegroundColor(color),
            Print(shown)
        )?;
    }

    Ok(())
}

fn cell_origin(coord: Coordinate, x: u16, y: u16) -> (u16, u16) {
    (
        x + coord.col as u16 * CELL_WIDTH,
        y + coord.row as u16 * CELL_HEIGHT,
    )
}

fn render_info_panel(
    stdout: &mut io::Stdout,
    app: &App,
    layout: &Layout,
    x: u16,
    y: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print("CROSSWORD")
    )?;

    let rows = [
        ("Seed", layout.seed.to_string()),
        ("Attempts", layout.attempts.to_string()),
        ("Working size", layout.board_size.to_string()),
        (
            "Grid",
            format!("{}x{}", layout.board.rows(), layout.board.cols()),
        ),
        (
            "Words",
            format!("{}/{}", layout.board.word_count(), app.words.len()),
        ),
        ("Theme", app.theme_name().to_string()),
    ];

    for (i, (label, value)) in rows.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, y + 2 + i as u16),
            SetForegroundColor(theme.info),
            Print(format!("{:<13}", label)),
            SetForegroundColor(theme.fg),
            Print(value)
        )?;
    }

    let list_y = y + 3 + rows.len() as u16;
    let room = term_height.saturating_sub(list_y) as usize;
    for (i, placed) in layout.board.placements().iter().take(room).enumerate() {
        execute!(
            stdout,
            MoveTo(x, list_y + i as u16),
            SetForegroundColor(theme.success),
            Print(format!(
                "{:<10} {} {}",
                placed.word.to_uppercase(),
                placed.direction,
                placed.anchor
            ))
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;

    let controls = [
        ("r/Space", "New layout"),
        ("h", "Hide letters"),
        ("t", "Theme"),
        ("q/Esc", "Quit"),
    ];

    for (i, (key, desc)) in controls.iter().enumerate() {
        let col = i / 2;
        let row = i % 2;
        execute!(
            stdout,
            MoveTo(x + col as u16 * 22, y + row as u16),
            SetForegroundColor(theme.key),
            Print(format!("{:>8}", key)),
            SetForegroundColor(theme.info),
            Print(format!(" {}", desc))
        )?;
    }

    Ok(())
}

fn render_error_screen(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let text = match &app.error {
        Some(e) => e.to_string(),
        None => "No layout".to_string(),
    };
    let x = term_width.saturating_sub(text.len() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 3),
        SetForegroundColor(theme.error),
        Print(&text),
        MoveTo(x, 5),
        SetForegroundColor(theme.key),
        Print("r"),
        SetForegroundColor(theme.info),
        Print(" retry   "),
        SetForegroundColor(theme.key),
        Print("q"),
        SetForegroundColor(theme.info),
        Print(" quit")
    )?;

    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App, msg: &str, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let padded = format!("  {}  ", msg);
    let x = term_width.saturating_sub(padded.len() as u16) / 2;

    execute!(
        stdout,
        MoveTo(x, 0),
        SetForegroundColor(theme.bg),
        SetBackgroundColor(theme.info),
        Print(&padded),
        SetBackgroundColor(theme.bg)
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossword_core::{Direction, Placement};

    fn tea_board() -> Board {
        let mut board = Board::new(3);
        board
            .place_word("tea", Placement::new(Coordinate::new(0, 0), Direction::Across))
            .unwrap();
        board
    }

    #[test]
    fn test_grid_extent() {
        let board = tea_board();
        assert_eq!(grid_extent(&board), Some((13, 7)));
    }

    fn blank_board(rows: usize, cols: usize) -> Board {
        let cell = serde_json::json!({ "letter": null, "across": null, "down": null });
        let value = serde_json::json!({
            "rows": rows,
            "cols": cols,
            "cells": vec![cell; rows * cols],
            "filled": [],
            "placements": [],
        });
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_grid_extent_too_wide_for_terminal() {
        assert_eq!(grid_extent(&blank_board(1, 16383)), Some((65533, 3)));
        assert_eq!(grid_extent(&blank_board(1, 16384)), None);
        assert_eq!(grid_extent(&blank_board(40000, 1)), None);
    }

    #[test]
    fn test_display_letter() {
        assert_eq!(display_letter('t'), ('T', 1));
        assert_eq!(display_letter('é'), ('É', 1));
        // uppercases to two letters, so kept as is
        assert_eq!(display_letter('ß'), ('ß', 1));
        assert_eq!(display_letter('日'), ('日', 2));
        assert_eq!(display_letter('\u{0301}'), ('?', 1));
    }

    #[test]
    fn test_board_text_wide_letters_stay_boxed() {
        let mut board = Board::new(2);
        board
            .place_word("日本", Placement::new(Coordinate::new(0, 0), Direction::Across))
            .unwrap();
        let text = board_text(&board, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+---+---+");
        assert_eq!(lines[1], "| 日| 本|");
    }

    #[test]
    fn test_board_text_boxes_letters() {
        let text = board_text(&tea_board(), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+---+---+---+");
        assert_eq!(lines[1], "| T | E | A |");
        assert_eq!(lines[2], "+---+---+---+");
        assert!(lines[3..].iter().all(|line| line.is_empty()));
    }

    #[test]
    fn test_board_text_hidden() {
        let text = board_text(&tea_board(), true);
        assert_eq!(text.lines().nth(1), Some("|   |   |   |"));
    }

    #[test]
    fn test_board_text_leaves_gaps_blank() {
        let mut board = Board::new(3);
        board
            .place_word("at", Placement::new(Coordinate::new(1, 1), Direction::Down))
            .unwrap();
        let text = board_text(&board, false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[2], "    +---+");
        assert_eq!(lines[3], "    | A |");
        assert_eq!(lines[5], "    | T |");
    }
}
