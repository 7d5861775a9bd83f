//! Terminal rendering for the recommender CLI and REPL.

use crate::recommend::ResultRow;
use clap::builder::styling::{AnsiColor, Color as AnsiFg, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Color, Stylize};
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Inner width of section frames, in terminal columns.
const FRAME_WIDTH: usize = 60;

mod palette {
    use crossterm::style::Color;

    pub const FRAME: Color = Color::Rgb {
        r: 70,
        g: 190,
        b: 210,
    };
    pub const TITLE: Color = Color::Rgb {
        r: 190,
        g: 130,
        b: 250,
    };
    pub const TEXT: Color = Color::Rgb {
        r: 230,
        g: 230,
        b: 230,
    };
    pub const MUTED: Color = Color::DarkGrey;
    pub const GOOD: Color = Color::Rgb {
        r: 90,
        g: 220,
        b: 130,
    };
    pub const WARN: Color = Color::Rgb {
        r: 250,
        g: 175,
        b: 50,
    };
    pub const BAD: Color = Color::Rgb {
        r: 240,
        g: 90,
        b: 90,
    };
}

mod glyph {
    pub const LINE: &str = "─";
    pub const BAR: &str = "│";
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const DOWN_JOIN: &str = "┬";
    pub const UP_JOIN: &str = "┴";
    pub const LEFT_JOIN: &str = "├";
    pub const RIGHT_JOIN: &str = "┤";
    pub const CROSS: &str = "┼";
    pub const ITEM: &str = "▸";
    pub const MARK: &str = "•";
}

fn ansi_bold(color: AnsiColor) -> Style {
    Style::new().bold().fg_color(Some(AnsiFg::Ansi(color)))
}

/// Clap help colors shared by the command line and the REPL parser.
pub fn get_styles() -> Styles {
    let heading = ansi_bold(AnsiColor::Cyan).underline();
    Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(ansi_bold(AnsiColor::Green))
        .valid(ansi_bold(AnsiColor::Green))
        .invalid(ansi_bold(AnsiColor::Red))
        .error(ansi_bold(AnsiColor::Red))
        .placeholder(Style::new().fg_color(Some(AnsiFg::Ansi(AnsiColor::BrightBlack))))
}

/// A horizontal frame line: `left`, one run of `─` per span joined by `join`, then `right`.
fn rule(left: &str, join: &str, right: &str, spans: &[usize]) -> String {
    let body: Vec<String> = spans.iter().map(|span| glyph::LINE.repeat(*span)).collect();
    format!("{}{}{}", left, body.join(join), right)
}

fn print_status(label: &str, message: &str, color: Color) {
    println!(
        " {} {}",
        format!("{}:", label).with(color).bold(),
        message.with(color)
    );
}

pub fn print_error(message: &str) {
    print_status("error", message, palette::BAD);
}

pub fn print_warning(message: &str) {
    print_status("warning", message, palette::WARN);
}

fn print_note(message: &str) {
    println!(
        "  {}",
        message.with(palette::MUTED).attribute(Attribute::Italic)
    );
}

pub fn print_section_header(title: &str) {
    let fill = FRAME_WIDTH.saturating_sub(title.width() + 2);
    let before = fill / 2;

    println!();
    println!(
        "{} {} {}",
        format!("{}{}", glyph::TOP_LEFT, glyph::LINE.repeat(before)).with(palette::FRAME),
        title.with(palette::TITLE).bold(),
        format!("{}{}", glyph::LINE.repeat(fill - before), glyph::TOP_RIGHT).with(palette::FRAME)
    );
}

pub fn print_section_footer() {
    println!(
        "{}",
        rule(glyph::BOTTOM_LEFT, "", glyph::BOTTOM_RIGHT, &[FRAME_WIDTH]).with(palette::FRAME)
    );
    println!();
}

pub fn print_key_value(key: &str, value: &str) {
    println!(
        "  {} {} {}",
        glyph::MARK.with(palette::MUTED),
        format!("{}:", key).with(palette::MUTED),
        value.with(palette::TEXT)
    );
}

pub fn print_key_value_highlight(key: &str, value: &str) {
    println!(
        "  {} {} {}",
        glyph::MARK.with(palette::TITLE),
        format!("{}:", key).with(palette::FRAME).bold(),
        value.with(palette::GOOD).bold()
    );
}

/// Prints a titled list of distinct column values, e.g. every genre.
pub fn print_value_list(title: &str, values: &[String]) {
    print_section_header(title);
    if values.is_empty() {
        print_note("(no values)");
    }
    for value in values {
        let shown = if value.is_empty() {
            "(empty)".with(palette::MUTED)
        } else {
            value.as_str().with(palette::TEXT)
        };
        println!("  {} {}", glyph::ITEM.with(palette::FRAME), shown);
    }
    print_section_footer();
}

fn result_headers(with_sales: bool) -> Vec<&'static str> {
    let mut headers = vec!["Name", "Platform", "Year of Release", "Genre", "Publisher"];
    if with_sales {
        headers.push("Global Sales");
    }
    headers.push("Recommendation");
    headers
}

fn result_cells(row: &ResultRow) -> Vec<String> {
    let mut cells = vec![
        row.name.clone(),
        row.platform.clone(),
        row.year_of_release
            .map(|year| year.to_string())
            .unwrap_or_default(),
        row.genre.clone(),
        row.publisher.clone(),
    ];
    if let Some(global_sales) = row.global_sales {
        cells.push(format!("{:.2}", global_sales));
    }
    cells.push(format!("{:.2}", row.recommendation));
    cells
}

/// Display width of each column: its widest cell, header included.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|cells| cells.get(i))
                .map(|cell| cell.width())
                .fold(header.width(), usize::max)
        })
        .collect()
}

fn print_table_row(cells: &[&str], widths: &[usize], heading: bool) {
    print!("{}", glyph::BAR.with(palette::FRAME));
    for (cell, width) in cells.iter().zip(widths) {
        let padded = format!(" {}{} ", cell, " ".repeat(width.saturating_sub(cell.width())));
        if heading {
            print!("{}", padded.with(palette::TITLE).bold());
        } else {
            print!("{}", padded.with(palette::TEXT));
        }
        print!("{}", glyph::BAR.with(palette::FRAME));
    }
    println!();
}

/// Renders recommendation rows as a table, with a sales column when the rows carry one.
pub fn print_results(rows: &[ResultRow]) {
    if rows.is_empty() {
        print_note("No games cleared the recommendation threshold.");
        println!();
        return;
    }

    let headers = result_headers(rows.iter().any(|r| r.global_sales.is_some()));
    let cells: Vec<Vec<String>> = rows.iter().map(result_cells).collect();
    let widths = column_widths(&headers, &cells);
    let spans: Vec<usize> = widths.iter().map(|width| width + 2).collect();
    let frame = |left: &str, join: &str, right: &str| {
        println!("{}", rule(left, join, right, &spans).with(palette::FRAME));
    };

    frame(glyph::TOP_LEFT, glyph::DOWN_JOIN, glyph::TOP_RIGHT);
    print_table_row(&headers, &widths, true);
    frame(glyph::LEFT_JOIN, glyph::CROSS, glyph::RIGHT_JOIN);
    for row in &cells {
        let row: Vec<&str> = row.iter().map(String::as_str).collect();
        print_table_row(&row, &widths, false);
    }
    frame(glyph::BOTTOM_LEFT, glyph::UP_JOIN, glyph::BOTTOM_RIGHT);
    println!(
        "  {}",
        format!("{} recommended games", rows.len()).with(palette::MUTED)
    );
    println!();
}

fn prompt_marker() -> String {
    "games ›".with(palette::FRAME).bold().to_string()
}

pub fn get_prompt() -> String {
    format!("{} ", prompt_marker())
}

pub fn print_command_echo(command: &str) {
    println!(
        "{} {}",
        prompt_marker(),
        command.with(palette::GOOD).bold()
    );
}

pub fn print_welcome(dataset_path: &str, games_count: usize) {
    println!();
    println!(
        "  {} {}",
        "Fuzzy Game Recommender".with(palette::TITLE).bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).with(palette::MUTED)
    );
    print_section_header("Dataset");
    print_key_value_highlight("Games", &games_count.to_string());
    print_key_value("Path", dataset_path);
    println!();
    print_note("Type 'help' for available commands");
    print_section_footer();
}

/// Heading a command is listed under in `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Recommend,
    System,
}

impl CommandGroup {
    const ALL: [CommandGroup; 3] = [
        CommandGroup::Browse,
        CommandGroup::Recommend,
        CommandGroup::System,
    ];

    fn title(self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse dataset",
            CommandGroup::Recommend => "Recommendations",
            CommandGroup::System => "System",
        }
    }
}

pub struct CommandHelp {
    pub name: &'static str,
    pub args: &'static str,
    pub description: &'static str,
    pub group: CommandGroup,
}

pub fn print_help(commands: &[CommandHelp]) {
    print_section_header("Available Commands");
    for group in CommandGroup::ALL {
        println!("  {}", group.title().with(palette::TITLE).bold());
        for cmd in commands.iter().filter(|cmd| cmd.group == group) {
            println!(
                "    {} {}  {}",
                cmd.name.with(palette::GOOD).bold(),
                cmd.args.with(palette::MUTED),
                cmd.description.with(palette::TEXT)
            );
        }
        println!();
    }
    print_section_footer();
}

pub fn print_goodbye() {
    println!();
    println!("  {}", "Goodbye!".with(palette::TITLE).bold());
    println!();
}

pub fn flush() {
    let _ = io::stdout().flush();
}
