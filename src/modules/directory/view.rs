use crate::modules::directory::{
    schema::UserRecord,
    service::{DirectoryState, LoadStatus},
};
use crate::utils::pad;

const MAX_PAGE_BUTTONS: u32 = 5;
const COLUMNS: [&str; 6] = ["Name", "Email", "Job Title", "Company", "Phone", "Website"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryView {
    pub search_input: String,
    pub refresh_enabled: bool,
    pub body: DirectoryBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryBody {
    Loading,
    Error { message: String },
    Empty { message: &'static str },
    Table { rows: Vec<UserRecord>, footer: String, pages: PageControl },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub buttons: Vec<PageButton>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
    pub number: u32,
    pub active: bool,
}

impl PageControl {
    /// Numbered buttons for a window of pages around `current`.
    pub fn new(current: u32, total_pages: u32) -> Self {
        let last_page = total_pages.max(1);
        let current = current.clamp(1, last_page);

        let mut first = current.saturating_sub(MAX_PAGE_BUTTONS / 2).max(1);
        let last = (first + MAX_PAGE_BUTTONS - 1).min(last_page);
        first = last.saturating_sub(MAX_PAGE_BUTTONS - 1).max(1);

        PageControl {
            buttons: (first..=last)
                .map(|number| PageButton { number, active: number == current })
                .collect(),
            previous_enabled: current > 1,
            next_enabled: current < total_pages,
        }
    }

    pub fn render(&self) -> String {
        let previous = if self.previous_enabled { "< prev" } else { "  ----" };
        let next = if self.next_enabled { "next >" } else { "----  " };
        let numbers: Vec<String> = self
            .buttons
            .iter()
            .map(|b| if b.active { format!("[{}]", b.number) } else { b.number.to_string() })
            .collect();
        format!("{}  {}  {}", previous, numbers.join(" "), next)
    }
}

/// `Showing 11 to 20 of 42 users`, with the active search term appended.
pub fn footer(page: u32, page_size: u32, shown: usize, total: u64, search_term: &str) -> String {
    let start = (page.max(1) as u64 - 1) * page_size as u64 + 1;
    let end = start + shown as u64 - 1;
    let mut text = format!("Showing {} to {} of {} users", start, end, total);
    if !search_term.is_empty() {
        text.push_str(&format!(" matching \"{}\"", search_term));
    }
    text
}

impl DirectoryView {
    pub(crate) fn from_state(state: &DirectoryState) -> Self {
        let body = match &state.status {
            LoadStatus::Idle | LoadStatus::Loading => DirectoryBody::Loading,
            LoadStatus::Errored(message) => DirectoryBody::Error { message: message.clone() },
            LoadStatus::Loaded if state.records.is_empty() => {
                let message = if state.requested.search_term.is_empty() {
                    "No users found."
                } else {
                    "No users match your search criteria."
                };
                DirectoryBody::Empty { message }
            }
            LoadStatus::Loaded => {
                // Older backends leave the page out; fall back to what was asked for.
                let page = match state.pagination.page {
                    0 => state.requested.page,
                    page => page,
                };
                DirectoryBody::Table {
                    rows: state.records.clone(),
                    footer: footer(
                        page,
                        state.requested.page_size,
                        state.records.len(),
                        state.pagination.total,
                        &state.requested.search_term,
                    ),
                    pages: PageControl::new(page, state.pagination.total_pages),
                }
            }
        };

        DirectoryView {
            search_input: state.search_input.clone(),
            refresh_enabled: !matches!(state.status, LoadStatus::Idle | LoadStatus::Loading),
            body,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("== User Directory ==\n");
        let refresh = if self.refresh_enabled { "[Refresh]" } else { "[Refresh] (disabled)" };
        out.push_str(&format!("Search: {:?}  {}\n", self.search_input, refresh));

        match &self.body {
            DirectoryBody::Loading => out.push_str("Loading users...\n"),
            DirectoryBody::Error { message } => {
                out.push_str("Error Loading Users\n");
                out.push_str(&format!("{}\n", message));
                out.push_str("Use `refresh` to try again\n");
            }
            DirectoryBody::Empty { message } => out.push_str(&format!("{}\n", message)),
            DirectoryBody::Table { rows, footer, pages } => {
                out.push_str(&render_table(rows));
                out.push_str(&format!("{}\n{}\n", footer, pages.render()));
            }
        }
        out
    }
}

fn cells(user: &UserRecord) -> [String; 6] {
    let website = if user.website.is_empty() { String::new() } else { format!("Visit {}", user.website) };
    [
        user.name.clone(),
        user.email.clone(),
        user.job_title.clone(),
        user.company.clone(),
        user.phone.clone(),
        website,
    ]
}

fn render_table(rows: &[UserRecord]) -> String {
    let rows: Vec<[String; 6]> = rows.iter().map(cells).collect();
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |values: Vec<&str>| {
        let padded: Vec<String> =
            values.iter().zip(widths.iter()).map(|(value, width)| pad(value, *width)).collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut out = line(COLUMNS.to_vec());
    out.push_str(&format!("{}\n", "-".repeat(widths.iter().sum::<usize>() + 3 * (COLUMNS.len() - 1))));
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out
}
