use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calbox_core::{
    clock::{Clock, SystemClock},
    config::AgendaConfig,
    item::ScheduleItem,
    observer::{AgendaObserver, SelectionOrigin},
    seed,
    store::ItemStore,
    AgendaController, ScrollRequest,
};
use chrono::NaiveDate;
use tracing::{debug, info};

#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub agenda: AgendaConfig,
    pub seed_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self {
            agenda: AgendaConfig::from_env(),
            seed_file: None,
        };
        if let Ok(path) = std::env::var("CALBOX_SEED_FILE") {
            if !path.trim().is_empty() {
                info!(path = %path, "using seed file");
                config.seed_file = Some(PathBuf::from(path));
            }
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Next,
    Prev,
    Today,
    Select(String),
    Settle(usize),
    Toggle(String),
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<AppCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(AppCommand::Show);
    };
    let argument = parts.next();
    let command = match (verb.to_ascii_lowercase().as_str(), argument) {
        ("next" | "n", None) => AppCommand::Next,
        ("prev" | "p", None) => AppCommand::Prev,
        ("today" | "t", None) => AppCommand::Today,
        ("show", None) => AppCommand::Show,
        ("help" | "?", None) => AppCommand::Help,
        ("quit" | "q" | "exit", None) => AppCommand::Quit,
        ("select" | "s", Some(key)) => AppCommand::Select(key.to_string()),
        ("toggle" | "x", Some(id)) => AppCommand::Toggle(id.to_string()),
        ("settle", Some(raw)) => AppCommand::Settle(
            raw.parse()
                .map_err(|_| format!("`{raw}` is not a page index"))?,
        ),
        (other, _) => return Err(format!("unknown command `{other}`, try `help`")),
    };
    if parts.next().is_some() {
        return Err(format!("too many arguments for `{verb}`"));
    }
    Ok(command)
}

/// Forwards agenda notifications to the log, standing in for an analytics
/// collaborator.
struct TracingObserver;

impl AgendaObserver for TracingObserver {
    fn selection_changed(&self, date: NaiveDate, origin: SelectionOrigin) {
        info!(%date, ?origin, "date selected");
    }

    fn item_toggled(&self, item: &ScheduleItem) {
        info!(id = %item.id, completed = item.completed, "item toggled");
    }
}

/// Terminal stand-in for the paged agenda. `page` is what the body shows,
/// which can lag the selected date when it lies outside the timeline.
struct AgendaView {
    controller: AgendaController,
    page: usize,
}

impl AgendaView {
    fn new(controller: AgendaController) -> Self {
        let page = controller
            .initial_scroll()
            .map(|request| request.index)
            .unwrap_or_default();
        Self { controller, page }
    }

    fn apply(&mut self, command: AppCommand, out: &mut impl Write) -> Result<bool> {
        if let Some(request) = self.controller.refresh_today() {
            debug!(index = request.index, date = %request.date, "day changed, repositioning page");
            self.page = request.index;
        }
        match command {
            AppCommand::Quit => return Ok(false),
            AppCommand::Help => {
                writeln!(
                    out,
                    "commands: next, prev, today, select <YYYY-MM-DD>, settle <page>, toggle <id>, show, quit"
                )?;
                return Ok(true);
            }
            AppCommand::Show => {}
            AppCommand::Next => self.page_by(1),
            AppCommand::Prev => self.page_by(-1),
            AppCommand::Settle(index) => {
                let last = self.controller.timeline().len().saturating_sub(1);
                self.page = index.min(last);
                self.controller.on_scroll_settle(self.page);
            }
            AppCommand::Today => {
                let request = self.controller.select_today();
                self.follow(request);
            }
            AppCommand::Select(key) => match self.controller.select_date_key(&key) {
                Ok(Some(request)) => self.follow(Some(request)),
                Ok(None) => writeln!(out, "{key} is outside the timeline; agenda not scrolled")?,
                Err(err) => {
                    writeln!(out, "{err}")?;
                    return Ok(true);
                }
            },
            AppCommand::Toggle(id) => {
                if !self.controller.toggle_completed(&id) {
                    writeln!(out, "no item with id {id}")?;
                }
            }
        }
        self.render(out)?;
        Ok(true)
    }

    fn page_by(&mut self, delta: isize) {
        let last = self.controller.timeline().len().saturating_sub(1);
        self.page = self.page.saturating_add_signed(delta).min(last);
        self.controller.on_scroll_settle(self.page);
    }

    /// Terminal scrolls finish instantly, so the settle arrives right away.
    fn follow(&mut self, request: Option<ScrollRequest>) {
        if let Some(request) = request {
            debug!(index = request.index, animated = request.animated, "scrolling");
            self.page = request.index;
            self.controller.on_scroll_settle(request.index);
        }
    }

    fn render(&self, out: &mut impl Write) -> Result<()> {
        let controller = &self.controller;
        let today_button = if controller.is_selected_today() {
            "(today)"
        } else {
            "[Today]"
        };
        writeln!(out)?;
        writeln!(out, "{}  {}", controller.header_title(), today_button)?;
        writeln!(out, "{}", self.week_strip())?;

        let Some(page) = controller.day_page(self.page) else {
            writeln!(out, "(empty timeline)")?;
            return Ok(());
        };
        writeln!(
            out,
            "{} {}{}",
            page.header.weekday_letter,
            page.header.day_number,
            if page.day.is_today { "  *" } else { "" }
        )?;
        if page.items.is_empty() {
            writeln!(out, "    No tasks for today")?;
            writeln!(out, "    Enjoy your free time!")?;
        }
        for item in &page.items {
            let check = if item.completed { "[x]" } else { "[ ]" };
            let time = item.time_range().unwrap_or_else(|| "all day".to_string());
            write!(out, "    {check} {:<6} {:<13} {}", item.id, time, item.title)?;
            if let Some(category) = &item.category {
                write!(out, "  ({category})")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    /// Seven days around the current page. Selected day is bracketed, days
    /// with items carry a dot.
    fn week_strip(&self) -> String {
        let controller = &self.controller;
        let marks = controller.marks();
        let timeline = controller.timeline();
        let start = self.page.saturating_sub(3);
        let end = (start + 7).min(timeline.len());
        timeline.days()[start..end]
            .iter()
            .map(|day| {
                let header = controller.locale().day_header(day.date);
                let mark = marks.get(&day.date);
                let dot = if mark.is_some_and(|m| m.has_items) { "." } else { " " };
                if mark.is_some_and(|m| m.selected) {
                    format!("[{}{}]{}", header.weekday_letter, header.day_number, dot)
                } else {
                    format!(" {}{} {}", header.weekday_letter, header.day_number, dot)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn build_controller(config: &AppConfig, clock: impl Clock + 'static) -> Result<AgendaController> {
    let today = clock.today();
    let store = match &config.seed_file {
        Some(path) => ItemStore::load(path)?,
        None => ItemStore::new(seed::sample_items(today)),
    };
    Ok(AgendaController::builder()
        .with_config(config.agenda.clone())
        .with_clock(clock)
        .with_items(store)
        .add_observer(Box::new(TracingObserver))
        .build())
}

pub fn run(config: AppConfig, input: impl BufRead, mut output: impl Write) -> Result<()> {
    let controller =
        build_controller(&config, SystemClock).context("failed to initialize agenda")?;
    run_with(controller, input, &mut output)
}

pub fn run_with(
    controller: AgendaController,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<()> {
    info!("starting agenda session");
    let mut view = AgendaView::new(controller);
    view.render(output)?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match parse_command(&line) {
            Ok(command) => {
                if !view.apply(command, output)? {
                    break;
                }
            }
            Err(message) => writeln!(output, "{message}")?,
        }
        output.flush()?;
    }
    info!("agenda session finished");
    Ok(())
}
