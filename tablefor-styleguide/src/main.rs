use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use tablefor_common::style::{
    catalogue::{Section, catalogue},
    nav::ExploreTab,
};

mod render;

const PAGE_SCROLL: u16 = 10;

struct App {
    sections: Vec<Section>,
    tab: ExploreTab,
    scroll: u16,
    max_scroll: u16,
}

impl App {
    fn new() -> Self {
        let sections = catalogue();
        let tab = ExploreTab::default();
        let line_count = render::sheet_lines(&sections, tab).len();
        let max_scroll = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);

        Self {
            sections,
            tab,
            scroll: 0,
            max_scroll,
        }
    }

    fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(self.max_scroll);
    }

    fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

fn main() -> io::Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal) -> io::Result<()> {
    let mut app = App::new();

    loop {
        terminal.draw(|frame| render::draw(frame, &app.sections, app.tab, app.scroll))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => app.scroll_up(1),
                KeyCode::Down => app.scroll_down(1),
                KeyCode::PageUp => app.scroll_up(PAGE_SCROLL),
                KeyCode::PageDown => app.scroll_down(PAGE_SCROLL),
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => app.tab = app.tab.toggle(),
                _ => {}
            }
        }
    }
}
