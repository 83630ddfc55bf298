//! Interactive browse loop.
//!
//! Each input line is parsed into a [`Command`], applied to the [`Browser`]
//! and followed by a redraw of the current page. Command errors are printed
//! and the loop keeps going; only I/O errors end it early.

use std::io::{self, BufRead, Write};

use roster_core::Browser;
use roster_model::RecordId;
use tracing::debug;

use crate::command::{Command, HELP};
use crate::render::render_page;

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Redraw,
    Stay,
    Quit,
}

pub struct Session {
    browser: Browser,
    use_color: bool,
    page_size_options: Vec<usize>,
}

impl Session {
    pub fn new(browser: Browser, use_color: bool, page_size_options: Vec<usize>) -> Self {
        Self {
            browser,
            use_color,
            page_size_options,
        }
    }

    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Read commands from `input` until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.draw(out)?;
        write!(out, "{}", self.prompt())?;
        out.flush()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                write!(out, "{}", self.prompt())?;
                out.flush()?;
                continue;
            }
            let flow = match line.parse::<Command>() {
                Ok(command) => self.execute(command, out)?,
                Err(error) => {
                    writeln!(out, "error: {error}")?;
                    Flow::Stay
                }
            };
            match flow {
                Flow::Quit => return Ok(()),
                Flow::Redraw => self.draw(out)?,
                Flow::Stay => {}
            }
            write!(out, "{}", self.prompt())?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Apply one command, writing any message to `out`.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        debug!(?command, "executing command");
        let flow = match command {
            Command::Search(text) => {
                self.browser.search(text);
                Flow::Redraw
            }
            Command::Sort(column) => match self.browser.toggle_sort_named(&column) {
                Ok(_) => Flow::Redraw,
                Err(error) => {
                    writeln!(out, "error: {error}")?;
                    Flow::Stay
                }
            },
            Command::Page(number) => {
                self.browser.go_to_page(number.saturating_sub(1));
                Flow::Redraw
            }
            Command::Next => {
                self.browser.next_page();
                Flow::Redraw
            }
            Command::Previous => {
                self.browser.previous_page();
                Flow::Redraw
            }
            Command::First => {
                self.browser.first_page();
                Flow::Redraw
            }
            Command::Last => {
                self.browser.last_page();
                Flow::Redraw
            }
            Command::Size(size) => {
                if !self.page_size_options.contains(&size.get()) {
                    writeln!(
                        out,
                        "note: {} is not one of the usual sizes {:?}",
                        size, self.page_size_options
                    )?;
                }
                self.browser.set_page_size(size);
                Flow::Redraw
            }
            Command::Add(draft) => match self.browser.add(&draft) {
                Ok(record) => {
                    writeln!(out, "added {} ({})", record.full_name, record.id.short())?;
                    Flow::Redraw
                }
                Err(error) => {
                    writeln!(out, "error: {error}")?;
                    Flow::Stay
                }
            },
            Command::Remove(row) => match self.row(row, out)? {
                Some(id) => {
                    if let Some(record) = self.browser.remove(id) {
                        writeln!(out, "removed {} ({})", record.full_name, id.short())?;
                    }
                    Flow::Redraw
                }
                None => Flow::Stay,
            },
            Command::Edit(row) => match self.row(row, out)? {
                Some(id) => match self.browser.begin_edit(id) {
                    Ok(()) => Flow::Redraw,
                    Err(error) => {
                        writeln!(out, "error: {error}")?;
                        Flow::Stay
                    }
                },
                None => Flow::Stay,
            },
            Command::Set(update) => match self.browser.edit_field(update) {
                Ok(()) => Flow::Redraw,
                Err(error) => {
                    writeln!(out, "error: {error}")?;
                    Flow::Stay
                }
            },
            Command::Save => {
                if self.browser.end_edit().is_none() {
                    writeln!(out, "nothing is being edited")?;
                }
                Flow::Redraw
            }
            Command::Show => Flow::Redraw,
            Command::Help => {
                writeln!(out, "{HELP}")?;
                writeln!(out, "page sizes: {:?}", self.page_size_options)?;
                Flow::Stay
            }
            Command::Quit => Flow::Quit,
        };
        Ok(flow)
    }

    fn row<W: Write>(&mut self, row: usize, out: &mut W) -> io::Result<Option<RecordId>> {
        let id = self.browser.record_at_row(row);
        if id.is_none() {
            writeln!(out, "error: row {row} is not on this page")?;
        }
        Ok(id)
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let editing = self.browser.edit_session().editing_id();
        let view = self.browser.view().clone();
        let query = self.browser.query();
        writeln!(out, "{}", render_page(&view, query, editing, self.use_color))
    }

    fn prompt(&self) -> String {
        match self.browser.edit_session().editing_id() {
            Some(id) => format!("roster (editing {})> ", id.short()),
            None => "roster> ".to_string(),
        }
    }
}
