use std::io::{self, stdout, Stdout, Write};

use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use log::debug;

use crate::core::errors::SelectError;
use crate::core::profile::{profile_names, Profile};

/// Outcome of one prompt.
///
/// Cancelling is its own variant so it can never be mistaken for picking
/// the first entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Selected(&'a Profile),
    Cancelled,
}

/// Something that lets the user pick one profile.
pub trait Selector {
    fn select<'a>(&mut self, profiles: &'a [Profile]) -> Selection<'a>;
}

/// Case-insensitive substring match; spaces in `name` are ignored so
/// `myserver` finds `My Server`.
pub fn matches(name: &str, query: &str) -> bool {
    let name = name.to_lowercase().replace(' ', "");
    name.contains(&query.to_lowercase())
}

/// What a key press did to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// Index into the full, unfiltered name list.
    Submit(usize),
    Cancel,
}

/// Terminal-independent menu state: search query, filtered rows and cursor.
#[derive(Debug, Clone)]
pub struct SelectorState<'a> {
    names: Vec<&'a str>,
    query: String,
    visible: Vec<usize>,
    cursor: usize,
}

impl<'a> SelectorState<'a> {
    pub fn new(names: Vec<&'a str>) -> Self {
        let visible = (0..names.len()).collect();
        Self {
            names,
            query: String::new(),
            visible,
            cursor: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Indices (into the full list) of the rows currently shown.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    pub fn name(&self, index: usize) -> &'a str {
        self.names[index]
    }

    /// Position of the highlighted row within [`visible`](Self::visible).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Full-list index of the highlighted row, if any row is shown.
    pub fn selected(&self) -> Option<usize> {
        self.visible.get(self.cursor).copied()
    }

    pub fn push_char(&mut self, ch: char) {
        self.query.push(ch);
        self.refilter();
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyOutcome::Cancel,
            KeyCode::Esc => KeyOutcome::Cancel,
            KeyCode::Char('p') if ctrl => {
                self.move_up();
                KeyOutcome::Continue
            }
            KeyCode::Char('n') if ctrl => {
                self.move_down();
                KeyOutcome::Continue
            }
            KeyCode::Up => {
                self.move_up();
                KeyOutcome::Continue
            }
            KeyCode::Down => {
                self.move_down();
                KeyOutcome::Continue
            }
            KeyCode::Enter => match self.selected() {
                Some(index) => KeyOutcome::Submit(index),
                None => KeyOutcome::Continue,
            },
            KeyCode::Backspace => {
                self.pop_char();
                KeyOutcome::Continue
            }
            KeyCode::Char(ch) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.push_char(ch);
                KeyOutcome::Continue
            }
            _ => KeyOutcome::Continue,
        }
    }

    // Cursor goes back to the first match whenever the query changes.
    fn refilter(&mut self) {
        let query = &self.query;
        self.visible = self
            .names
            .iter()
            .enumerate()
            .filter(|(_, name)| matches(name, query))
            .map(|(index, _)| index)
            .collect();
        self.cursor = 0;
    }
}

/// Enables raw mode for its lifetime and restores the terminal on drop,
/// including on early returns through `?`.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
        let _ = disable_raw_mode();
    }
}

/// Interactive menu drawn inline on the terminal with crossterm.
#[derive(Debug, Clone)]
pub struct TerminalSelector {
    label: String,
}

impl TerminalSelector {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// Runs the prompt and returns the chosen full-list index.
    pub fn prompt(&self, profiles: &[Profile]) -> Result<usize, SelectError> {
        let mut state = SelectorState::new(profile_names(profiles));
        let mut out = stdout();

        let _guard = RawModeGuard::enable()?;
        execute!(out, Hide)?;

        let mut drawn = self.draw(&mut out, &state, 0)?;
        loop {
            let key = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => key,
                Event::Resize(..) => {
                    drawn = self.draw(&mut out, &state, drawn)?;
                    continue;
                }
                _ => continue,
            };
            match state.handle_key(key) {
                KeyOutcome::Continue => drawn = self.draw(&mut out, &state, drawn)?,
                KeyOutcome::Submit(index) => {
                    erase(&mut out, drawn)?;
                    queue!(
                        out,
                        PrintStyledContent("➤ ".green()),
                        PrintStyledContent(state.name(index).dim()),
                        Print("\r\n")
                    )?;
                    out.flush()?;
                    return Ok(index);
                }
                KeyOutcome::Cancel => {
                    erase(&mut out, drawn)?;
                    out.flush()?;
                    return Err(SelectError::Interrupted);
                }
            }
        }
    }

    /// Redraws the menu over the previous `drawn` lines and returns how
    /// many lines are on screen now.
    fn draw(&self, out: &mut Stdout, state: &SelectorState, drawn: u16) -> io::Result<u16> {
        erase(out, drawn)?;

        queue!(out, PrintStyledContent(format!("✨ {}", self.label).green()))?;
        if !state.query().is_empty() {
            queue!(out, Print(format!("  Search: {}", state.query())))?;
        }

        let mut lines: u16 = 1;
        if state.visible().is_empty() {
            queue!(out, Print("\r\n"), PrintStyledContent("  No results".dim()))?;
            lines += 1;
        }
        for (row, &index) in state.visible().iter().enumerate() {
            queue!(out, Print("\r\n"))?;
            let name = state.name(index);
            if row == state.cursor() {
                queue!(
                    out,
                    PrintStyledContent("➤ ".green()),
                    PrintStyledContent(name.green())
                )?;
            } else {
                queue!(out, Print(format!("  {name}")))?;
            }
            lines = lines.saturating_add(1);
        }
        out.flush()?;
        Ok(lines)
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        TerminalSelector::new("Select Redis Server")
    }
}

impl Selector for TerminalSelector {
    fn select<'a>(&mut self, profiles: &'a [Profile]) -> Selection<'a> {
        match self.prompt(profiles) {
            Ok(index) => {
                debug!("Selected profile #{index}");
                Selection::Selected(&profiles[index])
            }
            Err(e) => {
                println!("Prompt failed: {e}");
                Selection::Cancelled
            }
        }
    }
}

/// Clears `lines` lines ending at the cursor, leaving it at the start of the first.
fn erase(out: &mut Stdout, lines: u16) -> io::Result<()> {
    queue!(out, MoveToColumn(0))?;
    // MoveUp(0) still moves one row on most terminals.
    if lines > 1 {
        queue!(out, MoveUp(lines - 1))?;
    }
    queue!(out, Clear(ClearType::FromCursorDown))
}
