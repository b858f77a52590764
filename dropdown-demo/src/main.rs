use std::fs::File;
use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute, queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal,
};
use dropdown::{DropdownConfig, DropdownOutput, DropdownState, Key, Modifiers, SelectOption};
use simplelog::{Config, LevelFilter, WriteLogger};
use unicode_width::UnicodeWidthStr;

const FIELD_WIDTH: usize = 40;

/// One mounted widget plus the host-owned selection it proposes changes to.
struct Mounted {
    title: &'static str,
    placeholder: &'static str,
    searchable: bool,
    multiselect: bool,
    state: DropdownState,
    selected: Option<SelectOption>,
    selected_list: Vec<SelectOption>,
}

impl Mounted {
    fn config(&self) -> DropdownConfig {
        let mut config = DropdownConfig::new(flavors())
            .searchable(self.searchable)
            .multiselect(self.multiselect)
            .placeholder(self.placeholder);
        if let Some(selected) = &self.selected {
            config = config.selected(selected.clone());
        }
        config.selected_list(self.selected_list.clone())
    }

    /// Apply proposed selection changes back into host state.
    fn apply(&mut self, output: Vec<DropdownOutput>) {
        for change in output {
            match change {
                DropdownOutput::Change(option) => {
                    if !self.multiselect {
                        self.selected = Some(option);
                    }
                }
                DropdownOutput::ChangeMulti(list) => self.selected_list = list,
            }
        }
    }
}

fn flavors() -> Vec<SelectOption> {
    vec![
        SelectOption::new("chocolate", "Chocolate"),
        SelectOption::new("strawberry", "Strawberry"),
        SelectOption::new("vanilla", "Vanilla"),
    ]
}

fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("dropdown-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");
    log::info!("dropdown demo starting");

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout) -> io::Result<()> {
    let vanilla = SelectOption::new("vanilla", "Vanilla");

    let mut widgets = vec![
        Mounted {
            title: "Single",
            placeholder: "Choose",
            searchable: false,
            multiselect: false,
            state: DropdownState::default(),
            selected: None,
            selected_list: Vec::new(),
        },
        Mounted {
            title: "Searchable",
            placeholder: "Search",
            searchable: true,
            multiselect: false,
            state: DropdownState::default(),
            selected: Some(vanilla.clone()),
            selected_list: Vec::new(),
        },
        Mounted {
            title: "Multi",
            placeholder: "Search and choose",
            searchable: true,
            multiselect: true,
            state: DropdownState::default(),
            selected: None,
            selected_list: vec![vanilla],
        },
    ];

    for widget in &mut widgets {
        widget.state = DropdownState::new(&widget.config());
    }

    // Which widget's entry field holds keyboard focus.
    let mut focused: Option<usize> = None;

    loop {
        draw(stdout, &widgets, focused)?;

        let raw = event::read()?;
        let CrosstermEvent::Key(key_event) = raw else {
            continue;
        };
        if key_event.kind != KeyEventKind::Press {
            continue;
        }

        let key: Key = key_event.code.into();
        let modifiers: Modifiers = key_event.modifiers.into();

        if modifiers.ctrl && key == Key::Char('c') {
            return Ok(());
        }

        match key {
            Key::Tab | Key::BackTab => {
                if let Some(index) = focused {
                    widgets[index].state.handle_blur(false);
                }
                let next = match (focused, key) {
                    (None, Key::Tab) => 0,
                    (None, _) => widgets.len() - 1,
                    (Some(i), Key::Tab) => (i + 1) % widgets.len(),
                    (Some(i), _) => (i + widgets.len() - 1) % widgets.len(),
                };
                let config = widgets[next].config();
                widgets[next].state.handle_focus(&config);
                focused = Some(next);
            }

            Key::Char('q') if focused.is_none() => return Ok(()),

            _ => {
                let Some(index) = focused else { continue };
                let widget = &mut widgets[index];
                let config = widget.config();

                // Backspace on an empty multi field removes the last chip.
                if key == Key::Backspace
                    && widget.multiselect
                    && widget.state.input_text().is_empty()
                {
                    if let Some(last) = widget.selected_list.last().cloned() {
                        let output = widget.state.remove(&config, &last);
                        widget.apply(vec![output]);
                        continue;
                    }
                }

                let output = widget.state.handle_key(&config, key, modifiers);
                widget.apply(output);
                // Escape and single-mode commits close the list; release
                // the entry field with it.
                if !widget.state.is_open() {
                    focused = None;
                }
            }
        }
    }
}

fn draw(stdout: &mut io::Stdout, widgets: &[Mounted], focused: Option<usize>) -> io::Result<()> {
    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0),
        SetAttribute(Attribute::Reset),
    )?;

    let mut row: u16 = 1;
    queue!(stdout, cursor::MoveTo(2, 0))?;
    write!(stdout, "Tab to move between fields, q to quit")?;
    row += 1;

    for (index, widget) in widgets.iter().enumerate() {
        let config = widget.config();
        let is_focused = focused == Some(index);

        queue!(stdout, cursor::MoveTo(2, row), SetAttribute(Attribute::Dim))?;
        write!(stdout, "{}", widget.title)?;
        queue!(stdout, SetAttribute(Attribute::Reset))?;
        row += 1;

        // Entry field: text or dim placeholder, with an open/closed marker.
        let text = widget.state.input_text();
        queue!(stdout, cursor::MoveTo(2, row))?;
        if is_focused {
            queue!(stdout, SetAttribute(Attribute::Bold))?;
        }
        let marker = if widget.state.is_open() { "v" } else { ">" };
        if text.is_empty() {
            queue!(stdout, SetAttribute(Attribute::Dim))?;
            write!(stdout, "[{:w$}] {marker}", config.placeholder, w = FIELD_WIDTH)?;
        } else {
            write!(stdout, "[{text:FIELD_WIDTH$}] {marker}")?;
        }
        queue!(stdout, SetAttribute(Attribute::Reset))?;
        row += 1;

        if widget.state.is_open() {
            let visible = widget.state.visible(&config);
            for (option_index, option) in visible.iter().enumerate() {
                queue!(stdout, cursor::MoveTo(4, row))?;
                if option_index == widget.state.focused_index() {
                    queue!(stdout, SetAttribute(Attribute::Reverse))?;
                }
                write!(stdout, " {:w$} ", option.label, w = FIELD_WIDTH - 2)?;
                queue!(stdout, SetAttribute(Attribute::Reset))?;
                row += 1;
            }
            if visible.is_empty() && config.searchable {
                queue!(
                    stdout,
                    cursor::MoveTo(4, row),
                    SetForegroundColor(Color::DarkGrey)
                )?;
                write!(stdout, " {} ", config.not_found_text)?;
                queue!(stdout, SetForegroundColor(Color::Reset))?;
                row += 1;
            }
        }

        // Selected chips under a multi widget, removable with Backspace.
        if widget.multiselect && !widget.selected_list.is_empty() {
            queue!(stdout, cursor::MoveTo(2, row))?;
            let mut col = 2usize;
            for option in &widget.selected_list {
                let chip = format!("({} x)", option.label);
                queue!(stdout, cursor::MoveTo(col as u16, row))?;
                write!(stdout, "{chip}")?;
                col += chip.width() + 1;
            }
            row += 1;
        }

        row += 1;
    }

    stdout.flush()
}
