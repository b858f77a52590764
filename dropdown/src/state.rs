use crate::config::DropdownConfig;
use crate::event::{DropdownOutput, FocusDirection, Key, Modifiers};
use crate::filter::visible_options;
use crate::option::SelectOption;

/// Outcome of the entry field losing focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOutcome {
    /// The widget closed.
    Closed,
    /// Focus landed on the option list itself; the widget stays open and
    /// the host should return focus to the entry field.
    Refocus,
}

/// Interaction state of one dropdown instance.
///
/// The host supplies a fresh [`DropdownConfig`] with every call; nothing
/// from it is retained here. Selection changes are proposed through
/// [`DropdownOutput`] values and applied by the host.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    open: bool,
    focused_index: usize,
    input_text: String,
}

impl DropdownState {
    /// Create the state for a freshly mounted widget: closed, highlight at
    /// the top, entry text seeded from the single-mode selection's label.
    pub fn new(config: &DropdownConfig) -> Self {
        Self {
            open: false,
            focused_index: 0,
            input_text: config
                .selected
                .as_ref()
                .map(|option| option.label.clone())
                .unwrap_or_default(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn focused_index(&self) -> usize {
        self.focused_index
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    /// Options currently eligible for display, given this state's text.
    pub fn visible<'a>(&self, config: &'a DropdownConfig) -> Vec<&'a SelectOption> {
        visible_options(config, &self.input_text)
    }

    /// The entry field gained focus: open the list and place the highlight
    /// on the currently selected option, or the top when nothing matches.
    pub fn handle_focus(&mut self, config: &DropdownConfig) {
        let visible = visible_options(config, &self.input_text);
        let selected_value = config.selected.as_ref().map(|option| option.value.as_str());
        self.focused_index = visible
            .iter()
            .position(|option| Some(option.value.as_str()) == selected_value)
            .unwrap_or(0);
        self.open = true;
        log::debug!(
            "[dropdown] focus: open, highlight={} visible={}",
            self.focused_index,
            visible.len()
        );
    }

    /// The entry field lost focus. When focus moved into the option list's
    /// own surface the widget stays open and asks the host to refocus the
    /// entry field; otherwise it closes.
    pub fn handle_blur(&mut self, to_list: bool) -> BlurOutcome {
        if to_list {
            log::debug!("[dropdown] blur into list, staying open");
            return BlurOutcome::Refocus;
        }
        self.open = false;
        BlurOutcome::Closed
    }

    /// Move the highlight circularly through the visible options.
    ///
    /// `Next` decrements (wrapping 0 to the last index) and `Previous`
    /// increments (wrapping the last index to 0); the inversion matches
    /// the visual stacking of the list. The index is not re-validated
    /// here against earlier filter changes.
    pub fn move_focus(&mut self, config: &DropdownConfig, direction: FocusDirection) {
        let visible = visible_options(config, &self.input_text);
        if visible.is_empty() {
            return;
        }

        let last = visible.len() - 1;
        self.focused_index = match direction {
            FocusDirection::Next => {
                if self.focused_index > 0 {
                    self.focused_index - 1
                } else {
                    last
                }
            }
            FocusDirection::Previous => {
                if self.focused_index < last {
                    self.focused_index + 1
                } else {
                    0
                }
            }
        };
    }

    /// Replace the entry text wholesale. Ignored when the field is not
    /// searchable (it acts as a click-to-open selector). The text is not
    /// validated against the option set.
    pub fn set_input_text(&mut self, config: &DropdownConfig, text: impl Into<String>) {
        if !config.searchable {
            return;
        }
        self.input_text = text.into();
    }

    /// Commit an option.
    ///
    /// Single mode: the entry text becomes the option's label and the list
    /// closes. Multi mode: the option is appended to a copy of the host's
    /// list, the entry text clears, and the list stays open for further
    /// picks. `Change` is emitted on every commit in both modes.
    pub fn choose(
        &mut self,
        config: &DropdownConfig,
        option: &SelectOption,
    ) -> Vec<DropdownOutput> {
        log::debug!("[dropdown] choose {:?}", option.value);
        let mut output = vec![DropdownOutput::Change(option.clone())];

        if config.multiselect {
            let mut next = config.selected_list.clone();
            next.push(option.clone());
            output.push(DropdownOutput::ChangeMulti(next));
            self.input_text.clear();
        } else {
            self.input_text = option.label.clone();
            self.open = false;
        }

        output
    }

    /// Remove an option from the multi-mode selection, by `value`. Legal
    /// whether the list is open or closed (e.g. clicking a chip's removal
    /// affordance).
    pub fn remove(&self, config: &DropdownConfig, option: &SelectOption) -> DropdownOutput {
        log::debug!("[dropdown] remove {:?}", option.value);
        let next = config
            .selected_list
            .iter()
            .filter(|sel| sel.value != option.value)
            .cloned()
            .collect();
        DropdownOutput::ChangeMulti(next)
    }

    /// Pointer commit on a visible row. Out-of-range indices are ignored.
    pub fn click_option(
        &mut self,
        config: &DropdownConfig,
        index: usize,
    ) -> Vec<DropdownOutput> {
        let chosen = visible_options(config, &self.input_text)
            .get(index)
            .map(|option| (*option).clone());
        match chosen {
            Some(option) => self.choose(config, &option),
            None => Vec::new(),
        }
    }

    /// Keyboard dispatch while the list is open. Closed widgets ignore
    /// keys; the host opens them through [`handle_focus`].
    ///
    /// [`handle_focus`]: DropdownState::handle_focus
    pub fn handle_key(
        &mut self,
        config: &DropdownConfig,
        key: Key,
        modifiers: Modifiers,
    ) -> Vec<DropdownOutput> {
        if !self.open {
            return Vec::new();
        }

        match key {
            Key::Escape => {
                // Cancel: close without committing.
                self.open = false;
                Vec::new()
            }

            Key::Up => {
                self.move_focus(config, FocusDirection::Next);
                Vec::new()
            }

            Key::Down => {
                self.move_focus(config, FocusDirection::Previous);
                Vec::new()
            }

            Key::Enter => {
                let chosen = visible_options(config, &self.input_text)
                    .get(self.focused_index)
                    .map(|option| (*option).clone());
                match chosen {
                    Some(option) => self.choose(config, &option),
                    None => Vec::new(),
                }
            }

            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                if config.searchable {
                    self.input_text.push(c);
                }
                Vec::new()
            }

            Key::Backspace if modifiers.none() => {
                if config.searchable {
                    self.input_text.pop();
                }
                Vec::new()
            }

            _ => Vec::new(),
        }
    }
}
