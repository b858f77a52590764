use crate::option::SelectOption;

/// Host-supplied configuration for one render cycle.
///
/// The host owns the authoritative selection and threads it through here
/// every cycle; the widget never keeps its own copy. Defaults are resolved
/// once at construction rather than at each use site.
#[derive(Debug, Clone)]
pub struct DropdownConfig {
    pub options: Vec<SelectOption>,
    pub searchable: bool,
    pub multiselect: bool,
    pub placeholder: String,
    pub not_found_text: String,
    /// Current selection in single mode.
    pub selected: Option<SelectOption>,
    /// Current selection in multi mode, in selection order.
    pub selected_list: Vec<SelectOption>,
}

impl DropdownConfig {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            searchable: false,
            multiselect: false,
            placeholder: String::new(),
            not_found_text: "Not found".to_string(),
            selected: None,
            selected_list: Vec::new(),
        }
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    pub fn multiselect(mut self, multiselect: bool) -> Self {
        self.multiselect = multiselect;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn not_found_text(mut self, text: impl Into<String>) -> Self {
        self.not_found_text = text.into();
        self
    }

    pub fn selected(mut self, option: SelectOption) -> Self {
        self.selected = Some(option);
        self
    }

    pub fn selected_list(mut self, options: Vec<SelectOption>) -> Self {
        self.selected_list = options;
        self
    }
}
