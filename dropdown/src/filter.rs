use regex::RegexBuilder;

use crate::config::DropdownConfig;
use crate::option::SelectOption;

/// Compute the options currently eligible for display.
///
/// Pure function of the config and the entry-field text; recomputed on
/// every cycle, never cached. Rules in priority order:
///
/// 1. Single mode with the field showing exactly the selected option's
///    label: the full list ("just selected" means "show everything", not
///    "filter by the label").
/// 2. Searchable single mode: options whose `value` matches the text as a
///    case-insensitive pattern. Matching runs against `value`, not
///    `label` — hosts relying on label search must keep the two aligned.
/// 3. Multi mode: options not already selected (by `value`), additionally
///    matched against the text when searchable.
/// 4. Otherwise the full list.
pub fn visible_options<'a>(
    config: &'a DropdownConfig,
    input_text: &str,
) -> Vec<&'a SelectOption> {
    if !config.multiselect {
        if let Some(selected) = &config.selected {
            if input_text == selected.label {
                return config.options.iter().collect();
            }
        }
    }

    if config.searchable && !config.multiselect {
        return config
            .options
            .iter()
            .filter(|option| matches_pattern(&option.value, input_text))
            .collect();
    }

    if config.multiselect {
        return config
            .options
            .iter()
            .filter(|option| {
                let already_selected = config
                    .selected_list
                    .iter()
                    .any(|sel| sel.value == option.value);
                let matched = !config.searchable || matches_pattern(&option.value, input_text);
                matched && !already_selected
            })
            .collect();
    }

    config.options.iter().collect()
}

/// Case-insensitive pattern match. The text comes straight from the entry
/// field, so an unparseable pattern is treated as matching nothing rather
/// than surfacing an error.
fn matches_pattern(value: &str, pattern: &str) -> bool {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(value),
        Err(_) => false,
    }
}
