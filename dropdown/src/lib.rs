pub mod config;
pub mod event;
pub mod filter;
pub mod option;
pub mod state;

pub use config::DropdownConfig;
pub use event::{DropdownOutput, FocusDirection, Key, Modifiers};
pub use filter::visible_options;
pub use option::SelectOption;
pub use state::{BlurOutcome, DropdownState};
