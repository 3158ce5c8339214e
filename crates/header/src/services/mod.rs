//! Collaborator traits consumed by the header, with the implementations the
//! crate ships

mod actions;
mod flags;
mod toast;
mod translate;

pub use actions::{AppAction, AppActions, RecordingAppActions, SystemAppActions};
pub use flags::{
    DARK_MODE_KEY, FileFlagStore, FlagStore, InMemoryFlagStore, PREFERENCES_FILE, flag_value,
    load_dark_mode,
};
pub use toast::{ToastLog, ToastRequest, ToastService};
pub use translate::{StaticTranslator, Translator};
