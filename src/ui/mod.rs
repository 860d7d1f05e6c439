pub mod formatter;
pub mod progress;
pub mod prompt;
pub mod settings;

pub use formatter::Formatter;
pub use progress::{create_spinner, fail_spinner, succeed_spinner};
pub use prompt::{ConfirmPrompt, Confirmation, FixedAnswer};
