pub mod dialogs;
pub mod form_field;
pub mod success;
pub mod terminal_guard;
pub mod wizard;

pub use dialogs::AlertDialog;
pub use success::SuccessView;
pub use wizard::{WizardResult, WizardScreen};
