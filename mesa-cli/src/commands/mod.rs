//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `list`: List reservations
//! - `show`: Show a single reservation
//! - `add`: Create a reservation
//! - `edit`: Change fields of a reservation
//! - `confirm`: Mark a reservation as confirmed
//! - `delete`: Delete a reservation after confirmation
//! - `whoami`: Show the current user id
//! - `validate`: Validate configuration file
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod completions;
pub mod confirm;
pub mod delete;
pub mod edit;
pub mod list;
pub mod show;
pub mod show_data_dir;
pub mod validate;
pub mod whoami;

pub use add::AddCommand;
pub use completions::CompletionsCommand;
pub use confirm::ConfirmCommand;
pub use delete::DeleteCommand;
pub use edit::EditCommand;
pub use list::ListCommand;
pub use show::ShowCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use validate::ValidateCommand;
pub use whoami::WhoamiCommand;
