//! TableIntent- und TableCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::TableCommand;
pub use intent::TableIntent;
