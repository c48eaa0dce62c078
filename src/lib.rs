mod loadable_data;
pub use loadable_data::*;

mod loadable_data_event;
pub use loadable_data_event::*;

mod update;
pub use update::*;
