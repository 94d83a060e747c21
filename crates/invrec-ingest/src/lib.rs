pub mod csv_table;
pub mod discovery;
pub mod layout;

pub use csv_table::read_csv_table;
pub use discovery::list_csv_files;
pub use layout::{InputLayout, load_inputs};
