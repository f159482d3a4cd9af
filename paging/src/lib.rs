pub mod address;
pub mod page_table;

pub use address::{decompose, AddressError, Offset, PageNumber};
pub use page_table::{PageTable, PageTableEntry};
