//! The mapping between entities and the rows of a wide-column store.
//!
//! Every function here is pure: encoding, filter composition and decoding
//! only read the entity's static [`Schema`](crate::Schema) and never touch
//! the store.

mod decode;
pub use decode::{from_row, from_row_columns};

mod encode;
pub use encode::{to_mutation, to_mutations};

mod select;
pub use select::column_filter;
