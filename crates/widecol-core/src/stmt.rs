mod column;
pub use column::Column;

mod filter;
pub use filter::Filter;

mod filter_and;
pub use filter_and::FilterAnd;

mod filter_column_value;
pub use filter_column_value::FilterColumnValue;

mod filter_family;
pub use filter_family::FilterFamily;

mod filter_or;
pub use filter_or::FilterOr;

mod filter_qualifier_prefix;
pub use filter_qualifier_prefix::FilterQualifierPrefix;

mod mutation;
pub use mutation::{Mutation, Put};

mod op_compare;
pub use op_compare::CompareOp;

mod record;
pub use record::Record;

mod row;
pub use row::{Cell, Row};

mod row_stream;
pub use row_stream::RowStream;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
