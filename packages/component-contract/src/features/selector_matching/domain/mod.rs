pub mod class_list;
pub mod selector;

pub use class_list::ClassListScanner;
pub use selector::{last_compound, split_top_level, unquote, AttrOperator, SimpleSelector};
