//! Form helper catalog.
//!
//! The helpers generate form markup for use inside templates:
//! - Typed helper functions (`open`, `text`, `select`, ...) for direct use
//! - A static helper table with engine-neutral dispatch
//! - Registration of the table with any [`HelperRegistry`]

mod args;
pub mod catalog;
mod registry;
mod select;

pub use args::{ATTRS_ARGUMENT, HelperArgs};
pub use catalog::{Checked, DEFAULT_TOKEN_NAME};
pub use registry::{
    HELPERS, HelperDescriptor, HelperFn, HelperRegistry, find_helper, helper_name,
    register_helpers,
};
pub use select::{MAX_RANGE_LEN, OptionEntry, SelectOptions, Selection, index_of};
