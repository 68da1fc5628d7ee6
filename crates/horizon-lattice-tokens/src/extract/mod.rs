//! Custom-property extraction from CSS text.

mod variable_map;
mod variables;

pub use variable_map::VariableMap;
pub use variables::{
    RootAndDark, extract_root_and_dark, extract_theme_block, extract_variables, has_theme_block,
};
