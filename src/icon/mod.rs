pub mod error;
pub mod inspect;
pub mod render;
pub mod sizes;

pub use error::ConvertError;
pub use sizes::{ICON_SIZES, IconSize};
