pub mod matrix;
pub mod qr_code;

pub use matrix::{Module, ModuleGrid, ModuleMatrix};
pub use qr_code::{ECLevel, MaskPattern, Version};
