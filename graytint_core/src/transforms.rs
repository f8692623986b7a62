pub mod tint;

pub use self::tint::tint_image;
