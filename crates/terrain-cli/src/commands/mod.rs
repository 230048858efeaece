pub mod compare;
pub mod distance;
pub mod info;
