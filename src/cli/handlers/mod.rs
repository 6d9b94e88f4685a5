pub mod convert;
pub mod decode;
pub mod encode;
pub mod providers;
