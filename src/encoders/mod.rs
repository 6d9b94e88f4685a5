pub mod algorithms;
mod limits;

pub use algorithms::errors::{
    CodecError, DECODE_FAILED_MESSAGE, DecodeError, ENCODE_FAILED_MESSAGE, EncodeError,
};
pub use algorithms::{chunked, radix};
pub use limits::Limits;
