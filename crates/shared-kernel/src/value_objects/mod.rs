pub mod byte_size;
pub mod counts;

pub use byte_size::ByteSize;
pub use counts::LineCount;
