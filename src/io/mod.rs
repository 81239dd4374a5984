//! I/O layer: decoding raw inputs into RGB images and the `writers`
//! that encode stage artifacts as PNG, JPEG or TIFF.
pub mod reader;
pub use reader::decode_rgb;

pub mod writers;
