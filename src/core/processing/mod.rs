//! Image transforms: watermark masking, fit-and-letterbox composition, and
//! artifact encoding.
pub mod mask;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
