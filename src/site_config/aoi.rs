//! Area of interest module
//!
//! Derives the real-world bounding box analysed downstream from the GCPs and the four
//! pixel corners picked by the user.

mod delegate;
mod homography;
mod perspective_aoi;

pub use delegate::AoiDelegate;
pub use perspective_aoi::PerspectiveAoi;
