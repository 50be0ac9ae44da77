//! # qrinlay
//!
//! A Rust library for generating QR codes with Reed-Solomon error correction
//! and an optional reserved center window for a logo inlay.
//!
//! ## Features
//!
//! - **QR Code Generation**: Encodes text into QR versions 1-20 at error
//!   correction level H, with automatic version fitting
//! - **Reed-Solomon Error Correction**: Per-block error correction codewords
//!   computed over GF(256) and interleaved into the symbol
//! - **Mask Optimization**: All 8 masking patterns scored with the 4-rule
//!   penalty, lowest score wins
//! - **Logo Inlay**: A centered window is reserved in the module grid and
//!   the logo image is composited into it independently of symbol painting
//!
//! ## Quick Start
//!
//! ```rust
//! use qrinlay::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("https://developer.mozilla.org/en-US/")
//!     .size(370)
//!     .padding(8)
//!     .build()?;
//!
//! let img = qr.render();
//! # Ok(())
//! # }
//! ```
//!
//! ## With a logo inlay
//!
//! ```rust,no_run
//! use qrinlay::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let logo = image::open("logo.png")?;
//!
//! let qr = QRBuilder::new("https://developer.mozilla.org/en-US/")
//!     .size(370)
//!     .overlay_dimensions((60, 60))
//!     .build()?;
//!
//! // The two paint steps are independent: the grid is painted on build
//! // completion, the logo whenever its asset is ready.
//! let mut img = qr.render();
//! qr.compose_overlay(&mut img, &logo);
//! img.save("qr.png")?;
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod ec;
pub(crate) mod encode;
pub mod error;
pub(crate) mod galois;
pub(crate) mod iter;
pub mod mask;
pub mod metadata;
pub mod qr;
pub(crate) mod reed_solomon;
pub mod render;

pub use builder::QRBuilder;
pub use error::{QRError, QRResult};
pub use mask::MaskingPattern;
pub use metadata::{ECLevel, Version};
pub use qr::{Color, Module, QR};
pub use render::Frame;
