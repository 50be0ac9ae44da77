use std::ops::Deref;

use log::{debug, info};

use crate::ec::blockify;
use crate::encode::encode;
use crate::error::QRResult;
use crate::mask::{apply_best_mask, MaskingPattern};
use crate::metadata::ECLevel;
use crate::qr::QR;
use crate::render::Frame;

// QR builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a str,
    ec_level: ECLevel,
    size: u32,
    padding: u32,
    overlay: Option<(u32, u32)>,
    mask: Option<MaskingPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            ec_level: ECLevel::H,
            size: Frame::DEFAULT_SIZE,
            padding: 0,
            overlay: None,
            mask: None,
        }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    /// Target side length of the drawable surface in pixels. The module
    /// size is the largest whole number of pixels that fits; the surface
    /// shrinks to the nearest multiple plus padding.
    pub fn size(&mut self, size: u32) -> &mut Self {
        self.size = size;
        self
    }

    /// Quiet zone around the symbol in pixels, normalized to even.
    pub fn padding(&mut self, padding: u32) -> &mut Self {
        self.padding = padding;
        self
    }

    /// Pixel footprint of the logo overlay. Used to reserve the central
    /// window and to scale the logo at composition time.
    pub fn overlay_dimensions(&mut self, dims: (u32, u32)) -> &mut Self {
        self.overlay = Some(dims);
        self
    }

    pub fn mask(&mut self, mask: MaskingPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Ec level: {:?}, Size: {}, Padding: {}, Overlay: {:?} }}",
            self.ec_level, self.size, self.padding, self.overlay
        )
    }
}

impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        info!("Generating QR {}...", self.metadata());

        debug!("Encoding data...");
        let (codewords, version, mode) = encode(self.data, self.ec_level)?;

        debug!("Computing ecc blocks...");
        let blocks = blockify(&codewords, version, self.ec_level);

        debug!("Interleaving and chaining data & ecc...");
        let data_blocks = blocks.iter().map(|b| b.data()).collect::<Vec<_>>();
        let ecc_blocks = blocks.iter().map(|b| b.ecc()).collect::<Vec<_>>();
        let mut payload = Self::interleave(&data_blocks);
        payload.extend(Self::interleave(&ecc_blocks));

        debug!("Constructing QR...");
        let frame = Frame::fit(self.size, self.padding, version.width()).with_overlay(self.overlay);
        let mut qr = QR::with_frame(version, self.ec_level, frame);

        debug!("Drawing function patterns...");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_encoding_region(&payload);

        let best_mask = match self.mask {
            Some(m) => {
                debug!("Applying mask {}...", *m);
                qr.mask(m);
                m
            }
            None => {
                debug!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        if let Some((w, h)) = self.overlay {
            debug!("Reserving overlay window...");
            qr.reserve_overlay(w, h)?;
        }

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        info!(
            "QR generated: {} {mode:?}, mask {}, balance {}%",
            qr.metadata(),
            *best_mask,
            dark_modules * 100 / total_modules
        );

        Ok(qr)
    }

    fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().expect("Blocks is empty");
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
