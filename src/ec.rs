use crate::galois;
use crate::metadata::{ECLevel, Version};
use crate::reed_solomon::generator_polynomial;

// Error correction block
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Block {
    data: Vec<u8>,
    ecc: Vec<u8>,
}

impl Block {
    pub fn new(data: &[u8], generator: &[u8]) -> Self {
        let ecc = galois::remainder(generator, data);
        Self { data: data.to_vec(), ecc }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn ecc(&self) -> &[u8] {
        &self.ecc
    }
}

// Block split
//------------------------------------------------------------------------------

/// Splits the data codewords into error correction blocks. Raw codeword
/// count minus the error correction share determines each block's data
/// length; the `raw mod blocks` long blocks sit at the end, one codeword
/// longer than the rest.
pub(crate) fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<Block> {
    let num_blocks = version.num_blocks(ec_level);
    let ec_len = version.ecc_per_block(ec_level);
    let raw_codewords = version.total_codewords();

    let short_block_len = raw_codewords / num_blocks;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;

    let generator = generator_polynomial(ec_len);

    let mut blocks = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let data_len = short_block_len - ec_len + usize::from(i >= num_short_blocks);
        blocks.push(Block::new(&data[offset..offset + data_len], &generator));
        offset += data_len;
    }

    debug_assert!(
        offset == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {offset}",
        data.len(),
    );

    blocks
}
