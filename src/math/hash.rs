//! Keyed checksum hashing used as the root of all randomness
//!
//! Cryptographic quality is not needed. CRC-32 has the better bit
//! distribution and produces every exported value; Adler-32 is cheaper and
//! derives intermediate seeds, so the two never correlate for equal keys.

/// Mask keeping the low 30 bits; the top two are insufficiently random
pub const MAX_VALUE: u32 = 0x3FFF_FFFF;

/// CRC-32 of `data`, continuing from `initial`
pub fn crc32(data: &[u8], initial: u32) -> u32 {
    let mut hasher = crc32fast::Hasher::new_with_initial(initial);
    hasher.update(data);
    hasher.finalize()
}

/// Adler-32 of `data`, continuing from `initial`
pub fn adler32(data: &[u8], initial: u32) -> u32 {
    let mut hasher = adler2::Adler32::from_checksum(initial);
    hasher.write_slice(data);
    hasher.checksum()
}

/// Adler-32 of `data` from the standard starting value
pub fn seed_state(data: &[u8]) -> u32 {
    let mut hasher = adler2::Adler32::new();
    hasher.write_slice(data);
    hasher.checksum()
}

/// Map a hash to `[0, 1]` through the 30-bit mask
pub fn normalize(value: u32) -> f64 {
    f64::from(value & MAX_VALUE) / f64::from(MAX_VALUE)
}

/// Pseudorandom `[0, 1]` value for an integer lattice cell
pub fn lattice_value(seed: u32, cell_x: i64, cell_y: i64) -> f64 {
    let mut bytes = [0u8; 16];
    let (x_bytes, y_bytes) = bytes.split_at_mut(8);
    x_bytes.copy_from_slice(&cell_x.to_le_bytes());
    y_bytes.copy_from_slice(&cell_y.to_le_bytes());
    normalize(crc32(&bytes, seed))
}
