//! ROM (MAC address) generation.

use rand::Rng;
use smbios_catalog::ROM_PREFIXES;

/// Returns a random MAC address under an Apple prefix, as 12 upper-case hex
/// digits.
pub fn generate_rom<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let prefix = ROM_PREFIXES[rng.random_range(0..ROM_PREFIXES.len())];
    let tail: [u8; 3] = rng.random();
    format!("{prefix}{:02X}{:02X}{:02X}", tail[0], tail[1], tail[2])
}
