//! `Math.random()` as a `rand` source.

use rand::RngCore;

/// Uniform randomness from the browser, used to shuffle the ticker.
///
/// Not cryptographic; the ticker only needs an unpredictable order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathRandom;

const U32_SPAN: f64 = 4_294_967_296.0;

impl RngCore for MathRandom {
    fn next_u32(&mut self) -> u32 {
        (js_sys::Math::random() * U32_SPAN) as u32
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
