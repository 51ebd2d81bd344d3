/// Abstraction over the Game Boy address space as seen by the processor.
///
/// `MemoryBus` is the production implementation; tests plug in a flat
/// 64 KiB array. Reads take `&mut self` because memory-mapped hardware
/// behind the bus may change state when read.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read: low byte at `addr`, high byte at
    /// `addr + 1` (wrapping). No alignment requirement.
    #[inline]
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write, low byte first.
    #[inline]
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
