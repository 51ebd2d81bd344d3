use super::super::Cpu;

impl Cpu {
    /// Finish a delayed enable requested by EI.
    ///
    /// A DI executed in between has already cleared the pending request, in
    /// which case IME stays off.
    #[inline]
    pub(in crate::cpu) fn commit_ime(&mut self) {
        if self.ime_pending {
            self.ime = true;
            self.ime_pending = false;
        }
    }
}
