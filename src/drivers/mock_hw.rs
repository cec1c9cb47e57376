// 模拟其他硬件（时钟）
use super::Clock;
use core::cell::Cell;

/// 模拟时钟，只在显式推进时走动
pub struct MockClock {
    now_us: Cell<u64>,
}

impl MockClock {
    pub const fn new() -> Self {
        Self { now_us: Cell::new(0) }
    }

    /// 前进若干毫秒
    pub fn advance_ms(&self, ms: u64) {
        self.advance_us(ms * 1000);
    }

    /// 前进若干微秒
    pub fn advance_us(&self, us: u64) {
        self.now_us.set(self.now_us.get() + us);
    }
}

impl Clock for MockClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}
