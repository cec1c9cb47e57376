// 模拟按键驱动（用于测试）
use super::EdgeSource;
use crate::event::PinLevel;
use core::cell::Cell;

/// 模拟按键引脚
///
/// 上拉输入，空闲为高电平，按下为低电平
pub struct MockButton {
    level: Cell<PinLevel>,
}

impl MockButton {
    pub const fn new() -> Self {
        Self {
            level: Cell::new(PinLevel::High),
        }
    }

    /// 按下（拉低）
    pub fn press(&self) {
        self.level.set(PinLevel::Low);
    }

    /// 松开（回到高电平）
    pub fn release(&self) {
        self.level.set(PinLevel::High);
    }
}

impl EdgeSource for MockButton {
    fn level(&self) -> PinLevel {
        self.level.get()
    }
}

impl Default for MockButton {
    fn default() -> Self {
        Self::new()
    }
}
