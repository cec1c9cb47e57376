// 硬件抽象
use crate::event::PinLevel;

// 模拟驱动（用于测试）
pub mod mock_button;
pub mod mock_hw;

pub use mock_button::*;
pub use mock_hw::*;

/// 边沿源：被监视的按键引脚
pub trait EdgeSource {
    /// 读取当前电平（不阻塞）
    fn level(&self) -> PinLevel;
}

/// 单调时钟
pub trait Clock {
    /// 当前时间（微秒）
    fn now_us(&self) -> u64;
}

impl<T: EdgeSource + ?Sized> EdgeSource for &T {
    fn level(&self) -> PinLevel {
        (**self).level()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
