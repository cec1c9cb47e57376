// 事件定义
//
// 中断、状态机和应用之间传递的数据类型

/// 引脚电平
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PinLevel {
    Low,
    High,
}

/// 边沿通知
///
/// 只表示"引脚上发生了一次边沿"，不携带电平；消费者总是重新采样
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct EdgeNotification;

/// 按键事件，传给应用回调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ButtonEvent {
    /// 短按（消抖时间 <= 时长 < 短按阈值）
    ShortPress,
    /// 长按（时长 >= 短按阈值）
    LongPress,
    /// 释放，总是紧跟在短按/长按之后
    Release,
}

/// 按键状态
///
/// 按下时间戳只存在于 `Pressed` 中
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum PressState {
    Idle,
    Pressed {
        /// 按下时刻（微秒）
        since_us: u64,
    },
}

impl PressState {
    pub const fn is_pressed(self) -> bool {
        matches!(self, PressState::Pressed { .. })
    }
}
