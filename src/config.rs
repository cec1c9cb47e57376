// 按键常量
//
// 固定值，运行期不可配置

/// 消抖时间（毫秒）：按下时长低于此值的释放视为触点抖动
pub const DEBOUNCE_TIME_MS: u64 = 50;

/// 短按/长按分界（毫秒）
pub const SHORT_PRESS_THRESHOLD_MS: u64 = 1000;

/// 边沿通知队列容量
pub const EVENT_QUEUE_CAPACITY: usize = 10;

/// GPIOA 寄存器基地址（STM32F4 AHB1）
pub const GPIO_BASE: usize = 0x4002_0000;

/// 相邻 GPIO 端口寄存器块的间隔
pub const GPIO_PORT_STRIDE: usize = 0x400;

/// 端口号（A = 0, B = 1, ...）对应的寄存器块地址
pub const fn gpio_port_address(port: u8) -> usize {
    GPIO_BASE + GPIO_PORT_STRIDE * port as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_addresses_follow_f4_memory_map() {
        assert_eq!(gpio_port_address(0), 0x4002_0000);
        assert_eq!(gpio_port_address(1), 0x4002_0400);
        assert_eq!(gpio_port_address(3), 0x4002_0C00);
        assert_eq!(gpio_port_address(8), 0x4002_2000);
    }
}
