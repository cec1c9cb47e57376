// 按键事件处理
use crate::event::ButtonEvent;

/// 处理按键事件
///
/// 在按键任务中同步调用，只记录日志，不做耗时操作
pub fn on_button_event(event: ButtonEvent) {
    match event {
        ButtonEvent::ShortPress => info!("Handler: short press"),
        ButtonEvent::LongPress => info!("Handler: long press"),
        ButtonEvent::Release => info!("Handler: released"),
    }
}
