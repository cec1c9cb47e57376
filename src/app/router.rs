// 事件路由器（回调注册表）
use crate::event::ButtonEvent;
use core::cell::Cell;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// 按键回调函数指针类型
///
/// 回调在按键任务中同步执行，执行期间后续的边沿通知都在排队。
/// 回调必须很快返回；耗时的工作应转交给其他任务（例如发送到通道）。
pub type ButtonCallback = fn(ButtonEvent);

/// 回调注册表
///
/// 最多保存一个回调，后注册的覆盖先注册的
pub struct CallbackRegistry {
    slot: Mutex<CriticalSectionRawMutex, Cell<Option<ButtonCallback>>>,
}

impl CallbackRegistry {
    /// 创建空的注册表
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(Cell::new(None)),
        }
    }

    /// 注册回调，覆盖之前的回调
    pub fn register(&self, callback: ButtonCallback) {
        self.slot.lock(|slot| slot.set(Some(callback)));
    }

    /// 移除回调
    pub fn unregister(&self) {
        self.slot.lock(|slot| slot.set(None));
    }

    /// 是否已注册回调
    pub fn is_registered(&self) -> bool {
        self.slot.lock(|slot| slot.get().is_some())
    }

    /// 分发事件
    ///
    /// 没有回调时什么也不做。回调在锁外调用，不会占用临界区。
    pub fn dispatch(&self, event: ButtonEvent) {
        if let Some(callback) = self.slot.lock(|slot| slot.get()) {
            callback(event);
        }
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}
