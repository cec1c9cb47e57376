// 按键系统资源
use crate::app::router::{ButtonCallback, CallbackRegistry};
use crate::capture::EdgeCapture;
use crate::drivers::{Clock, EdgeSource};
use crate::queue::EdgeQueue;
use crate::tasks::button_task::ButtonStateMachine;

/// 按键系统共享的资源：边沿队列和回调注册表
///
/// 固件中放在 `StaticCell` 里，初始化时只构造一次
pub struct ButtonResources {
    queue: EdgeQueue,
    callbacks: CallbackRegistry,
}

impl ButtonResources {
    pub const fn new() -> Self {
        Self {
            queue: EdgeQueue::new(),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// 拆分为中断捕获、状态机和应用句柄
    pub fn split<S: EdgeSource, C: Clock>(
        &self,
        source: S,
        clock: C,
    ) -> (EdgeCapture<'_>, ButtonStateMachine<'_, S, C>, ButtonHandle<'_>) {
        let capture = EdgeCapture::new(&self.queue);
        let machine = ButtonStateMachine::new(source, clock, &self.queue, &self.callbacks);
        let handle = ButtonHandle {
            callbacks: &self.callbacks,
        };
        (capture, machine, handle)
    }
}

impl Default for ButtonResources {
    fn default() -> Self {
        Self::new()
    }
}

/// 应用侧句柄
#[derive(Clone, Copy)]
pub struct ButtonHandle<'a> {
    callbacks: &'a CallbackRegistry,
}

impl ButtonHandle<'_> {
    /// 注册按键回调，后注册的覆盖先注册的
    ///
    /// 回调在按键任务中同步执行，必须很快返回
    pub fn register_callback(&self, callback: ButtonCallback) {
        self.callbacks.register(callback);
    }
}
