// 按键状态机
use crate::app::router::CallbackRegistry;
use crate::config::{DEBOUNCE_TIME_MS, SHORT_PRESS_THRESHOLD_MS};
use crate::drivers::{Clock, EdgeSource};
use crate::event::{ButtonEvent, PinLevel, PressState};
use crate::queue::EdgeQueue;

/// 按下时长分类
///
/// - 时长 < 消抖时间：抖动，丢弃
/// - 时长 < 短按阈值：短按
/// - 其他：长按
pub const fn classify(duration_ms: u64) -> Option<ButtonEvent> {
    if duration_ms < DEBOUNCE_TIME_MS {
        None
    } else if duration_ms < SHORT_PRESS_THRESHOLD_MS {
        Some(ButtonEvent::ShortPress)
    } else {
        Some(ButtonEvent::LongPress)
    }
}

/// 按键状态机
///
/// 从队列取边沿通知，重新采样引脚电平，跟踪按下/释放，计算按下时长并分发事件。
/// `PressState` 只在这里被修改，中断上下文从不接触它，所以不需要额外加锁。
pub struct ButtonStateMachine<'a, S, C> {
    source: S,
    clock: C,
    queue: &'a EdgeQueue,
    callbacks: &'a CallbackRegistry,
    state: PressState,
}

impl<'a, S: EdgeSource, C: Clock> ButtonStateMachine<'a, S, C> {
    /// 创建状态机，初始为空闲
    pub const fn new(
        source: S,
        clock: C,
        queue: &'a EdgeQueue,
        callbacks: &'a CallbackRegistry,
    ) -> Self {
        Self {
            source,
            clock,
            queue,
            callbacks,
            state: PressState::Idle,
        }
    }

    /// 当前状态
    pub fn state(&self) -> PressState {
        self.state
    }

    /// 处理一次唤醒
    ///
    /// 不信任通知内容，直接读取引脚的当前电平
    pub fn process(&mut self) {
        let level = self.source.level();

        match (self.state, level) {
            (PressState::Idle, PinLevel::Low) => {
                let since_us = self.clock.now_us();
                self.state = PressState::Pressed { since_us };
                debug!("Button pressed");
            }
            (PressState::Pressed { since_us }, PinLevel::High) => {
                self.state = PressState::Idle;
                let duration_ms = self.clock.now_us().saturating_sub(since_us) / 1000;
                self.on_release(duration_ms);
            }
            // 重复边沿或已合并的边沿
            _ => {}
        }
    }

    fn on_release(&self, duration_ms: u64) {
        let Some(event) = classify(duration_ms) else {
            debug!("Bounce ignored: {} ms", duration_ms);
            return;
        };

        match event {
            ButtonEvent::ShortPress => info!("Short press detected: {} ms", duration_ms),
            _ => info!("Long press detected: {} ms", duration_ms),
        }
        self.callbacks.dispatch(event);

        info!("Button released after: {} ms", duration_ms);
        self.callbacks.dispatch(ButtonEvent::Release);
    }

    /// 等待下一个边沿通知并处理
    pub async fn next(&mut self) {
        self.queue.dequeue().await;
        self.process();
    }

    /// 按键任务主循环，永不返回
    pub async fn run(mut self) -> ! {
        info!("Button task started");

        loop {
            self.next().await;
        }
    }
}
