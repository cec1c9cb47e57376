// 中断捕获
use crate::queue::EdgeQueue;

/// 中断上下文中的边沿捕获
///
/// 只做一件事：把边沿通知非阻塞地放进队列。不记录日志，不计时，不消抖。
/// 队列满时通知被静默丢弃，消费者每次都重新采样引脚，因此丢失的通知不会让状态失步。
#[derive(Clone, Copy)]
pub struct EdgeCapture<'a> {
    queue: &'a EdgeQueue,
}

impl<'a> EdgeCapture<'a> {
    pub const fn new(queue: &'a EdgeQueue) -> Self {
        Self { queue }
    }

    /// 边沿中断处理
    #[inline]
    pub fn on_edge(&self) {
        let _ = self.queue.try_enqueue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EVENT_QUEUE_CAPACITY;

    #[test]
    fn each_edge_enqueues_one_notification() {
        let queue = EdgeQueue::new();
        let capture = EdgeCapture::new(&queue);

        capture.on_edge();
        capture.on_edge();

        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn edges_beyond_capacity_are_dropped() {
        let queue = EdgeQueue::new();
        let capture = EdgeCapture::new(&queue);

        for _ in 0..EVENT_QUEUE_CAPACITY + 5 {
            capture.on_edge();
        }

        assert!(queue.is_full());
        assert_eq!(queue.len(), EVENT_QUEUE_CAPACITY);
    }
}
