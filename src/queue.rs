// 边沿通知队列
use crate::config::EVENT_QUEUE_CAPACITY;
use crate::event::EdgeNotification;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// 底层通道类型
pub type EdgeChannel = Channel<CriticalSectionRawMutex, EdgeNotification, EVENT_QUEUE_CAPACITY>;

/// 有界 FIFO，连接中断上下文（单生产者）和按键任务（单消费者）
///
/// 临界区互斥保证 `try_enqueue` 可以在中断中调用
pub struct EdgeQueue {
    channel: EdgeChannel,
}

impl EdgeQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// 非阻塞入队，队列满时返回 false
    pub fn try_enqueue(&self) -> bool {
        self.channel.try_send(EdgeNotification).is_ok()
    }

    /// 出队，没有通知时一直等待
    pub async fn dequeue(&self) -> EdgeNotification {
        self.channel.receive().await
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.channel.is_full()
    }

    /// 丢弃所有排队的通知
    pub fn clear(&self) {
        self.channel.clear();
    }
}

impl Default for EdgeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;

    #[test]
    fn holds_exactly_capacity_notifications() {
        let queue = EdgeQueue::new();
        for _ in 0..EVENT_QUEUE_CAPACITY {
            assert!(queue.try_enqueue());
        }
        assert!(queue.is_full());
        assert!(!queue.try_enqueue());
        assert_eq!(queue.len(), EVENT_QUEUE_CAPACITY);
    }

    #[test]
    fn dequeue_frees_a_slot() {
        let queue = EdgeQueue::new();
        while queue.try_enqueue() {}

        assert_eq!(block_on(queue.dequeue()), EdgeNotification);
        assert_eq!(queue.len(), EVENT_QUEUE_CAPACITY - 1);
        assert!(queue.try_enqueue());
        assert!(!queue.try_enqueue());
    }

    #[test]
    fn dequeue_returns_to_empty() {
        let queue = EdgeQueue::new();
        assert!(queue.is_empty());

        queue.try_enqueue();
        assert!(!queue.is_empty());
        assert_eq!(block_on(queue.dequeue()), EdgeNotification);
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_drops_pending_notifications() {
        let queue = EdgeQueue::new();
        queue.try_enqueue();
        queue.try_enqueue();
        queue.clear();
        assert!(queue.is_empty());
    }
}
