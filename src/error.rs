// 错误定义

/// 结果类型
pub type Result<T> = core::result::Result<T, Error>;

/// 错误类型
///
/// 只覆盖初始化阶段的失败；运行期的异常（队列满、重复边沿、抖动）都被静默过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Error {
    /// 按键资源已被占用（重复初始化）
    AlreadyInitialized,
    /// 任务启动失败（任务池耗尽）
    SpawnFailed,
}
