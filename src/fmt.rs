// 日志宏
//
// ARM 固件上转发到 defmt，主机测试构建中为空操作

#[cfg(target_arch = "arm")]
macro_rules! debug {
    ($($arg:tt)*) => { ::defmt::debug!($($arg)*) };
}

#[cfg(target_arch = "arm")]
macro_rules! info {
    ($($arg:tt)*) => { ::defmt::info!($($arg)*) };
}

#[cfg(not(target_arch = "arm"))]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

#[cfg(not(target_arch = "arm"))]
macro_rules! info {
    ($($arg:tt)*) => {{}};
}
