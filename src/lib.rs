//! 单按键事件库
//!
//! 把按键引脚上的原始边沿转换为去抖后的按键事件：短按、长按、释放。
//!
//! 数据流：边沿中断 -> [`EdgeCapture`] -> [`EdgeQueue`] -> [`ButtonStateMachine`]
//! -> [`CallbackRegistry`] -> 应用回调。
//!
//! 核心逻辑不依赖具体芯片，可以在主机上测试：
//! ```text
//! cargo test --lib --target x86_64-unknown-linux-gnu
//! ```
//! 固件（`main.rs`）只负责引脚配置和任务启动。

// 测试需要 std
#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod capture;
pub mod config;
pub mod drivers;
pub mod error;
pub mod event;
pub mod queue;
pub mod system;
pub mod tasks;

pub use app::router::{ButtonCallback, CallbackRegistry};
pub use capture::EdgeCapture;
pub use drivers::{Clock, EdgeSource};
pub use error::{Error, Result};
pub use event::{ButtonEvent, EdgeNotification, PinLevel, PressState};
pub use queue::EdgeQueue;
pub use system::{ButtonHandle, ButtonResources};
pub use tasks::button_task::{ButtonStateMachine, classify};
