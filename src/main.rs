#![no_std]
#![no_main]

mod board;

use button_events::app::handlers::button::on_button_event;
use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::Config;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let config = Config::default();
    let p = embassy_stm32::init(config);

    info!("=== Button Event System ===");
    info!("Initializing...");

    // 初始化失败不可恢复
    let button = match board::button_init(&spawner, p.PA0, p.EXTI0) {
        Ok(handle) => handle,
        Err(e) => defmt::panic!("Button init failed: {:?}", e),
    };

    button.register_callback(on_button_event);
    info!("Button callback registered");

    info!("=== System ready ===");

    // 主任务空转
    loop {
        Timer::after_secs(60).await;
        info!("Main: System running...");
    }
}
