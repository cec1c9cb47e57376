// 板级驱动和任务（STM32F407，按键低电平有效）
use button_events::config::gpio_port_address;
use button_events::{
    ButtonHandle, ButtonResources, ButtonStateMachine, Clock, EdgeCapture, EdgeSource, Error,
    PinLevel, Result,
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Pin, Pull};
use embassy_stm32::pac;
use embassy_stm32::pac::gpio::vals;
use embassy_stm32::Peri;
use embassy_time::Instant;
use static_cell::StaticCell;

/// 直接读取 GPIO 输入寄存器的采样器
///
/// `ExtiInput` 归边沿任务所有，状态机通过寄存器读取同一引脚的电平
pub struct PinSampler {
    port: pac::gpio::Gpio,
    pin: usize,
}

impl PinSampler {
    /// 采样与 `pin` 相同的端口和引脚
    pub fn for_pin<T: Pin>(pin: &T) -> Self {
        // 只读取 IDR，不改变引脚配置
        let port = unsafe { pac::gpio::Gpio::from_ptr(gpio_port_address(pin.port()) as *mut ()) };
        Self {
            port,
            pin: pin.pin() as usize,
        }
    }
}

impl EdgeSource for PinSampler {
    fn level(&self) -> PinLevel {
        if self.port.idr().read().idr(self.pin) == vals::Idr::LOW {
            PinLevel::Low
        } else {
            PinLevel::High
        }
    }
}

/// embassy-time 单调时钟
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}

/// 固件使用的状态机类型（任务不能是泛型）
type ButtonMachine = ButtonStateMachine<'static, PinSampler, EmbassyClock>;

static BUTTON_RESOURCES: StaticCell<ButtonResources> = StaticCell::new();

/// 按键初始化
///
/// 配置双边沿中断输入，启动边沿任务和按键任务，返回应用句柄。
/// 只能调用一次；任何失败都直接返回给调用者。
pub fn button_init<T: Pin>(
    spawner: &Spawner,
    pin: Peri<'static, T>,
    exti: Peri<'static, T::ExtiChannel>,
) -> Result<ButtonHandle<'static>> {
    let resources: &'static ButtonResources = BUTTON_RESOURCES
        .try_init(ButtonResources::new())
        .ok_or(Error::AlreadyInitialized)?;

    // 采样器必须在引脚移交给 ExtiInput 之前取得端口和引脚号
    let sampler = PinSampler::for_pin(&*pin);

    // 上拉输入，任意边沿触发
    let input = ExtiInput::new(pin, exti, Pull::Up);

    let (capture, machine, handle) = resources.split(sampler, EmbassyClock);

    spawner
        .spawn(edge_task(input, capture))
        .map_err(|_| Error::SpawnFailed)?;
    info!("  - Edge task spawned");

    spawner
        .spawn(button_task(machine))
        .map_err(|_| Error::SpawnFailed)?;
    info!("  - Button task spawned");

    Ok(handle)
}

/// 边沿任务
///
/// 由 EXTI 中断唤醒，只把通知放进队列
#[embassy_executor::task]
async fn edge_task(mut input: ExtiInput<'static>, capture: EdgeCapture<'static>) -> ! {
    loop {
        input.wait_for_any_edge().await;
        capture.on_edge();
    }
}

/// 按键任务
#[embassy_executor::task]
async fn button_task(machine: ButtonMachine) -> ! {
    machine.run().await
}
