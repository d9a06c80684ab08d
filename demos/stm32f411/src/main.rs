//! Drive an LCD1602 from a STM32F411RET6 in 4 bit mode

//! Wiring diagram
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PA0
//!      RW <-> GND (the driver is write-only)
//!      EN <-> PA2 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!      D4 <-> PA3
//!      D5 <-> PA4
//!      D6 <-> PA5
//!      D7 <-> PA6
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_parallel::{bus::PinBank, lcd::Lcd1602, pins::PinAssignment};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);
    let mut pause = dp.TIM2.delay_ms(&clocks);

    // init needed digital pins

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for a fast interaction
    let mut bank = PinBank::new([
        gpioa.pa0.into_push_pull_output().erase(), // RS, id 0
        gpioa.pa2.into_push_pull_output().erase(), // EN, id 1
        gpioa.pa3.into_push_pull_output().erase(), // D4, id 2
        gpioa.pa4.into_push_pull_output().erase(), // D5, id 3
        gpioa.pa5.into_push_pull_output().erase(), // D6, id 4
        gpioa.pa6.into_push_pull_output().erase(), // D7, id 5
    ]);

    let mut lcd = Lcd1602::new(&mut bank, &mut delayer);

    // only six outputs are wired; the low data fields stay unused and the
    // driver falls back to the 4 bit bus
    lcd.init(&PinAssignment {
        rs: 0,
        en: 1,
        d0: 0xFF,
        d1: 0xFF,
        d2: 0xFF,
        d3: 0xFF,
        d4: 2,
        d5: 3,
        d6: 4,
        d7: 5,
    })
    .expect("LCD initialization failed");

    rprintln!("LCD up, bus width {:?}", lcd.bus_width());

    lcd.set_cursor(0, 0).unwrap();
    lcd.print_str("temp ").unwrap();
    lcd.print_float(23.5, 1).unwrap();
    lcd.print_str(" C").unwrap();

    // walk a progress bar across the second row forever
    let mut progress = 0u8;
    loop {
        lcd.print_progress_bar(1, progress).unwrap();
        progress = match progress {
            100 => 0,
            _ => progress + 5,
        };
        pause.delay_ms(200u32);
    }
}
