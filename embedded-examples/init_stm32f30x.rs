//! Full example code for setting up an SH1106 display and drawing on it. This runs on an
//! STM32F303RE, using a 1.3" 128x64 SH1106 module connected to SPI1, PA8 for D/C, and PA9 for
//! /RESET.

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate embedded_hal as hal_api;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate sh1106_gfx;

use core::fmt::Write;
use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::prelude::*;
use hal::spi;
use sh1106_gfx as oled;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);

    // SPI1 is Alternate Function 5 for GPIOs PA5,6,7.
    let disp_sck = gpioa.pa5.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_miso = gpioa.pa6.into_af5(&mut gpioa.moder, &mut gpioa.afrl);
    let disp_mosi = gpioa.pa7.into_af5(&mut gpioa.moder, &mut gpioa.afrl);

    let disp_spi = spi::Spi::spi1(
        dp.SPI1,
        (disp_sck, disp_miso, disp_mosi),
        hal_api::spi::Mode {
            polarity: hal_api::spi::Polarity::IdleLow,
            phase: hal_api::spi::Phase::CaptureOnFirstTransition,
        },
        8.mhz(),
        clocks,
        &mut rcc.apb2,
    );

    let disp_dc = gpioa
        .pa8
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // The driver does not control /RESET; pulse it here before init.
    let mut disp_rst = gpioa
        .pa9
        .into_push_pull_output(&mut gpioa.moder, &mut gpioa.otyper);

    // Two frame buffers: one on screen, one being prepared.
    let mut disp: oled::Display<_, 2> =
        oled::Display::new(oled::SpiInterface::new(disp_spi, disp_dc));

    disp_rst.set_low();
    delay.delay_ms(10_u16);
    disp_rst.set_high();

    disp.init(
        oled::Config::new()
            .com_scan_direction(oled::ComScanDirection::Remapped)
            .segment_remap(oled::SegmentRemap::Reversed),
        &mut delay,
    ).unwrap();

    {
        let fb = disp.buffer_mut();
        fb.draw_rframe(0, 0, 128, 64, 4);
        fb.draw_disc(100, 32, 12, oled::Quadrants::ALL);
        fb.draw_filled_triangle(
            oled::Point::new(10, 54),
            oled::Point::new(40, 30),
            oled::Point::new(70, 54),
        );
    }
    disp.set_cursor(8, 8);
    write!(disp, "SH1106 {}x{}", oled::consts::NUM_COLUMNS, oled::consts::NUM_ROWS).unwrap();
    disp.flush().unwrap();

    // Prepare the second screen, then flip between the two.
    disp.buffers_mut().next();
    disp.draw_str(30, 28, "Hello, world!");

    loop {
        disp.flush().unwrap();
        delay.delay_ms(1_000_u16);
        disp.buffers_mut().next();
    }
}
