//! # Driver for ST7735 and ILI9341 SPI color TFT displays
//!
//! The displays are driven over a 4-wire SPI-like bus (MOSI, SCK, CS, DC) plus a RESET line.
//! Every transfer is either a command byte (DC low) or data bytes (DC high); the controller
//! keeps its own frame memory, so this driver holds no framebuffer. Pixels are written by first
//! programming an "address window" and then streaming RGB565 words into it.
//!
//! Typical use:
//!  - build a backend from a hardware SPI peripheral and the CS/DC/RESET pins with
//!    [`TftSpiBackend::new()`], or from two GPIO pins with [`BitBangSpi`]
//!  - create the driver with [`Tft::new()`], which runs the controller init sequence
//!  - draw with [`Tft::fill_rect()`], [`Tft::draw_line()`], [`Tft::show_string()`], ...
//!
//! ## Crate features
//!  - `text` *(default)*: 5x5 bitmap font, [`Tft::show_string()`] and [`Tft::show_number()`]
//!  - `scroll` *(default)*: hardware vertical scrolling
//!  - `graphics`: `embedded_graphics_core::DrawTarget` implementation
//!  - `defmt`: debug logging through [`defmt`](https://docs.rs/defmt)
#![cfg_attr(not(test), no_std)]

extern crate embedded_hal as hal;

pub mod backend;
pub mod color;
pub mod config;
pub mod controller;
pub mod display;
pub mod draw;
pub mod dummypins;
pub mod error;
pub mod instructions;
pub mod spi;

#[cfg(feature = "text")]
pub mod font;
#[cfg(feature = "text")]
pub mod textmode;

#[cfg(feature = "scroll")]
pub mod scroll;

#[cfg(feature = "graphics")]
pub mod graphics;

pub use crate::{
    backend::{Signal, SpiBackendError, TftBackend, TftSpiBackend},
    color::Color,
    config::Config,
    controller::Controller,
    display::Tft,
    dummypins::DummyOutputPin,
    error::RandomFillError,
    spi::BitBangSpi,
};

/// SPI clock the displays are known to run reliably at.
pub const SPI_FREQUENCY_HZ: u32 = 4_000_000;

/// SPI mode expected by both controllers (CPOL = 0, CPHA = 0).
pub const SPI_MODE: hal::spi::Mode = hal::spi::MODE_0;
