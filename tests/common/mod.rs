//! Recording backend and delay shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::blocking::{delay::DelayMs, rng};
use spi_tft::{Config, Signal, Tft, TftBackend};

/// Everything the driver did, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Pin(Signal, bool),
    Write(Vec<u8>),
    Delay(u16),
}

/// The event log decoded into protocol level operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// opcode and all data bytes that followed it
    Cmd(u8, Vec<u8>),
    Delay(u16),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusError;

pub type Budget = Rc<Cell<Option<usize>>>;

pub struct MockBackend {
    log: Log,
    writes_left: Budget,
}

impl TftBackend for MockBackend {
    type Error = BusError;

    fn set_pin(&mut self, signal: Signal, high: bool) -> Result<(), BusError> {
        self.log.borrow_mut().push(Event::Pin(signal, high));
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), BusError> {
        if let Some(left) = self.writes_left.get() {
            if left == 0 {
                return Err(BusError);
            }
            self.writes_left.set(Some(left - 1));
        }
        self.log.borrow_mut().push(Event::Write(bytes.to_vec()));
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.log.borrow_mut().push(Event::Delay(ms));
    }
}

/// Yields 0, 1, 2, ... wrapping at 255.
pub struct CountingRng(pub u8);

impl rng::Read for CountingRng {
    type Error = ();

    fn read(&mut self, buffer: &mut [u8]) -> Result<(), ()> {
        for b in buffer {
            *b = self.0;
            self.0 = self.0.wrapping_add(1);
        }
        Ok(())
    }
}

pub struct BrokenRng;

impl rng::Read for BrokenRng {
    type Error = ();

    fn read(&mut self, _buffer: &mut [u8]) -> Result<(), ()> {
        Err(())
    }
}

pub type TestTft = Tft<MockBackend, MockDelay>;

/// Driver after init, with the init traffic already removed from the log.
pub fn setup(config: Config) -> (TestTft, Log) {
    let (tft, log, _) = setup_with_budget(config);
    (tft, log)
}

/// Driver whose bus fails once `writes` more writes have gone through after init.
pub fn setup_failing(config: Config, writes: usize) -> (TestTft, Log) {
    let (tft, log, budget) = setup_with_budget(config);
    budget.set(Some(writes));
    (tft, log)
}

fn setup_with_budget(config: Config) -> (TestTft, Log, Budget) {
    let log = Log::default();
    let budget = Budget::default();
    let backend = MockBackend {
        log: log.clone(),
        writes_left: budget.clone(),
    };
    let tft = Tft::new(backend, MockDelay { log: log.clone() }, config)
        .expect("mock bus does not fail");
    log.borrow_mut().clear();
    (tft, log, budget)
}

/// Fresh driver with an empty log, init traffic included.
pub fn init(config: Config) -> (Result<TestTft, BusError>, Log) {
    let log = Log::default();
    let backend = MockBackend {
        log: log.clone(),
        writes_left: Budget::default(),
    };
    (Tft::new(backend, MockDelay { log: log.clone() }, config), log)
}

/// All events as protocol operations, checking CS/DC framing on the way.
pub fn ops(log: &Log) -> Vec<Op> {
    let mut ops = Vec::new();
    let mut dc_high = true;
    let mut selected = false;
    for event in log.borrow().iter() {
        match event {
            Event::Pin(Signal::DataCommand, high) => dc_high = *high,
            Event::Pin(Signal::ChipSelect, high) => selected = !*high,
            Event::Pin(Signal::Reset, _) => {}
            Event::Delay(ms) => ops.push(Op::Delay(*ms)),
            Event::Write(bytes) => {
                assert!(selected, "write while CS is high: {:?}", bytes);
                if dc_high {
                    match ops.last_mut() {
                        Some(Op::Cmd(_, data)) => data.extend_from_slice(bytes),
                        _ => panic!("data without a command: {:?}", bytes),
                    }
                } else {
                    assert_eq!(bytes.len(), 1, "commands are single bytes");
                    ops.push(Op::Cmd(bytes[0], Vec::new()));
                }
            }
        }
    }
    ops
}

pub fn cmd(opcode: u8, data: &[u8]) -> Op {
    Op::Cmd(opcode, data.to_vec())
}

/// Number of times CS went low.
pub fn transactions(log: &Log) -> usize {
    log.borrow()
        .iter()
        .filter(|e| **e == Event::Pin(Signal::ChipSelect, false))
        .count()
}

/// Top-left (x, y) of every RAMWR, taken from the CASET/RASET sent before it.
pub fn pixel_positions(ops: &[Op]) -> Vec<(u16, u16)> {
    let (mut x, mut y) = (None, None);
    let mut out = Vec::new();
    for op in ops {
        match op {
            Op::Cmd(0x2A, d) => x = Some(u16::from_be_bytes([d[0], d[1]])),
            Op::Cmd(0x2B, d) => y = Some(u16::from_be_bytes([d[0], d[1]])),
            Op::Cmd(0x2C, _) => out.push((x.expect("CASET before RAMWR"), y.expect("RASET before RAMWR"))),
            _ => {}
        }
    }
    out
}

/// RAMWR payload split into RGB565 words.
pub fn words(data: &[u8]) -> Vec<u16> {
    assert_eq!(data.len() % 2, 0);
    data.chunks(2).map(|w| u16::from_be_bytes([w[0], w[1]])).collect()
}
