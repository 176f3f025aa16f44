mod common;

use common::*;
use spi_tft::{Color, Config, Controller, RandomFillError};

#[test]
fn pixel_sends_window_and_color() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_pixel(3, 7, Color::Red).unwrap();

    assert_eq!(
        ops(&log),
        vec![
            cmd(0x2A, &[0, 3, 0, 3]),
            cmd(0x2B, &[0, 7, 0, 7]),
            cmd(0x2C, &[0xF8, 0x00]),
        ]
    );
}

#[test]
fn pixel_off_screen_is_silent() {
    let (mut tft, log) = setup(Config::default());
    for (x, y) in [(-1, 0), (0, -1), (128, 0), (0, 160), (i32::MIN, i32::MAX)] {
        tft.draw_pixel(x, y, 0xFFFFu16).unwrap();
    }
    assert!(log.borrow().is_empty());
}

#[test]
fn last_pixel_is_on_screen() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_pixel(127, 159, 0x1234u16).unwrap();
    assert_eq!(pixel_positions(&ops(&log)), vec![(127, 159)]);
}

#[test]
fn offsets_shift_the_window() {
    let (mut tft, log) = setup(Config::default().size(128, 128).offset(2, 3));
    tft.draw_pixel(0, 0, 0u16).unwrap();

    let ops = ops(&log);
    assert_eq!(ops[0], cmd(0x2A, &[0, 2, 0, 2]));
    assert_eq!(ops[1], cmd(0x2B, &[0, 3, 0, 3]));
}

#[test]
fn horizontal_line() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(0, 0, 5, 0, Color::White).unwrap();

    let ops = ops(&log);
    assert_eq!(
        pixel_positions(&ops),
        (0..=5).map(|x| (x, 0)).collect::<Vec<_>>()
    );
}

#[test]
fn vertical_line() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(0, 0, 0, 5, Color::White).unwrap();

    assert_eq!(
        pixel_positions(&ops(&log)),
        (0..=5).map(|y| (0, y)).collect::<Vec<_>>()
    );
}

#[test]
fn reversed_line_walks_backwards() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(5, 2, 2, 2, 0u16).unwrap();

    assert_eq!(
        pixel_positions(&ops(&log)),
        vec![(5, 2), (4, 2), (3, 2), (2, 2)]
    );
}

#[test]
fn zero_length_line_is_one_pixel() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(4, 4, 4, 4, 0u16).unwrap();
    assert_eq!(pixel_positions(&ops(&log)), vec![(4, 4)]);
}

#[test]
fn diagonal_line() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(0, 0, 3, 3, 0u16).unwrap();
    assert_eq!(
        pixel_positions(&ops(&log)),
        vec![(0, 0), (1, 1), (2, 2), (3, 3)]
    );
}

#[test]
fn shallow_line_has_no_minor_step() {
    // 2 / 10 truncates to 0
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(0, 0, 10, 2, 0u16).unwrap();

    let positions = pixel_positions(&ops(&log));
    assert_eq!(positions.len(), 11);
    assert!(positions.iter().all(|&(_, y)| y == 0));
}

#[test]
fn line_skips_pixels_off_screen() {
    let (mut tft, log) = setup(Config::default());
    tft.draw_line(-2, 0, 2, 0, 0u16).unwrap();
    assert_eq!(
        pixel_positions(&ops(&log)),
        vec![(0, 0), (1, 0), (2, 0)]
    );
}

#[test]
fn fill_is_one_transaction() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(10, 20, 4, 3, Color::Blue).unwrap();

    assert_eq!(transactions(&log), 3);
    let ops = ops(&log);
    assert_eq!(ops[0], cmd(0x2A, &[0, 10, 0, 13]));
    assert_eq!(ops[1], cmd(0x2B, &[0, 20, 0, 22]));
    match &ops[2] {
        Op::Cmd(0x2C, data) => assert_eq!(words(data), vec![0x001F; 12]),
        other => panic!("expected RAMWR, got {:?}", other),
    }
}

#[test]
fn fill_clips_at_right_and_bottom_edge() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(120, 150, 50, 50, 0xAAAAu16).unwrap();

    let ops = ops(&log);
    assert_eq!(ops[0], cmd(0x2A, &[0, 120, 0, 127]));
    assert_eq!(ops[1], cmd(0x2B, &[0, 150, 0, 159]));
    match &ops[2] {
        Op::Cmd(0x2C, data) => assert_eq!(data.len(), 8 * 10 * 2),
        other => panic!("expected RAMWR, got {:?}", other),
    }
}

#[test]
fn fill_with_corner_off_screen_draws_nothing() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(-1, 0, 10, 10, 0u16).unwrap();
    tft.fill_rect(0, 160, 10, 10, 0u16).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn fill_with_empty_size_draws_nothing() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(0, 0, 0, 10, 0u16).unwrap();
    tft.fill_rect(0, 0, 10, -3, 0u16).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn fill_leaves_dc_low() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(0, 0, 1, 1, 0u16).unwrap();

    let log = log.borrow();
    let n = log.len();
    assert_eq!(
        &log[n - 2..],
        &[
            Event::Pin(spi_tft::Signal::ChipSelect, true),
            Event::Pin(spi_tft::Signal::DataCommand, false),
        ]
    );
}

#[test]
fn large_fill_is_split_into_bursts() {
    let (mut tft, log) = setup(Config::default());
    tft.fill_rect(0, 0, 100, 1, 0u16).unwrap();

    let data_writes = log
        .borrow()
        .iter()
        .filter(|e| matches!(e, Event::Write(bytes) if bytes.len() > 4))
        .count();
    // 200 bytes in 64 byte chunks
    assert_eq!(data_writes, 4);
}

#[test]
fn clear_screen_covers_the_panel() {
    let (mut tft, log) = setup(Config::new(Controller::Ili9341));
    tft.clear_screen().unwrap();

    let ops = ops(&log);
    assert_eq!(ops[0], cmd(0x2A, &[0, 0, 0, 239]));
    assert_eq!(ops[1], cmd(0x2B, &[0, 0, 0x01, 0x3F]));
    match &ops[2] {
        Op::Cmd(0x2C, data) => {
            assert_eq!(data.len(), 240 * 320 * 2);
            assert!(data.iter().all(|&b| b == 0));
        }
        other => panic!("expected RAMWR, got {:?}", other),
    }
}

#[test]
fn random_fill_takes_bytes_from_rng() {
    let (mut tft, log) = setup(Config::default());
    tft.random_fill_rect(0, 0, 2, 2, &mut CountingRng(0))
        .unwrap();

    assert_eq!(ops(&log)[2], cmd(0x2C, &[0, 1, 2, 3, 4, 5, 6, 7]));
}

#[test]
fn random_fill_clips_like_fill() {
    let (mut tft, log) = setup(Config::default());
    tft.random_fill_rect(126, 0, 10, 1, &mut CountingRng(0))
        .unwrap();
    tft.random_fill_rect(-5, 0, 10, 1, &mut CountingRng(0))
        .unwrap();

    let ops = ops(&log);
    assert_eq!(ops.len(), 3);
    assert_eq!(ops[2], cmd(0x2C, &[0, 1, 2, 3]));
}

#[test]
fn random_fill_reports_rng_errors() {
    let (mut tft, _log) = setup(Config::default());
    let result = tft.random_fill_rect(0, 0, 2, 2, &mut BrokenRng);
    assert!(matches!(result, Err(RandomFillError::Rng(()))));
}

#[test]
fn random_fill_reports_bus_errors() {
    let (mut tft, _log) = setup_failing(Config::default(), 0);
    let result = tft.random_fill_rect(0, 0, 2, 2, &mut CountingRng(0));
    assert!(matches!(result, Err(RandomFillError::Bus(BusError))));
}

#[test]
fn bus_error_stops_a_line() {
    // CASET and RASET with their parameters, then the RAMWR opcode fails
    let (mut tft, log) = setup_failing(Config::default(), 4);
    assert_eq!(tft.draw_line(0, 0, 5, 0, 0u16), Err(BusError));
    assert!(pixel_positions(&ops(&log)).is_empty());
}
