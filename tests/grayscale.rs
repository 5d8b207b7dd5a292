//! End-to-end checks: draw with embedded-graphics, drive the real `Interface`
//! over recording SPI/GPIO mocks, and inspect the bytes on the wire.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle, Rectangle},
};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::spi::{self, Operation, SpiDevice};
use il0398::bitplane::decode_into;
use il0398::command::{
    DATA_START_TRANSMISSION_1, DATA_START_TRANSMISSION_2, DEEP_SLEEP, DEEP_SLEEP_CHECK_CODE,
    DISPLAY_REFRESH, GET_STATUS, LUT_WHITE_TO_WHITE, LUT_WHITE_TO_WHITE_2, POWER_ON,
    RESOLUTION_SETTING,
};
use il0398::{Config, Display, GraphicDisplay, Gray, Interface, PanelState};

/// One SPI transaction: DC level at the time, and the bytes written
type Wire = Rc<RefCell<Vec<(bool, Vec<u8>)>>>;

struct RecordingSpi {
    wire: Wire,
    dc: Rc<Cell<bool>>,
}

impl spi::ErrorType for RecordingSpi {
    type Error = Infallible;
}

impl SpiDevice for RecordingSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
        let mut bytes = Vec::new();
        for op in operations.iter() {
            if let Operation::Write(data) = op {
                bytes.extend_from_slice(data);
            }
        }
        self.wire.borrow_mut().push((self.dc.get(), bytes));
        Ok(())
    }
}

struct DcPin(Rc<Cell<bool>>);

impl ErrorType for DcPin {
    type Error = Infallible;
}

impl OutputPin for DcPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set(false);
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set(true);
        Ok(())
    }
}

struct RstPin;

impl ErrorType for RstPin {
    type Error = Infallible;
}

impl OutputPin for RstPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// BUSY line that reads low (busy) for a number of samples, then high
struct BusyPin(Rc<Cell<u32>>);

impl ErrorType for BusyPin {
    type Error = Infallible;
}

impl InputPin for BusyPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        let remaining = self.0.get();
        if remaining == 0 {
            return Ok(true);
        }
        self.0.set(remaining - 1);
        Ok(false)
    }
    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

type TestDisplay = Display<Interface<RecordingSpi, DcPin, RstPin, BusyPin>>;

fn test_display() -> (TestDisplay, Wire, Rc<Cell<u32>>) {
    let wire: Wire = Rc::new(RefCell::new(Vec::new()));
    let dc = Rc::new(Cell::new(false));
    let busy = Rc::new(Cell::new(0));
    let interface = Interface::new(
        RecordingSpi {
            wire: wire.clone(),
            dc: dc.clone(),
        },
        DcPin(dc),
        RstPin,
        BusyPin(busy.clone()),
    );
    (Display::new(interface, Config::default()), wire, busy)
}

/// Group the wire log into commands and the data bytes that followed each
fn commands(wire: &Wire) -> Vec<(u8, Vec<u8>)> {
    let mut out: Vec<(u8, Vec<u8>)> = Vec::new();
    for (is_data, bytes) in wire.borrow().iter() {
        if *is_data {
            if let Some((_, data)) = out.last_mut() {
                data.extend_from_slice(bytes);
            }
        } else {
            out.extend(bytes.iter().map(|cmd| (*cmd, Vec::new())));
        }
    }
    out
}

#[test]
fn every_byte_is_its_own_transaction() {
    let (mut display, wire, _busy) = test_display();
    display.reset(&mut NoDelay).unwrap();
    display.clear(&mut NoDelay).unwrap();

    let wire = wire.borrow();
    assert!(wire.iter().all(|(_, bytes)| bytes.len() == 1));
    // 8 init commands + 16 init data bytes, two 15000-byte planes + refresh
    assert_eq!(wire.len(), 8 + 16 + 2 * (1 + 15_000) + 1);
}

#[test]
fn resolution_is_sent_high_byte_first() {
    let (mut display, wire, _busy) = test_display();
    display.reset(&mut NoDelay).unwrap();

    let sent = commands(&wire);
    let resolution = sent
        .iter()
        .find(|(cmd, _)| *cmd == RESOLUTION_SETTING)
        .map(|(_, data)| data.clone());
    assert_eq!(resolution, Some(vec![0x01, 0x90, 0x01, 0x2C]));
}

#[test]
fn busy_panel_is_polled_with_status_queries() {
    let (mut display, wire, busy) = test_display();
    busy.set(4);
    display.reset(&mut NoDelay).unwrap();

    let sent: Vec<u8> = commands(&wire).iter().map(|(cmd, _)| *cmd).collect();
    let power_on = sent.iter().position(|c| *c == POWER_ON).unwrap();
    assert_eq!(&sent[power_on + 1..power_on + 5], [GET_STATUS; 4]);
    assert_ne!(sent[power_on + 5], GET_STATUS);
}

#[test]
fn drawn_image_survives_the_round_trip() {
    let (mut driver, wire, _busy) = test_display();
    driver.reset(&mut NoDelay).unwrap();
    let buffer = vec![0u8; driver.dimensions().buffer_size()];
    let mut display = GraphicDisplay::new(driver, buffer);
    display.clear(Gray::White);

    Rectangle::new(Point::new(0, 0), Size::new(400, 30))
        .into_styled(PrimitiveStyle::with_fill(Gray::Black))
        .draw(&mut display)
        .unwrap();
    Rectangle::new(Point::new(20, 100), Size::new(100, 50))
        .into_styled(PrimitiveStyle::with_fill(Gray::DarkGray))
        .draw(&mut display)
        .unwrap();
    Line::new(Point::new(0, 299), Point::new(399, 150))
        .into_styled(PrimitiveStyle::with_stroke(Gray::LightGray, 3))
        .draw(&mut display)
        .unwrap();

    wire.borrow_mut().clear();
    display.update(&mut NoDelay).unwrap();

    let sent = commands(&wire);
    assert_eq!(sent[0].0, DATA_START_TRANSMISSION_1);
    assert_eq!(sent[1].0, DATA_START_TRANSMISSION_2);
    assert_eq!(sent.last().map(|(cmd, _)| *cmd), Some(DISPLAY_REFRESH));

    let mut decoded = vec![0u8; 30_000];
    decode_into(&sent[0].1, &sent[1].1, &mut decoded);
    assert_eq!(decoded.as_slice(), display.buffer_mut());
}

#[test]
fn white_to_white_table_is_identical_at_both_registers() {
    let (mut display, wire, _busy) = test_display();
    display.reset(&mut NoDelay).unwrap();
    display.redraw(&[0x00; 30_000], &mut NoDelay).unwrap();

    let sent = commands(&wire);
    let table = |register: u8| {
        sent.iter()
            .find(|(cmd, _)| *cmd == register)
            .map(|(_, data)| data.clone())
            .unwrap()
    };
    assert_eq!(table(LUT_WHITE_TO_WHITE).len(), 42);
    assert_eq!(table(LUT_WHITE_TO_WHITE), table(LUT_WHITE_TO_WHITE_2));
}

#[test]
fn sleep_ends_the_session() {
    let (mut display, wire, _busy) = test_display();
    display.reset(&mut NoDelay).unwrap();
    display.sleep().unwrap();

    let sent = commands(&wire);
    assert_eq!(
        sent.last(),
        Some(&(DEEP_SLEEP, vec![DEEP_SLEEP_CHECK_CODE]))
    );
    assert_eq!(display.state(), PanelState::Asleep);

    let before = wire.borrow().len();
    assert!(display.redraw(&[0xFF; 30_000], &mut NoDelay).is_err());
    assert_eq!(wire.borrow().len(), before);
}
