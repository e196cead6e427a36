//! RustMicroCli - demo firmware
//!
//! Serial console on UART0 with a small command tree:
//! - `int <n>`: parse an integer literal, print it in several bases
//! - `echo ...`: print the arguments back
//! - `menu1`: submenu with `testmenu`
//! - `loglevel <0-4>`: console log verbosity (error..trace)
//!
//! Between polls the console log stream is drained to the same UART.

#![no_std]
#![no_main]

use core::fmt::Write;

use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys as esp_idf_sys;

use rust_micro_cli::console::{Args, CommandEntry, Context};
use rust_micro_cli::logging::{drain_to, LogLevel};
use rust_micro_cli::uart_port::{UartPort, UartPortConfig};
use rust_micro_cli::{command, submenu, Console, ConsoleError, PortWriter, CONSOLE_LOG};

static MENU1: &[CommandEntry] = &[
    command!(cmd_testmenu, "testmenu", "Submenu command"),
];

static ROOT: &[CommandEntry] = &[
    command!(cmd_int, "int", "Parse an integer", "int <n>: accepts 0x.., 0b.., 0.. (octal) or decimal\r\n"),
    command!(cmd_echo, "echo", "Print arguments"),
    command!(cmd_loglevel, "loglevel", "Set log verbosity", "loglevel <0-4>: error, warn, info, debug, trace\r\n"),
    submenu!(MENU1, "menu1", "Submenu test"),
];

fn cmd_int(ctx: &mut Context<'_>, args: &Args<'_>) -> Result<(), ConsoleError> {
    let value = args.int(0)?;
    let _ = write!(ctx, "dec {} oct {:o} hex {:x} bin {:b}\r\n", value, value, value, value);
    Ok(())
}

fn cmd_echo(ctx: &mut Context<'_>, args: &Args<'_>) -> Result<(), ConsoleError> {
    for (i, arg) in args.iter().skip(1).enumerate() {
        if i > 0 {
            ctx.print(" ");
        }
        ctx.print(arg);
    }
    ctx.print("\r\n");
    Ok(())
}

fn cmd_loglevel(ctx: &mut Context<'_>, args: &Args<'_>) -> Result<(), ConsoleError> {
    let level = LogLevel::from_u8(args.int_in(0, 0..=4)? as u8);
    CONSOLE_LOG.set_level(level);
    let _ = write!(ctx, "log level {}\r\n", level.as_str());
    Ok(())
}

fn cmd_testmenu(ctx: &mut Context<'_>, _args: &Args<'_>) -> Result<(), ConsoleError> {
    ctx.print("testmenu\r\n");
    Ok(())
}

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    let Ok(peripherals) = Peripherals::take() else {
        return;
    };

    // UART0 on the default console pins
    let Ok(mut port) = UartPort::new(
        peripherals.uart0,
        peripherals.pins.gpio43,
        peripherals.pins.gpio44,
        &UartPortConfig::default(),
    ) else {
        return;
    };

    let mut console = Console::new();
    console.initialize(ROOT, &mut PortWriter::new(&mut port));

    let mut rx_buf = [0u8; 64];

    loop {
        // Errors are already reported on the console itself
        let _ = console.poll_port(&mut port, &mut rx_buf);

        if CONSOLE_LOG.has_entries() {
            drain_to(&CONSOLE_LOG, &mut PortWriter::new(&mut port));
        }

        unsafe {
            esp_idf_sys::vTaskDelay(1);
        }
    }
}
