//! Command codes recognized by the dispatch table.
//!
//! Each constant is the 8-bit value carried in request word 0, bits `[7:0]`.
//! A code with no registered handler yields
//! [`crate::status::STATUS_SCRATCH_ONLY`]; the list below is the full set
//! the controller is aware of, not the set of codes a given build actually
//! handles — that depends on which handlers the platform registers.

/// Reserved; no platform handles this code.
pub const RESERVED_01: u8 = 0x01;
/// No-op request.
pub const NOP: u8 = 0x11;
/// Set a voltage rail.
pub const SET_VOLTAGE: u8 = 0x12;
/// Read back a voltage rail.
pub const GET_VOLTAGE: u8 = 0x13;
/// Switch the active clock scheme.
pub const SWITCH_CLK_SCHEME: u8 = 0x14;
/// Debug NOC address translation.
pub const DEBUG_NOC_TRANSLATION: u8 = 0x15;
/// Report that a queue is scratch-only.
pub const REPORT_SCRATCH_ONLY: u8 = 0x16;
/// Send a PCIe MSI.
pub const SEND_PCIE_MSI: u8 = 0x17;
/// Switch VOUT control mode.
pub const SWITCH_VOUT_CONTROL: u8 = 0x18;
/// Read the EEPROM.
pub const READ_EEPROM: u8 = 0x19;
/// Write the EEPROM.
pub const WRITE_EEPROM: u8 = 0x1A;
/// Read a temperature sensor.
pub const READ_TS: u8 = 0x1B;
/// Read a phase detector.
pub const READ_PD: u8 = 0x1C;
/// Read a voltage monitor.
pub const READ_VM: u8 = 0x1D;
/// Forward an I2C message.
pub const I2C_MESSAGE: u8 = 0x1E;
/// Burn eFuse bits.
pub const EFUSE_BURN_BITS: u8 = 0x1F;
/// Reinitialize Tensix.
pub const REINIT_TENSIX: u8 = 0x20;
/// Get the frequency curve derived from a voltage.
pub const GET_FREQ_CURVE_FROM_VOLTAGE: u8 = 0x30;
/// Start an AI clock sweep.
pub const AISWEEP_START: u8 = 0x31;
/// Stop an AI clock sweep.
pub const AISWEEP_STOP: u8 = 0x32;
/// Force the AI clock to a specific value.
pub const FORCE_AICLK: u8 = 0x33;
/// Read the current AI clock.
pub const GET_AICLK: u8 = 0x34;
/// Force VDD to a specific value.
pub const FORCE_VDD: u8 = 0x39;
/// PCIe index request.
pub const PCIE_INDEX: u8 = 0x51;
/// Transition the AI clock to the busy state.
pub const AICLK_GO_BUSY: u8 = 0x52;
/// Transition the AI clock to the long-idle state.
pub const AICLK_GO_LONG_IDLE: u8 = 0x54;
/// Trigger a reset. Argument `3` resets ASIC + M3; other values reset the
/// ASIC only.
pub const TRIGGER_RESET: u8 = 0x56;
/// Reserved; no platform handles this code.
pub const RESERVED_60: u8 = 0x60;
/// Test request, not handled on production builds.
pub const TEST: u8 = 0x90;
/// PCIe DMA transfer, chip to host.
pub const PCIE_DMA_CHIP_TO_HOST_TRANSFER: u8 = 0x9B;
/// PCIe DMA transfer, host to chip.
pub const PCIE_DMA_HOST_TO_CHIP_TRANSFER: u8 = 0x9C;
/// Reset the PCIe error counter.
pub const PCIE_ERROR_CNT_RESET: u8 = 0x9D;
/// Trigger a PCIe IRQ.
pub const TRIGGER_IRQ: u8 = 0x9F;
/// ASIC state 0 request.
pub const ASIC_STATE0: u8 = 0xA0;
/// ASIC state 1 request.
pub const ASIC_STATE1: u8 = 0xA1;
/// ASIC state 3 request.
pub const ASIC_STATE3: u8 = 0xA3;
/// ASIC state 5 request.
pub const ASIC_STATE5: u8 = 0xA5;
/// Get the voltage curve derived from a frequency.
pub const GET_VOLTAGE_CURVE_FROM_FREQ: u8 = 0xA6;
/// Force the fan speed.
pub const FORCE_FAN_SPEED: u8 = 0xAC;
/// Read the DRAM temperature.
pub const GET_DRAM_TEMPERATURE: u8 = 0xAD;
/// Toggle the Tensix reset line.
pub const TOGGLE_TENSIX_RESET: u8 = 0xAF;
/// Start a DRAM built-in self-test.
pub const DRAM_BIST_START: u8 = 0xB0;
/// Write one word over the NOC.
pub const NOC_WRITE_WORD: u8 = 0xB1;
/// Toggle the Ethernet reset line.
pub const TOGGLE_ETH_RESET: u8 = 0xB2;
/// Set the DRAM refresh rate.
pub const SET_DRAM_REFRESH_RATE: u8 = 0xB3;
/// Run an ARC DMA transfer.
pub const ARC_DMA: u8 = 0xB4;
/// Test the SPI bus.
pub const TEST_SPI: u8 = 0xB5;
/// Report the current date.
pub const CURR_DATE: u8 = 0xB7;
/// Update the M3 auto-reset timeout.
pub const UPDATE_M3_AUTO_RESET_TIMEOUT: u8 = 0xBC;
/// Clear the auto-reset counter.
pub const CLEAR_NUM_AUTO_RESET: u8 = 0xBD;
/// Set the last-serial value reported in the queue header.
pub const SET_LAST_SERIAL: u8 = 0xBE;
/// Burn the eFuse.
pub const EFUSE_BURN: u8 = 0xBF;
/// Ping the data mover.
pub const PING_DM: u8 = 0xC0;
/// Set the watchdog timeout.
pub const SET_WDT_TIMEOUT: u8 = 0xC1;
