// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use log::{debug, trace};

use crate::device::config::DeviceConfig;
use crate::protocol::codec;
use crate::protocol::{Command, MifareRequest, Response};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, Uid};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
/// Chip woken up and configured; commands may be issued.
pub struct Initialized;

/// Device handle that enforces initialization state at compile time.
///
/// The chip protocol is half-duplex: every method issues one command and
/// consumes its response before returning, so at most one command is ever
/// outstanding.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: DeviceConfig,
    _state: PhantomData<State>,
}

impl<State> std::fmt::Debug for Device<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<State> Device<State> {
    /// Active configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// One command frame + ACK, then one response frame.
    fn exchange(&mut self, cmd: &Command) -> Result<Response> {
        let timeout = self.config.read_timeout_ms;
        codec::write_command(&mut *self.transport, cmd.opcode(), &cmd.payload(), timeout)?;
        let payload = codec::read_response(&mut *self.transport, cmd.opcode(), timeout)?;
        Response::decode(cmd, &payload)
    }
}

impl Device<Uninitialized> {
    /// Create a Device from an existing Transport instance with the default
    /// configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a device over `transport` with an explicit configuration.
    pub fn with_config(transport: Box<dyn Transport>, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            _state: PhantomData,
        }
    }

    /// Query the firmware, wake the chip, configure the SAM for normal
    /// operation and switch the RF field off.
    pub fn initialize(self) -> Result<Device<Initialized>> {
        let mut this = self;
        this.transport.reset()?;

        match this.exchange(&Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(v) => debug!("Found chip {}", v),
            other => return Err(unexpected(&other)),
        }

        this.exchange(&Command::sam_wakeup())?;
        let operational = Command::sam_operational(this.config.poll_interval_ms);
        this.exchange(&operational)?;

        let mut device = Device {
            transport: this.transport,
            config: this.config,
            _state: PhantomData,
        };
        device.rf_off()?;
        Ok(device)
    }
}

impl Device<Initialized> {
    /// Execute a command and return the parsed Response.
    pub fn execute(&mut self, cmd: Command) -> Result<Response> {
        self.exchange(&cmd)
    }

    /// Query IC, version, revision and support flags.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(Command::GetFirmwareVersion)? {
            Response::FirmwareVersion(v) => Ok(v),
            other => Err(unexpected(&other)),
        }
    }

    /// Turn the RF field off, leaving the chip idle.
    pub fn rf_off(&mut self) -> Result<()> {
        trace!("Turning RF field OFF");
        self.execute(Command::rf_off()).map(|_| ())
    }

    /// Scan for a single ISO14443A card. Returns `None` when no card, or
    /// more than one, answered.
    pub fn in_list_passive_target(&mut self) -> Result<Option<Uid>> {
        match self.execute(Command::scan_single_target())? {
            Response::InListPassiveTarget { count: 1, target } => Ok(target.map(|t| t.uid)),
            Response::InListPassiveTarget { count, .. } => {
                trace!("{} targets in field", count);
                Ok(None)
            }
            other => Err(unexpected(&other)),
        }
    }

    /// Send a card sub-command to the selected target. Returns the status
    /// byte and the bytes that follow it.
    pub fn data_exchange(&mut self, request: MifareRequest) -> Result<(u8, Vec<u8>)> {
        match self.execute(Command::data_exchange(request))? {
            Response::InDataExchange { status, data } => Ok((status, data)),
            other => Err(unexpected(&other)),
        }
    }
}

fn unexpected(resp: &Response) -> Error {
    Error::FrameFormat(format!("unexpected response {:?}", resp))
}
