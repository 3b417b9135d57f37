use std::io::{BufRead, Write};

use log::debug;

use crate::base::{Address, Error, Result, ServerSlot, DEFAULT_ADDRESS, SERVER_COUNT};

/// Asks the operator for one address per server slot.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn read_addresses(&mut self) -> Result<[Address; SERVER_COUNT]> {
        let [s1, s2, s3] = ServerSlot::all();
        Ok([
            self.read_address(s1)?,
            self.read_address(s2)?,
            self.read_address(s3)?,
        ])
    }

    pub fn read_address(&mut self, slot: ServerSlot) -> Result<Address> {
        write!(self.output, "Enter IP for {} [localhost]: ", slot.label())
            .and_then(|_| self.output.flush())
            .map_err(Error::io_error("write prompt"))?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .map_err(Error::io_error("read address from stdin"))?;
        if n == 0 {
            return Err(Error::input_closed(slot.index));
        }

        // only the line terminator is stripped, anything else is taken verbatim
        let address = line.trim_end_matches(&['\n', '\r'][..]);
        let address = if address.is_empty() {
            DEFAULT_ADDRESS.to_string()
        } else {
            address.to_string()
        };
        debug!("server {} address: {:?}", slot.index, address);

        Ok(address)
    }
}
