//! Simulated analog front end for host builds and tests.
//!
//! Samples are injected per channel.  A channel that was never set reads
//! as [`RAW_FAULT`], i.e. a disconnected probe.

use heapless::LinearMap;
use log::warn;

use crate::app::ports::{AnalogPort, RAW_FAULT};
use crate::sensors::ChannelId;

const SIM_CHANNELS: usize = 8;

#[derive(Debug, Default)]
pub struct SimAnalog {
    samples: LinearMap<ChannelId, u16, SIM_CHANNELS>,
    reads: usize,
}

impl SimAnalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value `channel` returns from now on.
    pub fn set(&mut self, channel: ChannelId, raw: u16) {
        if self.samples.insert(channel, raw).is_err() {
            warn!("SimAnalog: no room for {channel}, sample dropped");
        }
    }

    /// Make `channel` read as a failed conversion again.
    pub fn disconnect(&mut self, channel: ChannelId) {
        self.samples.remove(&channel);
    }

    /// Total `read_raw` calls served.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl AnalogPort for SimAnalog {
    fn read_raw(&mut self, channel: ChannelId) -> u16 {
        self.reads += 1;
        self.samples.get(&channel).copied().unwrap_or(RAW_FAULT)
    }
}
