use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A serialized script.
///
/// Only the handful of push forms needed by the coinbase scriptSig are built
/// here; script execution lives outside this crate.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Script(Vec<u8>);

impl Script {
    /// An empty script; pays to nobody and can never be satisfied
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Script({})", hex::encode(&self.0))
    }
}

/// Incremental script builder with standard minimal push encoding
#[derive(Clone, Debug, Default)]
pub struct ScriptBuilder(Vec<u8>);

// Push opcodes used by the builder
const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;
const OP_1NEGATE: u8 = 0x4f;
const OP_1: u8 = 0x51;

impl ScriptBuilder {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Pushes an integer: dedicated opcodes for -1 and 0..=16, a minimally
    /// encoded script number otherwise.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8 - 1)),
            _ => return self.push_slice(&encode_script_num(n)),
        }
        self
    }

    /// Pushes raw bytes with the smallest applicable push opcode
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        match data.len() {
            n if n < OP_PUSHDATA1 as usize => self.0.push(n as u8),
            n if n <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(n as u8);
            }
            n if n <= 0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n => {
                self.0.push(OP_PUSHDATA4);
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn into_script(self) -> Script {
        Script(self.0)
    }
}

/// Minimal script-number serialization: little-endian magnitude with the
/// sign carried in the top bit of the last byte.
fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }

    let negative = n < 0;
    let mut value = n.unsigned_abs();
    let mut out = Vec::new();
    while value > 0 {
        out.push((value & 0xff) as u8);
        value >>= 8;
    }

    let last = *out.last().unwrap();
    if last & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        *out.last_mut().unwrap() |= 0x80;
    }

    out
}
