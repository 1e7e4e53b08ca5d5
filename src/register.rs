use serde::{Deserialize, Serialize};
use std::fmt;

/// Register file a decoded register index belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegFamily {
    /// 32-bit general purpose
    W,
    /// 64-bit general purpose
    X,
    /// 8-bit scalar FP
    B,
    /// 16-bit scalar FP
    H,
    /// 32-bit scalar FP
    S,
    /// 64-bit scalar FP
    D,
    /// 128-bit vector
    V,
    /// Stack pointer
    Sp,
}

impl RegFamily {
    fn prefix(self) -> &'static str {
        match self {
            RegFamily::W => "w",
            RegFamily::X => "x",
            RegFamily::B => "b",
            RegFamily::H => "h",
            RegFamily::S => "s",
            RegFamily::D => "d",
            RegFamily::V => "v",
            RegFamily::Sp => "sp",
        }
    }
}

/// A concrete register identity: family plus index 0..31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reg {
    pub family: RegFamily,
    pub index: u8,
}

impl Reg {
    pub fn new(family: RegFamily, index: u8) -> Self {
        debug_assert!(index < 32);
        Self { family, index }
    }

    /// Base register of a memory operand. Index 31 always names SP here,
    /// never the zero register.
    pub fn base(rn: u32) -> Self {
        if rn == 31 {
            Self::new(RegFamily::Sp, 31)
        } else {
            Self::new(RegFamily::X, rn as u8)
        }
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.family, self.index) {
            (RegFamily::Sp, _) => write!(f, "sp"),
            (RegFamily::W, 31) => write!(f, "wzr"),
            (RegFamily::X, 31) => write!(f, "xzr"),
            (family, index) => write!(f, "{}{}", family.prefix(), index),
        }
    }
}
