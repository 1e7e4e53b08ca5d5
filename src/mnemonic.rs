use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of mnemonics this decoder produces.
///
/// `Invalid` stands in for undefined encodings when the driver is asked to
/// keep going; `Unimplemented` marks well-defined encoding families the
/// decoder does not cover yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mnemonic {
    Str,
    Ldr,
    Strb,
    Ldrb,
    Strh,
    Ldrh,
    Ldrsb,
    Ldrsh,
    Ldrsw,
    Stur,
    Ldur,
    Sturb,
    Ldurb,
    Sturh,
    Ldurh,
    Ldursb,
    Ldursh,
    Ldursw,
    Stp,
    Ldp,
    Stgp,
    Ldpsw,
    Prfm,
    Prfum,
    Invalid,
    Unimplemented,
}

impl Mnemonic {
    pub fn as_str(self) -> &'static str {
        match self {
            Mnemonic::Str => "str",
            Mnemonic::Ldr => "ldr",
            Mnemonic::Strb => "strb",
            Mnemonic::Ldrb => "ldrb",
            Mnemonic::Strh => "strh",
            Mnemonic::Ldrh => "ldrh",
            Mnemonic::Ldrsb => "ldrsb",
            Mnemonic::Ldrsh => "ldrsh",
            Mnemonic::Ldrsw => "ldrsw",
            Mnemonic::Stur => "stur",
            Mnemonic::Ldur => "ldur",
            Mnemonic::Sturb => "sturb",
            Mnemonic::Ldurb => "ldurb",
            Mnemonic::Sturh => "sturh",
            Mnemonic::Ldurh => "ldurh",
            Mnemonic::Ldursb => "ldursb",
            Mnemonic::Ldursh => "ldursh",
            Mnemonic::Ldursw => "ldursw",
            Mnemonic::Stp => "stp",
            Mnemonic::Ldp => "ldp",
            Mnemonic::Stgp => "stgp",
            Mnemonic::Ldpsw => "ldpsw",
            Mnemonic::Prfm => "prfm",
            Mnemonic::Prfum => "prfum",
            Mnemonic::Invalid => "invalid",
            Mnemonic::Unimplemented => "unimplemented",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction class. Tags decoded records and names the encoding families
/// left to collaborating decoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    LoadStore,
    Sve,
    Sme,
    SimdFp,
    SimdStructure,
    DataProcessingImm,
    DataProcessingReg,
    BranchExceptionSystem,
    MemoryTags,
    ExclusivePair,
    Exclusive,
    AcquireReleaseOrLiteral,
    Atomic,
    PointerAuth,
    Unprivileged,
    NoAllocatePair,
    Prefetch,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::LoadStore => "load/store",
            Category::Sve => "SVE",
            Category::Sme => "SME",
            Category::SimdFp => "SIMD/FP",
            Category::SimdStructure => "SIMD load/store structure",
            Category::DataProcessingImm => "data-processing (immediate)",
            Category::DataProcessingReg => "data-processing (register)",
            Category::BranchExceptionSystem => "branch/exception/system",
            Category::MemoryTags => "load/store memory tags",
            Category::ExclusivePair => "load/store exclusive pair",
            Category::Exclusive => "exclusive/ordered/compare-swap",
            Category::AcquireReleaseOrLiteral => "acquire-release or literal",
            Category::Atomic => "atomic memory operation",
            Category::PointerAuth => "pointer-auth load/store",
            Category::Unprivileged => "unprivileged load/store",
            Category::NoAllocatePair => "no-allocate pair",
            Category::Prefetch => "prefetch",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
