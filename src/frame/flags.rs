//! # Frame Flag Definitions
//!
//! Typed views of the flag1/flag2 octets carried by SoC, PReq and PRes
//! frames. The flag octets stay raw `u8` on the frame structs (their
//! semantics belong to the NMT and scheduling layers); these types give
//! producers and consumers named bits to work with. Bit positions follow
//! EPSG DS 301.

use bitflags::bitflags;

bitflags! {
    /// Flag bits of the SoC flag1 octet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SocFlags: u8 {
        /// Multiplexed Cycle Completed
        const MC = 0x80;
        /// Prescaled Slot
        const PS = 0x40;
    }
}

bitflags! {
    /// Flag bits of the PReq flag1 octet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PreqFlags: u8 {
        /// Multiplexed Slot
        const MS = 0x20;
        /// Exception Acknowledge
        const EA = 0x04;
        /// Ready
        const RD = 0x01;
    }
}

bitflags! {
    /// Flag bits of the PRes flag1 octet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PresFlags: u8 {
        /// Multiplexed Slot
        const MS = 0x20;
        /// Exception New
        const EN = 0x10;
        /// Ready
        const RD = 0x01;
    }
}

/// Mask of the Priority (PR) field within the PRes flag2 octet
pub const FLAG2_PR_MASK: u8 = 0x38;

/// Shift of the Priority (PR) field within the PRes flag2 octet
pub const FLAG2_PR_SHIFT: u8 = 3;

/// Mask of the RequestToSend (RS) field within the PRes flag2 octet
pub const FLAG2_RS_MASK: u8 = 0x07;

/// Extract the Priority (PR) field from a PRes flag2 octet.
pub fn pr_from_flag2(flag2: u8) -> u8 {
    (flag2 & FLAG2_PR_MASK) >> FLAG2_PR_SHIFT
}

/// Extract the RequestToSend (RS) field from a PRes flag2 octet.
pub fn rs_from_flag2(flag2: u8) -> u8 {
    flag2 & FLAG2_RS_MASK
}

/// Compose a PRes flag2 octet from PR and RS field values.
///
/// Values wider than their field are truncated to the field mask.
pub fn flag2_from_pr_rs(pr: u8, rs: u8) -> u8 {
    ((pr << FLAG2_PR_SHIFT) & FLAG2_PR_MASK) | (rs & FLAG2_RS_MASK)
}
