//! Stack instructions: PHA, PLA, PHP, PLP.

use crate::addressing::AddressInfo;
use crate::cpu::{Cpu, Flag};
use crate::memory::MemoryBus;

/// PHA - Push Accumulator
pub(crate) fn pha<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let a = cpu.a();
    cpu.push(a);
    false
}

/// PLA - Pull Accumulator
pub(crate) fn pla<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let value = cpu.pop();
    cpu.a = value;
    cpu.set_zn(value);
    false
}

/// PHP - Push Processor Status
///
/// The pushed copy always has the Break and unused bits set.
pub(crate) fn php<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let status = cpu.status() | Flag::B as u8 | Flag::U as u8;
    cpu.push(status);
    false
}

/// PLP - Pull Processor Status
///
/// The Break flag is discarded and the unused bit forced on.
pub(crate) fn plp<B: MemoryBus>(cpu: &mut Cpu<B>, _info: AddressInfo) -> bool {
    let status = cpu.pop();
    cpu.set_status((status & !(Flag::B as u8)) | Flag::U as u8);
    false
}
