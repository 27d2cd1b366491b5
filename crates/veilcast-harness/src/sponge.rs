//! A deterministic duplex sponge over the Pallas base field.
//!
//! Three lanes, an x^5 S-box, additive round salts, and an invertible
//! mixing step. The shape mirrors a Poseidon-style permutation closely
//! enough to exercise every absorb/squeeze interleaving the protocol
//! performs, but the round count and constants were chosen for test
//! speed, not security margin. Do not deploy it.

use ff::Field;
use pasta_curves::pallas;
use veilcast_crypto::Sponge;

const WIDTH: usize = 3;
const ROUNDS: usize = 12;

/// Per-round salts; arbitrary odd constants, fixed so every test run
/// sees the identical permutation.
const ROUND_SALTS: [u64; ROUNDS] = [
    0x243F_6A88_85A3_08D3,
    0x1319_8A2E_0370_7345,
    0xA409_3822_299F_31D0,
    0x082E_FA98_EC4E_6C89,
    0x4528_21E6_38D0_1377,
    0xBE54_66CF_34E9_0C6D,
    0xC0AC_29B7_C97C_50DD,
    0x3F84_D5B5_B547_0917,
    0x9216_D5D9_8979_FB1B,
    0xD131_0BA6_98DF_B5AD,
    0x2FFD_72DB_D01A_DFB7,
    0xB8E1_AFED_6A26_7E97,
];

/// Deterministic test sponge; see the module docs for what it is not.
pub struct TestSponge {
    state: [pallas::Base; WIDTH],
}

impl TestSponge {
    fn permute(&mut self) {
        for round in 0..ROUNDS {
            for (lane, limb) in self.state.iter_mut().enumerate() {
                *limb += pallas::Base::from(ROUND_SALTS[round] ^ lane as u64);
                // x^5 S-box
                *limb = limb.square().square() * *limb;
            }
            // Invertible mix across lanes
            let [a, b, c] = self.state;
            self.state = [a + b, b + c, c + a];
        }
    }
}

impl Sponge for TestSponge {
    type Field = pallas::Base;

    fn new() -> Self {
        Self { state: [pallas::Base::ZERO; WIDTH] }
    }

    fn absorb(&mut self, input: Self::Field) {
        self.state[0] += input;
        self.permute();
    }

    fn squeeze(&mut self) -> Self::Field {
        self.permute();
        self.state[0]
    }
}
