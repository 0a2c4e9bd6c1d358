//! # Big-Integer Arithmetic
//!
//! Fixed-capacity unsigned integers and Montgomery modular exponentiation,
//! sized for RSA moduli up to 4096 bits.
//!
//! ## Security Notes
//!
//! - Exponentiation uses a 4-bit fixed window: every exponent nibble costs
//!   exactly four squarings and one multiplication, whatever its value.
//! - Window table lookups touch every entry (`subtle` conditional assignment),
//!   so memory access does not depend on exponent bits.
//! - Montgomery reduction ends with a branch-free conditional subtraction.
//! - [`ct_eq`] compares byte strings in constant time; use it for anything
//!   derived from a recovered signature.
//!
//! Only public keys pass through here, so the exponent is public. The
//! constant-time discipline above is kept anyway and costs little.

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::errors::ArithmeticError;

type Limb = u64;

/// Bits per limb.
pub const LIMB_BITS: usize = Limb::BITS as usize;

/// Largest supported operand width in bits.
pub const MAX_BITS: usize = 4096;

/// Largest supported operand width in limbs.
pub const MAX_LIMBS: usize = MAX_BITS / LIMB_BITS;

const LIMB_BYTES: usize = LIMB_BITS / 8;
const WINDOW_BITS: usize = 4;
const WINDOW_SIZE: usize = 1 << WINDOW_BITS;

// =============================================================================
// BigUint
// =============================================================================

/// Unsigned integer stored as little-endian 64-bit limbs.
///
/// Never wider than [`MAX_BITS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigUint {
    limbs: Vec<Limb>,
}

impl BigUint {
    /// Parse a big-endian byte string. Leading zero bytes are ignored.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ArithmeticError> {
        let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
        let bytes = &bytes[start..];
        if bytes.len() > MAX_BITS / 8 {
            return Err(ArithmeticError::ArithmeticOverflow);
        }

        let mut limbs = vec![0; bytes.len().div_ceil(LIMB_BYTES).max(1)];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.rchunks(LIMB_BYTES)) {
            let mut buf = [0u8; LIMB_BYTES];
            buf[LIMB_BYTES - chunk.len()..].copy_from_slice(chunk);
            *limb = Limb::from_be_bytes(buf);
        }
        Ok(Self { limbs })
    }

    /// Big-endian encoding left-padded with zeros to exactly `len` bytes.
    ///
    /// Fails if the value needs more than `len` bytes.
    pub fn to_be_bytes(&self, len: usize) -> Result<Vec<u8>, ArithmeticError> {
        let needed = self.bits().div_ceil(8);
        if needed > len {
            return Err(ArithmeticError::ArithmeticOverflow);
        }

        let mut out = vec![0u8; len];
        for (i, limb) in self.limbs.iter().enumerate() {
            for (j, byte) in limb.to_le_bytes().iter().enumerate() {
                let pos = i * LIMB_BYTES + j;
                if pos < len {
                    out[len - 1 - pos] = *byte;
                }
            }
        }
        Ok(out)
    }

    /// Number of significant bits (0 for zero).
    pub fn bits(&self) -> usize {
        match self.limbs.iter().rposition(|&l| l != 0) {
            Some(top) => top * LIMB_BITS + (LIMB_BITS - self.limbs[top].leading_zeros() as usize),
            None => 0,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// Copy into exactly `len` limbs, failing if significant limbs would be lost.
    fn resized(&self, len: usize) -> Result<Vec<Limb>, ArithmeticError> {
        if self.limbs.iter().skip(len).any(|&l| l != 0) {
            return Err(ArithmeticError::ArithmeticOverflow);
        }
        let mut out = vec![0; len];
        let keep = len.min(self.limbs.len());
        out[..keep].copy_from_slice(&self.limbs[..keep]);
        Ok(out)
    }
}

// =============================================================================
// Montgomery arithmetic
// =============================================================================

/// An odd modulus prepared for Montgomery multiplication.
///
/// All working buffers are sized to the modulus limb count up front, so
/// exponentiation does not reallocate.
#[derive(Clone, Debug)]
pub struct MontgomeryModulus {
    /// Modulus limbs, little-endian, top limb non-zero
    n: Vec<Limb>,
    /// -n^-1 mod 2^64
    n0_inv: Limb,
    /// R^2 mod n, with R = 2^(64 * limbs)
    r2: Vec<Limb>,
    /// Byte length of the modulus
    byte_len: usize,
}

impl MontgomeryModulus {
    /// Prepare `modulus`.
    ///
    /// Fails with `InvalidModulus` if the modulus is zero, one or even.
    pub fn new(modulus: &BigUint) -> Result<Self, ArithmeticError> {
        let bits = modulus.bits();
        if bits <= 1 || !modulus.is_odd() {
            return Err(ArithmeticError::InvalidModulus);
        }

        let n = modulus.resized(bits.div_ceil(LIMB_BITS))?;
        let n0_inv = neg_inv(n[0]);
        let r2 = compute_r2(&n);

        Ok(Self {
            n,
            n0_inv,
            r2,
            byte_len: bits.div_ceil(8),
        })
    }

    /// Prepare a big-endian modulus.
    pub fn from_be_bytes(modulus: &[u8]) -> Result<Self, ArithmeticError> {
        Self::new(&BigUint::from_be_bytes(modulus)?)
    }

    /// Modulus width in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Modulus width in limbs.
    pub fn limbs(&self) -> usize {
        self.n.len()
    }

    /// Compute `base^exponent mod n`.
    ///
    /// `exponent` is big-endian and public: the number of operations depends
    /// only on its byte length. Fails with `ArithmeticOverflow` if
    /// `base >= n`.
    pub fn modpow(&self, base: &BigUint, exponent: &[u8]) -> Result<BigUint, ArithmeticError> {
        let len = self.n.len();
        let base = base.resized(len)?;
        if !less_than(&base, &self.n) {
            return Err(ArithmeticError::ArithmeticOverflow);
        }

        let mut scratch = vec![0; len + 2];
        let mut tmp = vec![0; len];
        let mut selected = vec![0; len];
        let mut one = vec![0; len];
        one[0] = 1;

        // table[i] = base^i in Montgomery form
        let mut table = vec![vec![0; len]; WINDOW_SIZE];
        self.mont_mul(&one, &self.r2, &mut table[0], &mut scratch);
        self.mont_mul(&base, &self.r2, &mut table[1], &mut scratch);
        for i in 2..WINDOW_SIZE {
            let (done, rest) = table.split_at_mut(i);
            self.mont_mul(&done[i - 1], &done[1], &mut rest[0], &mut scratch);
        }

        let mut acc = table[0].clone();
        for byte in exponent {
            for window in [byte >> 4, byte & 0x0f] {
                for _ in 0..WINDOW_BITS {
                    self.mont_mul(&acc, &acc, &mut tmp, &mut scratch);
                    std::mem::swap(&mut acc, &mut tmp);
                }
                select_ct(&table, window, &mut selected);
                self.mont_mul(&acc, &selected, &mut tmp, &mut scratch);
                std::mem::swap(&mut acc, &mut tmp);
            }
        }

        // Leave Montgomery form.
        self.mont_mul(&acc, &one, &mut tmp, &mut scratch);
        Ok(BigUint { limbs: tmp })
    }

    /// Montgomery product `a * b * R^-1 mod n` (CIOS).
    ///
    /// `a` and `b` must be below `n`; `t` is scratch of `len + 2` limbs.
    fn mont_mul(&self, a: &[Limb], b: &[Limb], out: &mut [Limb], t: &mut [Limb]) {
        let len = self.n.len();
        t.fill(0);

        for &b_i in b.iter().take(len) {
            let mut carry = 0;
            for j in 0..len {
                (t[j], carry) = mac(t[j], a[j], b_i, carry);
            }
            let (sum, overflow) = t[len].overflowing_add(carry);
            t[len] = sum;
            t[len + 1] = overflow as Limb;

            let m = t[0].wrapping_mul(self.n0_inv);
            let (_, mut carry) = mac(t[0], m, self.n[0], 0);
            for j in 1..len {
                (t[j - 1], carry) = mac(t[j], m, self.n[j], carry);
            }
            let (sum, overflow) = t[len].overflowing_add(carry);
            t[len - 1] = sum;
            t[len] = t[len + 1] + overflow as Limb;
        }

        conditional_subtract(&self.n, &t[..len], t[len], out);
    }
}

/// Compute `base^exponent mod modulus` over big-endian byte strings.
///
/// The result is left-padded to the modulus byte length.
pub fn modpow_be(base: &[u8], exponent: &[u8], modulus: &[u8]) -> Result<Vec<u8>, ArithmeticError> {
    let modulus = MontgomeryModulus::from_be_bytes(modulus)?;
    let result = modulus.modpow(&BigUint::from_be_bytes(base)?, exponent)?;
    result.to_be_bytes(modulus.byte_len())
}

/// Constant-time byte string equality.
///
/// Runs in time dependent only on the lengths; unequal lengths compare false.
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    bool::from(a.ct_eq(b))
}

// =============================================================================
// Limb helpers
// =============================================================================

/// `acc + a * b + carry`, returned as (low, high).
#[inline]
fn mac(acc: Limb, a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let wide = acc as u128 + (a as u128) * (b as u128) + carry as u128;
    (wide as Limb, (wide >> LIMB_BITS) as Limb)
}

/// `a - b - borrow`, returned as (difference, borrow out).
#[inline]
fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let wide = (a as u128).wrapping_sub(b as u128 + borrow as u128);
    (wide as Limb, (wide >> (2 * LIMB_BITS - 1)) as Limb)
}

/// `a < n` for equal-length limb slices.
fn less_than(a: &[Limb], n: &[Limb]) -> bool {
    let mut borrow = 0;
    for (&x, &y) in a.iter().zip(n) {
        (_, borrow) = sbb(x, y, borrow);
    }
    borrow == 1
}

/// `out = (hi:t) mod n`, given `(hi:t) < 2n`. Branch-free.
fn conditional_subtract(n: &[Limb], t: &[Limb], hi: Limb, out: &mut [Limb]) {
    let mut borrow = 0;
    for j in 0..n.len() {
        (out[j], borrow) = sbb(t[j], n[j], borrow);
    }
    // Keep the difference unless it underflowed without a carry limb to absorb it.
    let keep_diff = Choice::from((hi & 1) as u8) | !Choice::from(borrow as u8);
    for j in 0..n.len() {
        out[j] = Limb::conditional_select(&t[j], &out[j], keep_diff);
    }
}

/// Constant-time table lookup: copy `table[index]` into `out`.
fn select_ct(table: &[Vec<Limb>], index: u8, out: &mut [Limb]) {
    out.fill(0);
    for (i, entry) in table.iter().enumerate() {
        let hit = (i as u8).ct_eq(&index);
        for (o, e) in out.iter_mut().zip(entry) {
            o.conditional_assign(e, hit);
        }
    }
}

/// `-n0^-1 mod 2^64` for odd `n0`, by Newton iteration.
fn neg_inv(n0: Limb) -> Limb {
    let mut inv: Limb = 1;
    // Each step doubles the number of correct low bits: 1 -> 64.
    for _ in 0..6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(n0.wrapping_mul(inv)));
    }
    inv.wrapping_neg()
}

/// `R^2 mod n` by repeated modular doubling of 1.
fn compute_r2(n: &[Limb]) -> Vec<Limb> {
    let len = n.len();
    let mut x = vec![0; len];
    x[0] = 1;
    let mut doubled = vec![0; len];

    for _ in 0..2 * LIMB_BITS * len {
        let mut carry = 0;
        for limb in x.iter_mut() {
            let next = *limb >> (LIMB_BITS - 1);
            *limb = (*limb << 1) | carry;
            carry = next;
        }
        conditional_subtract(n, &x, carry, &mut doubled);
        std::mem::swap(&mut x, &mut doubled);
    }
    x
}
