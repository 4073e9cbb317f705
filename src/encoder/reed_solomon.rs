/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use std::sync::OnceLock;

const PRIMITIVE: u16 = 0x11D;

/// Largest EC codeword count the generator cache holds
pub const MAX_EC_CODEWORDS: usize = 255;

struct GfTables {
    exp: [u8; 256],
    log: [u8; 256],
}

const fn build_tables() -> GfTables {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    exp[255] = exp[0];
    GfTables { exp, log }
}

static TABLES: GfTables = build_tables();

/// GF(256) field operations using log/exp tables
pub struct Gf256;

impl Gf256 {
    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }

    /// Discrete log of a non-zero element; `None` for zero
    pub fn log(a: u8) -> Option<usize> {
        if a == 0 {
            None
        } else {
            Some(TABLES.log[a as usize] as usize)
        }
    }

    /// Field product
    pub fn mul(a: u8, b: u8) -> u8 {
        match (Self::log(a), Self::log(b)) {
            (Some(log_a), Some(log_b)) => Self::exp(log_a + log_b),
            _ => 0,
        }
    }
}

/// Polynomial over GF(256), highest degree coefficient first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    num: Vec<u8>,
}

impl Polynomial {
    /// Build from coefficients, dropping leading zeros and appending `shift` zero coefficients
    pub fn new(num: &[u8], shift: usize) -> Self {
        let offset = num.iter().position(|&c| c != 0).unwrap_or(num.len());
        let mut coeffs = Vec::with_capacity(num.len() - offset + shift);
        coeffs.extend_from_slice(&num[offset..]);
        coeffs.resize(coeffs.len() + shift, 0);
        Self { num: coeffs }
    }

    /// Number of coefficients
    pub fn len(&self) -> usize {
        self.num.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num.is_empty()
    }

    /// Coefficient at `index` (0 = highest degree)
    pub fn get(&self, index: usize) -> u8 {
        self.num.get(index).copied().unwrap_or(0)
    }

    pub fn coefficients(&self) -> &[u8] {
        &self.num
    }

    /// Product of two polynomials
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::new(&[], 0);
        }
        let mut num = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.num.iter().enumerate() {
            for (j, &b) in other.num.iter().enumerate() {
                num[i + j] ^= Gf256::mul(a, b);
            }
        }
        Polynomial::new(&num, 0)
    }

    /// Remainder of division by `divisor`
    pub fn modulo(&self, divisor: &Polynomial) -> Polynomial {
        if self.len() < divisor.len() {
            return self.clone();
        }
        let Some(divisor_log) = Gf256::log(divisor.get(0)) else {
            return self.clone();
        };

        let mut num = self.num.clone();
        let mut offset = 0;
        loop {
            while offset < num.len() && num[offset] == 0 {
                offset += 1;
            }
            if num.len() - offset < divisor.len() {
                break;
            }
            let Some(lead_log) = Gf256::log(num[offset]) else {
                break;
            };
            let ratio = lead_log + 255 - divisor_log;
            for (i, &c) in divisor.num.iter().enumerate() {
                if let Some(c_log) = Gf256::log(c) {
                    num[offset + i] ^= Gf256::exp(c_log + ratio);
                }
            }
        }

        Polynomial::new(&num[offset..], 0)
    }
}

static GENERATORS: [OnceLock<Polynomial>; MAX_EC_CODEWORDS + 1] =
    [const { OnceLock::new() }; MAX_EC_CODEWORDS + 1];

/// Generator polynomial (x - a^0)(x - a^1)...(x - a^(ec_count-1)), memoized per count.
///
/// `ec_count` must not exceed [`MAX_EC_CODEWORDS`].
pub fn generator_polynomial(ec_count: usize) -> &'static Polynomial {
    assert!(
        ec_count <= MAX_EC_CODEWORDS,
        "EC codeword count {ec_count} exceeds GF(256) block length"
    );
    GENERATORS[ec_count].get_or_init(|| {
        (0..ec_count).fold(Polynomial::new(&[1], 0), |acc, i| {
            acc.multiply(&Polynomial::new(&[1, Gf256::exp(i)], 0))
        })
    })
}

/// Error correction codewords for one block of data codewords
pub fn ec_codewords(data: &[u8], ec_count: usize) -> Vec<u8> {
    let generator = generator_polynomial(ec_count);
    let remainder = Polynomial::new(data, ec_count).modulo(generator);
    // Right-align the remainder into ec_count slots
    let pad = ec_count.saturating_sub(remainder.len());
    let skip = remainder.len().saturating_sub(ec_count);
    let mut out = vec![0u8; pad];
    out.extend_from_slice(&remainder.coefficients()[skip..]);
    out
}
