use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

// Deterministic RNG using provably-fair HMAC construction
// server_seed (secret) + client_seed + nonce + block -> HMAC-SHA256 -> byte stream

pub type HmacSha256 = Hmac<Sha256>;

const BLOCK_LEN: usize = 32;

pub fn derive_hash_hex(input: &[u8]) -> String {
    use sha2::Digest;
    let mut hasher = Sha256::new();
    hasher.update(input);
    hex::encode(hasher.finalize())
}

/// Byte stream keyed by a secret server seed, a player-chosen client seed and a
/// per-spin nonce. Publishing `server_seed_hash_hex` before play and the seed
/// afterwards lets anyone replay every spin.
#[derive(Debug, Clone)]
pub struct ProvablyFairRng {
    server_seed: String, // secret
    client_seed: String,
    nonce: u64,
    block_index: u64,
    block: [u8; BLOCK_LEN],
    pos: usize,
}

impl ProvablyFairRng {
    pub fn new(server_seed: impl Into<String>, client_seed: impl Into<String>, nonce: u64) -> Self {
        let mut rng = Self {
            server_seed: server_seed.into(),
            client_seed: client_seed.into(),
            nonce,
            block_index: 0,
            block: [0u8; BLOCK_LEN],
            pos: 0,
        };
        rng.block = rng.hmac_block(0);
        rng
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn client_seed(&self) -> &str {
        &self.client_seed
    }

    pub fn server_seed_hash_hex(&self) -> String {
        derive_hash_hex(self.server_seed.as_bytes())
    }

    /// Moves on to the next spin: bumps the nonce and restarts the stream.
    pub fn next_nonce(&mut self) -> u64 {
        self.nonce += 1;
        self.block_index = 0;
        self.block = self.hmac_block(0);
        self.pos = 0;
        self.nonce
    }

    pub fn hmac_block(&self, block_index: u64) -> [u8; BLOCK_LEN] {
        let mut mac =
            HmacSha256::new_from_slice(self.server_seed.as_bytes()).expect("HMAC takes any key length");
        let msg = format!("{}:{}:{}", self.client_seed, self.nonce, block_index);
        mac.update(msg.as_bytes());
        let res = mac.finalize().into_bytes();
        let mut out = [0u8; BLOCK_LEN];
        out.copy_from_slice(&res);
        out
    }

    fn refill(&mut self) {
        self.block_index += 1;
        self.block = self.hmac_block(self.block_index);
        self.pos = 0;
    }
}

impl RngCore for ProvablyFairRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_be_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_be_bytes(buf)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for byte in dst.iter_mut() {
            if self.pos == BLOCK_LEN {
                self.refill();
            }
            *byte = self.block[self.pos];
            self.pos += 1;
        }
    }
}
