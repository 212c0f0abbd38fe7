use reelspin_core::{spin_once, BetConfig, MachineConfig, ProvablyFairRng};

fn main() {
    // Example end-to-end spin
    let server_seed = "example-server-seed";
    let client_seed = "example-client-seed";
    let nonce = 1u64;
    let mut rng = ProvablyFairRng::new(server_seed, client_seed, nonce);
    let config = MachineConfig::default();
    let outcome = match spin_once(&mut rng, &config, BetConfig::new(3, 10)) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("spin failed: {e}");
            return;
        }
    };
    println!("server_seed_hash={}", rng.server_seed_hash_hex());
    print!("{}", outcome.grid);
    println!(
        "stake={} winnings={} lines={:?}",
        outcome.stake,
        outcome.winnings(),
        outcome.winning_lines()
    );
}
