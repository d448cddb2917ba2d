//! # Race Attacks
//!
//! Many threads hit one [`SharedMintGate`] at once, trying to slip past the
//! wallet cap or the supply ceiling between a check and its effect.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use fd_01_allowlist_commitment::{build_proof, build_root, LeafSet};
    use fd_02_mint_gate::prelude::*;
    use parking_lot::Mutex;

    const OWNER: Address = Address::new([0xee; 20]);
    const TOKEN: Address = Address::new([0xcc; 20]);
    const NOW: u64 = 1_000;

    #[test]
    fn exploit_parallel_allowlist_mints_from_one_wallet() {
        let member = Address::new([1; 20]);
        let set = LeafSet::new([member, Address::new([2; 20])]);
        let proof = build_proof(&set, &member).unwrap();
        let config = SaleConfig {
            merkle_root: build_root(&set).unwrap(),
            whitelist_end_time: NOW + 60,
            ..SaleConfig::for_testing()
        };
        let gate = SharedMintGate::new(
            MintGate::<InMemoryCapabilityToken>::new(OWNER, config).unwrap(),
        );
        let wins = Arc::new(Mutex::new(0u32));

        std::thread::scope(|scope| {
            for _ in 0..16 {
                let gate = gate.clone();
                let wins = Arc::clone(&wins);
                let proof = proof.clone();
                scope.spawn(move || {
                    let ctx = CallContext::new(member, NOW).with_value(200u64);
                    if gate.allowlist_mint(&ctx, 2, &proof).is_ok() {
                        *wins.lock() += 1;
                    }
                });
            }
        });

        assert_eq!(*wins.lock(), 1);
        assert_eq!(gate.with(|g| g.minted_by(&member)), 2);
        assert_eq!(gate.with(|g| g.balance()), U256::from(200));
    }

    #[test]
    fn exploit_mixed_path_rush_for_last_tokens() {
        let config = SaleConfig {
            max_supply: 20,
            is_public_mint_active: true,
            ..SaleConfig::for_testing()
        };
        let gate_address = config.gate_address;

        let mut token = InMemoryCapabilityToken::new(TOKEN);
        let holders: Vec<Address> = (0..4u8).map(|i| Address::new([0x30 + i; 20])).collect();
        for holder in &holders {
            token.mint(*holder, 10u64);
            token.approve(*holder, gate_address, 10u64);
        }
        let gate = SharedMintGate::new(
            MintGate::new(OWNER, config)
                .unwrap()
                .with_capability_token(token),
        );
        let receipts = Arc::new(Mutex::new(Vec::new()));

        std::thread::scope(|scope| {
            for (t, holder) in holders.iter().enumerate() {
                let channel_gate = gate.clone();
                let channel_receipts = Arc::clone(&receipts);
                let holder = *holder;
                scope.spawn(move || {
                    for _ in 0..10 {
                        let ctx = CallContext::new(holder, NOW);
                        if let Ok(r) = channel_gate.external_channel_mint(&ctx) {
                            channel_receipts.lock().push(r);
                        }
                    }
                });

                let public_gate = gate.clone();
                let public_receipts = Arc::clone(&receipts);
                let buyer = Address::new([0x50 + t as u8; 20]);
                scope.spawn(move || {
                    let ctx = CallContext::new(buyer, NOW).with_value(200u64);
                    for _ in 0..10 {
                        if let Ok(r) = public_gate.public_mint(&ctx, 1) {
                            public_receipts.lock().push(r);
                        }
                    }
                });
            }
        });

        let receipts = receipts.lock();
        let ids: Vec<TokenId> = receipts.iter().flat_map(MintReceipt::token_ids).collect();
        let unique: HashSet<TokenId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 20);
        assert_eq!(unique.len(), 20);
        assert_eq!(gate.mint_counter(), 21);

        // every external receipt consumed exactly one unit, failed ones none
        let external = receipts
            .iter()
            .filter(|r| r.path == MintPath::ExternalChannel)
            .count() as u64;
        let spent = gate.with(|g| {
            let token = g.capability_token().unwrap();
            holders
                .iter()
                .map(|h| 10 - token.balance_of(h).low_u64())
                .sum::<u64>()
        });
        assert_eq!(spent, external);
    }
}
