//! # Integration Test Flows
//!
//! Tests that fd-01-allowlist-commitment and fd-02-mint-gate agree on the
//! wire contract: a root built off-chain admits exactly the members whose
//! proofs the lookup service hands out.
//!
//! ## Flows Tested
//!
//! 1. **File → Root → Gate**: allowlist file committed, root deployed, members mint
//! 2. **JSON Lookup → Gate**: proofs fetched through the query handler
//! 3. **Sale Lifecycle**: pre-sale through sold-out, royalties, withdrawal
//! 4. **Re-commit**: a member removed from the list loses access

#[cfg(test)]
mod tests {
    use std::io::Write;

    use fd_01_allowlist_commitment::{
        handle_api_query, ApiQueryHandler, CommitmentApi, CommitmentConfig, CommitmentService,
        FileAllowlist, LeafSet, StaticAllowlist, DEV_ALLOWLIST,
    };
    use fd_02_mint_gate::prelude::*;
    use serde_json::json;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const OWNER: Address = Address::new([0xee; 20]);
    const T0: u64 = 1_700_000_000;
    const DAY: u64 = 86_400;

    fn dev_service() -> CommitmentService {
        CommitmentService::from_source(&StaticAllowlist::dev(), &CommitmentConfig::default())
            .unwrap()
    }

    fn dev_address(i: usize) -> Address {
        Address::from_hex(DEV_ALLOWLIST[i]).unwrap()
    }

    /// Gate deployed on `root` with the allowlist open for a day from `T0`.
    fn deploy(root: Hash) -> MintGate<InMemoryCapabilityToken> {
        let config = SaleConfig {
            merkle_root: root,
            ..SaleConfig::for_testing()
        };
        let mut gate = MintGate::new(OWNER, config).unwrap();
        gate.set_end_date_whitelist(&CallContext::new(OWNER, T0), DAY)
            .unwrap();
        gate
    }

    fn parse_proof(hex: &[String]) -> Vec<Hash> {
        hex.iter().map(|s| Hash::from_hex(s).unwrap()).collect()
    }

    // =============================================================================
    // FLOW 1: FILE → ROOT → GATE
    // =============================================================================

    #[test]
    fn test_file_allowlist_members_can_mint() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# presale list").unwrap();
        for entry in DEV_ALLOWLIST.iter().take(5) {
            writeln!(file, "{entry}").unwrap();
        }
        // duplicate in a different case collapses to the same leaf
        writeln!(file, "{}", DEV_ALLOWLIST[0].to_lowercase()).unwrap();

        let mut service = CommitmentService::from_source(
            &FileAllowlist::new(file.path()),
            &CommitmentConfig::default(),
        )
        .unwrap();
        assert_eq!(service.leaf_set().len(), 5);

        let mut gate = deploy(service.merkle_root());
        for (i, entry) in DEV_ALLOWLIST.iter().take(5).enumerate() {
            let proof = parse_proof(&service.get_merkle_proof(entry).unwrap());
            let ctx = CallContext::new(dev_address(i), T0 + 60).with_value(100u64);
            gate.allowlist_mint(&ctx, 1, &proof).unwrap();
        }
        assert_eq!(gate.total_minted(), 5);

        // the sixth dev account was never listed
        let outsider = dev_address(5);
        let borrowed = parse_proof(&service.get_merkle_proof(DEV_ALLOWLIST[0]).unwrap());
        let ctx = CallContext::new(outsider, T0 + 60).with_value(100u64);
        assert_eq!(
            gate.allowlist_mint(&ctx, 1, &borrowed).unwrap_err().code(),
            "NotWhitelisted"
        );
    }

    #[test]
    fn test_root_is_independent_of_input_case_and_order() {
        let lower: Vec<String> = DEV_ALLOWLIST.iter().rev().map(|s| s.to_lowercase()).collect();
        let service_lower = CommitmentService::from_source(
            &StaticAllowlist::new(lower),
            &CommitmentConfig::default(),
        )
        .unwrap();

        assert_eq!(service_lower.merkle_root(), dev_service().merkle_root());
    }

    // =============================================================================
    // FLOW 2: JSON LOOKUP → GATE
    // =============================================================================

    #[test]
    fn test_json_proof_lookup_feeds_gate() {
        let mut handler = ApiQueryHandler::new(dev_service());
        let root = handle_api_query(&mut handler, "getMerkleRoot", &json!(null)).unwrap();
        let root = Hash::from_hex(root["root"].as_str().unwrap()).unwrap();
        let mut gate = deploy(root);

        let minter = DEV_ALLOWLIST[7];
        let response =
            handle_api_query(&mut handler, "getMerkleProof", &json!({ "address": minter }))
                .unwrap();
        let proof: Vec<Hash> = serde_json::from_value(response["proof"].clone()).unwrap();

        let ctx = CallContext::new(dev_address(7), T0 + 1).with_value(200u64);
        let receipt = gate.allowlist_mint(&ctx, 2, &proof).unwrap();
        assert_eq!(receipt.token_ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_root_published_after_deploy() {
        let service = dev_service();
        let mut gate: MintGate<InMemoryCapabilityToken> =
            MintGate::new(OWNER, SaleConfig::for_testing()).unwrap();
        let owner = CallContext::new(OWNER, T0);
        gate.set_end_date_whitelist(&owner, DAY).unwrap();

        let minter = dev_address(2);
        let proof = service
            .tree()
            .generate_proof(service.leaf_set(), &minter)
            .unwrap()
            .siblings;
        let ctx = CallContext::new(minter, T0 + 1).with_value(100u64);

        // no root yet: nothing verifies
        assert_eq!(
            gate.allowlist_mint(&ctx, 1, &proof).unwrap_err().code(),
            "NotWhitelisted"
        );

        gate.set_merkle_root(&owner, service.merkle_root()).unwrap();
        gate.allowlist_mint(&ctx, 1, &proof).unwrap();
        assert_eq!(
            gate.set_merkle_root(&owner, Hash::new([1; 32])),
            Err(MintError::RootAlreadySet)
        );
    }

    // =============================================================================
    // FLOW 3: SALE LIFECYCLE
    // =============================================================================

    #[test]
    fn test_full_sale_lifecycle() {
        let service = dev_service();
        let config = SaleConfig {
            merkle_root: service.merkle_root(),
            max_supply: 6,
            ..SaleConfig::for_testing()
        };
        let payout = config.payout_address;
        let mut gate: MintGate<InMemoryCapabilityToken> = MintGate::new(OWNER, config).unwrap();
        let owner = CallContext::new(OWNER, T0);
        let proof_of = |i: usize| {
            service
                .tree()
                .generate_proof(service.leaf_set(), &dev_address(i))
                .unwrap()
                .siblings
        };

        assert_eq!(gate.phase(T0), Phase::PreSale);

        gate.set_end_date_whitelist(&owner, DAY).unwrap();
        assert_eq!(gate.phase(T0), Phase::WhitelistOpen);
        for i in 0..2 {
            let ctx = CallContext::new(dev_address(i), T0 + 10).with_value(200u64);
            gate.allowlist_mint(&ctx, 2, &proof_of(i)).unwrap();
        }

        let after_window = T0 + DAY;
        assert_eq!(gate.phase(after_window), Phase::WhitelistClosedPublicInactive);
        let late = CallContext::new(dev_address(3), after_window).with_value(100u64);
        assert_eq!(
            gate.allowlist_mint(&late, 1, &proof_of(3)).unwrap_err().code(),
            "WhitelistMintEnded"
        );

        gate.set_is_public_mint_active(&owner, true).unwrap();
        assert_eq!(gate.phase(after_window), Phase::PublicOpen);
        let buyer = Address::new([0x77; 20]);
        gate.public_mint(
            &CallContext::new(buyer, after_window).with_value(400u64),
            2,
        )
        .unwrap();
        assert_eq!(gate.phase(after_window), Phase::SoldOut);

        // secondary-market royalty forwarded back to the gate
        let (receiver, royalty) = gate.royalty_info(3, U256::from(10_000));
        assert_eq!(receiver, gate.config().gate_address);
        gate.deposit(&CallContext::new(Address::new([0x99; 20]), after_window).with_value(royalty))
            .unwrap();

        let mut bank = InMemoryBank::new();
        let withdrawn = gate.withdraw(&owner, &mut bank).unwrap();
        assert_eq!(withdrawn, U256::from(400 + 400 + 500));
        assert_eq!(bank.balance_of(&payout), withdrawn);

        let events = gate.take_events();
        let minted = events.iter().filter(|e| e.token_id().is_some()).count();
        assert_eq!(minted, 6);
        assert!(matches!(events.last(), Some(MintEvent::Withdrawn { .. })));
    }

    // =============================================================================
    // FLOW 4: RE-COMMIT
    // =============================================================================

    #[test]
    fn scenario_removed_member_loses_access() {
        let (a, b, c, d) = (
            Address::new([0xa; 20]),
            Address::new([0xb; 20]),
            Address::new([0xc; 20]),
            Address::new([0xd; 20]),
        );
        let full = CommitmentService::new(LeafSet::new([a, b, c, d]), &CommitmentConfig::default())
            .unwrap();
        let reduced = CommitmentService::new(LeafSet::new([a, b, c]), &CommitmentConfig::default())
            .unwrap();
        let stale_d = full.tree().generate_proof(full.leaf_set(), &d).unwrap();

        let mut gate = deploy(reduced.merkle_root());
        let ctx = CallContext::new(d, T0 + 1).with_value(100u64);
        assert_eq!(
            gate.allowlist_mint(&ctx, 1, &stale_d.siblings).unwrap_err(),
            MintError::NotWhitelisted { caller: d }
        );

        let fresh_c = reduced.tree().generate_proof(reduced.leaf_set(), &c).unwrap();
        let ctx = CallContext::new(c, T0 + 1).with_value(100u64);
        gate.allowlist_mint(&ctx, 1, &fresh_c.siblings).unwrap();
    }
}
