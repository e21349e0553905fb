//! Double-dummy results for a resolved contract.

use crate::error::{OracleError, Result};
use bidding_core::{Contract, Deal, Vulnerability};
use serde::Serialize;

/// Tricks and score of a contract with perfect play on every side.
pub trait DoubleDummyOracle {
    /// Tricks declarer takes in the contract's strain.
    fn tricks(&self, deal: &Deal, contract: &Contract) -> Result<u8, OracleError>;

    /// Tricks and declarer's score, from a single solve.
    fn result(
        &self,
        deal: &Deal,
        contract: &Contract,
        vulnerable: bool,
    ) -> Result<DoubleDummyResult, OracleError> {
        let tricks = self.tricks(deal, contract)?;
        Ok(DoubleDummyResult {
            tricks,
            score: contract.score(tricks, vulnerable),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoubleDummyResult {
    pub tricks: u8,
    pub score: i32,
}

/// Validate `contract` and ask `oracle` for its result. The oracle is not
/// consulted for a malformed contract string.
pub fn lookup_result(
    contract: &str,
    deal: &Deal,
    vulnerability: Vulnerability,
    oracle: &dyn DoubleDummyOracle,
) -> Result<DoubleDummyResult> {
    let contract: Contract = contract.parse()?;
    let vulnerable = vulnerability.is_vulnerable(contract.declarer);
    Ok(oracle.result(deal, &contract, vulnerable)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::cell::Cell;

    /// Always reports the same number of tricks and counts its calls.
    struct FixedTricks {
        tricks: u8,
        calls: Cell<usize>,
    }

    impl DoubleDummyOracle for FixedTricks {
        fn tricks(&self, _deal: &Deal, _contract: &Contract) -> Result<u8, OracleError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.tricks)
        }
    }

    fn oracle(tricks: u8) -> FixedTricks {
        FixedTricks {
            tricks,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_malformed_contract_skips_oracle() {
        let oracle = oracle(9);
        for bad in ["8NS", "3XN", "3N", "4HSS", "4hs"] {
            let result = lookup_result(bad, &Deal::default(), Vulnerability::None, &oracle);
            assert!(matches!(result, Err(EngineError::InvalidContract(_))), "{bad}");
        }
        assert_eq!(oracle.calls.get(), 0);
    }

    #[test]
    fn test_vulnerability_follows_declarer() {
        let oracle = oracle(10);
        let deal = Deal::default();
        // Unfavourable: North-South vulnerable.
        let ns = lookup_result("4HS", &deal, Vulnerability::Unfavourable, &oracle).unwrap();
        assert_eq!(ns, DoubleDummyResult { tricks: 10, score: 620 });
        let ew = lookup_result("4HE", &deal, Vulnerability::Unfavourable, &oracle).unwrap();
        assert_eq!(ew.score, 420);
        let fav = lookup_result("4HW", &deal, Vulnerability::Favourable, &oracle).unwrap();
        assert_eq!(fav.score, 620);
    }

    #[test]
    fn test_one_solve_per_lookup() {
        let oracle = oracle(12);
        let result = lookup_result("6NN", &Deal::default(), Vulnerability::None, &oracle).unwrap();
        assert_eq!(result, DoubleDummyResult { tricks: 12, score: 990 });
        assert_eq!(oracle.calls.get(), 1);
    }

    #[test]
    fn test_oracle_errors_propagate() {
        struct Broken;
        impl DoubleDummyOracle for Broken {
            fn tricks(&self, _: &Deal, _: &Contract) -> Result<u8, OracleError> {
                Err(OracleError("solver offline".into()))
            }
        }
        let result = lookup_result("3NN", &Deal::default(), Vulnerability::All, &Broken);
        assert!(matches!(result, Err(EngineError::Oracle(_))));
    }
}
