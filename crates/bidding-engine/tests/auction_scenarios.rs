use bidding_core::{Contract, Deal, Partnership, Position, RandomDealer, Vulnerability};
use bidding_engine::{
    BidTree, Call, CallInput, CallRequest, ContractOutcome, DoubleDummyOracle, EngineError,
    InputError, Mode, OracleError, PromptInput, ScriptedLines, Session, System, TurnState,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn standard_tree() -> BidTree {
    System::standard().unwrap().build().unwrap()
}

fn session(seed: u64) -> Session<StdRng> {
    let dealer = RandomDealer::new(StdRng::seed_from_u64(seed));
    Session::new(standard_tree(), Box::new(dealer), StdRng::seed_from_u64(seed + 1))
}

struct Unused;

impl CallInput for Unused {
    fn request_call(&mut self, _: &CallRequest<'_>) -> Result<String, InputError> {
        panic!("automatic sessions never prompt");
    }
}

fn play_out(s: &mut Session<StdRng>) -> Vec<(Position, Call)> {
    let mut calls = Vec::new();
    while let Some(record) = s.bid(&mut Unused).unwrap() {
        calls.push((record.seat, record.call));
    }
    calls
}

#[test]
fn automatic_boards_finish_with_north_south_contracts() {
    let mut s = session(11);
    s.settings_mut().mode = Mode::Automatic;
    for _ in 0..32 {
        let calls = play_out(&mut s);
        assert!(calls.len() >= 4);
        assert!(calls[calls.len() - 3..].iter().all(|(_, c)| c.is_pass()));

        for (i, (seat, call)) in calls.iter().enumerate() {
            assert_eq!(*seat, Position::bidder_at(s.board_number(), i));
            if let Call::Bid(id) = call {
                assert_eq!(seat.partnership(), Partnership::NS);
                assert!(s.tree().node(*id).accepts(s.hand(*seat)));
            }
        }

        match s.resolve_contract().unwrap() {
            ContractOutcome::PassedOut => {
                assert!(calls.iter().all(|(_, c)| c.is_pass()));
            }
            ContractOutcome::Contract(contract) => {
                assert_eq!(contract.partnership(), Partnership::NS);
            }
        }
        s.new_board();
    }
    assert_eq!(s.board_number(), 33);
}

#[test]
fn same_seeds_replay_the_same_auctions() {
    let mut a = session(5);
    let mut b = session(5);
    a.settings_mut().mode = Mode::Automatic;
    b.settings_mut().mode = Mode::Automatic;
    for _ in 0..8 {
        assert_eq!(a.deal(), b.deal());
        assert_eq!(play_out(&mut a), play_out(&mut b));
        a.new_board();
        b.new_board();
    }
}

#[test]
fn dealer_and_vulnerability_rotate() {
    let mut s = session(1);
    let mut seen = Vec::new();
    for _ in 0..16 {
        seen.push((s.dealer(), s.vulnerability()));
        s.new_board();
    }
    assert_eq!(seen[0], (Position::North, Vulnerability::None));
    assert_eq!(seen[1], (Position::East, Vulnerability::Unfavourable));
    assert_eq!(seen[2], (Position::South, Vulnerability::Favourable));
    assert_eq!(seen[3], (Position::West, Vulnerability::All));
    assert_eq!(seen[15], (Position::West, Vulnerability::Favourable));
    assert_eq!(s.dealer(), Position::North);
    assert_eq!(s.vulnerability(), Vulnerability::None);
}

#[test]
fn user_who_always_passes_is_prompted_once_per_turn() {
    let mut s = session(21);
    let mut reader = ScriptedLines::new(vec!["pass"; 10]);
    while let TurnState::AwaitingCall(seat) = s.state() {
        let record = s.bid(&mut PromptInput::new(&mut reader, Some(3))).unwrap().unwrap();
        if seat == Position::South {
            assert_eq!(record.call, Call::Pass);
        }
    }
    let south_turns = (0..s.auction().len())
        .filter(|&i| Position::bidder_at(s.board_number(), i) == Position::South)
        .count();
    assert_eq!(reader.remaining(), 10 - south_turns);
    assert!(reader.messages.iter().all(|m| m != "That was not an expected response."));

    // Only North can have bid, so North declares whatever was reached.
    if let Some(contract) = s.resolve_contract().unwrap().contract() {
        assert_eq!(contract.declarer, Position::North);
    }
}

#[test]
fn quitting_mid_auction_keeps_the_calls_so_far() {
    let mut s = session(4);
    // Board 1: North deals, South is third to call.
    s.submit_call(None).unwrap();
    s.submit_call(None).unwrap();
    let before = s.auction().clone();

    let mut reader = ScriptedLines::new(["exit"]);
    let err = s.bid(&mut PromptInput::new(&mut reader, None)).unwrap_err();
    assert!(matches!(err, EngineError::Input(InputError::Cancelled)));
    assert_eq!(s.auction(), &before);
    assert_eq!(s.current_bidder(), Position::South);
}

struct MakesExactly;

impl DoubleDummyOracle for MakesExactly {
    fn tricks(&self, _deal: &Deal, contract: &Contract) -> Result<u8, OracleError> {
        Ok(contract.target())
    }
}

#[test]
fn resolved_contract_can_be_scored() {
    let mut s = session(9);
    s.settings_mut().mode = Mode::Automatic;
    loop {
        play_out(&mut s);
        if let Some(contract) = s.resolve_contract().unwrap().contract() {
            let result = s.lookup_result(&contract.to_string(), &MakesExactly).unwrap();
            assert_eq!(result.tricks, contract.target());
            assert!(result.score > 0);
            break;
        }
        s.new_board();
    }

    assert!(matches!(
        s.lookup_result("4X", &MakesExactly),
        Err(EngineError::InvalidContract(_))
    ));
}
