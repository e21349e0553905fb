//! The practice loop: deal, bid, show the result, repeat.

use crate::report::{board_header, format_result, BoardReport};
use anyhow::{Context, Result};
use bidding_core::Position;
use bidding_engine::prompt::validated_input;
use bidding_engine::{
    Call, CallRecord, ContractOutcome, DoubleDummyOracle, EngineError, InputError, LineReader,
    Mode, Session, TurnState,
};
use rand::Rng;
use tracing::{info, warn};

const BID_HELP: &str = "Enter one of the listed bids, or P to pass. \
Type 'settings' to change options, 'new' to skip to a fresh board, or 'quit' to stop.";

const SETTINGS_HELP: &str = "m switches between interactive and automatic bidding. \
b toggles the meaning of each call as it is made. \
o toggles the meaning of each possible bid. d goes back to the auction.";

enum Reply {
    Call(String),
    Settings,
    NewBoard,
}

enum Toggle {
    Mode,
    BidMeanings,
    OptionMeanings,
    Done,
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

pub struct Repl<'a, R> {
    session: Session<R>,
    reader: &'a mut dyn LineReader,
    oracle: Option<&'a dyn DoubleDummyOracle>,
    max_tries: Option<usize>,
    json: bool,
}

impl<'a, R: Rng> Repl<'a, R> {
    pub fn new(
        session: Session<R>,
        reader: &'a mut dyn LineReader,
        oracle: Option<&'a dyn DoubleDummyOracle>,
    ) -> Self {
        Self {
            session,
            reader,
            oracle,
            max_tries: None,
            json: false,
        }
    }

    pub fn with_max_tries(mut self, max_tries: Option<usize>) -> Self {
        self.max_tries = max_tries;
        self
    }

    /// Print one JSON line per finished board instead of the table chatter.
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    /// Play until `boards` boards have finished or the user quits.
    pub fn run(&mut self, boards: Option<u32>) -> Result<Vec<BoardReport>> {
        let mut reports = Vec::new();
        if boards == Some(0) {
            return Ok(reports);
        }

        loop {
            match self.play_board() {
                Ok(Some(report)) => {
                    if self.json {
                        let line = serde_json::to_string(&report).context("serializing board report")?;
                        self.reader.message(&line);
                    }
                    reports.push(report);
                }
                Ok(None) => {}
                Err(EngineError::Input(InputError::Cancelled)) => {
                    info!(board = self.session.board_number(), "session ended by user");
                    break;
                }
                Err(e) => {
                    let board = self.session.board_number();
                    return Err(e).with_context(|| format!("playing board {board}"));
                }
            }

            if boards.is_some_and(|n| reports.len() >= n as usize) {
                break;
            }
            self.session.new_board();
        }
        Ok(reports)
    }

    /// Bid one board to the end. `None` when the user asked for a new board.
    fn play_board(&mut self) -> Result<Option<BoardReport>, EngineError> {
        self.show_board();

        while let TurnState::AwaitingCall(seat) = self.session.state() {
            let interactive = self.session.settings().mode == Mode::Interactive;
            let record = if seat == Position::USER && interactive {
                let reply = match self.ask_user() {
                    Ok(reply) => reply,
                    // Only this request failed; the auction stands and South is asked again.
                    Err(InputError::Exhausted { attempts, .. }) => {
                        self.retries_exhausted("bid", attempts);
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                };
                match reply {
                    Reply::Call(token) => self.session.submit_call(Some(&token))?,
                    Reply::Settings => {
                        match self.edit_settings() {
                            Ok(()) => {}
                            Err(InputError::Exhausted { attempts, .. }) => {
                                self.retries_exhausted("setting", attempts)
                            }
                            Err(e) => return Err(e.into()),
                        }
                        continue;
                    }
                    Reply::NewBoard => return Ok(None),
                }
            } else {
                self.session.submit_call(None)?
            };
            if let Some(record) = record {
                self.show_call(record);
            }
        }

        let outcome = self.session.resolve_contract()?;
        let result = match (outcome.contract(), self.oracle) {
            (Some(contract), Some(oracle)) => {
                match self.session.lookup_result(&contract.to_string(), oracle) {
                    Ok(result) => Some(result),
                    Err(e) => {
                        warn!(error = %e, "double-dummy lookup failed");
                        None
                    }
                }
            }
            _ => None,
        };

        let summary = match outcome {
            ContractOutcome::PassedOut => "Passed out".to_string(),
            ContractOutcome::Contract(contract) => format!("Contract: {contract}"),
        };
        self.say(&summary);
        if let Some(result) = &result {
            self.say(&format_result(result));
        }
        if self.session.settings().mode == Mode::Interactive {
            self.show_hands(&Position::ALL);
        }

        Ok(Some(BoardReport::new(&self.session, outcome.to_string(), result)))
    }

    fn retries_exhausted(&mut self, what: &str, attempts: usize) {
        warn!(attempts, board = self.session.board_number(), "no valid {}", what);
        self.reader
            .message(&format!("No valid {what} after {attempts} attempts, try again."));
    }

    fn say(&mut self, text: &str) {
        if !self.json {
            self.reader.message(text);
        }
    }

    fn show_board(&mut self) {
        let header = board_header(
            self.session.board_number(),
            self.session.dealer(),
            self.session.vulnerability(),
        );
        self.say(&header);
        match self.session.settings().mode {
            Mode::Interactive => self.show_hands(&[Position::USER]),
            Mode::Automatic => self.show_hands(&Position::ALL),
        }
    }

    fn show_hands(&mut self, seats: &[Position]) {
        for &seat in seats {
            let line = format!("{seat}: {}", self.session.hand(seat));
            self.say(&line);
        }
    }

    fn show_call(&mut self, record: CallRecord) {
        let tree = self.session.tree();
        let text = match record.call {
            Call::Bid(id) if self.session.settings().display_meaning_of_bids => {
                let node = tree.node(id);
                format!("{}: {} ({})", record.seat, node.value, node.description)
            }
            call => format!("{}: {}", record.seat, call.render(tree)),
        };
        self.say(&text);
    }

    fn ask_user(&mut self) -> Result<Reply, InputError> {
        let request = self.session.call_request();
        for line in request.listing() {
            self.reader.message(&line);
        }
        validated_input(
            &mut *self.reader,
            "Your bid: ",
            BID_HELP,
            self.max_tries,
            |line| {
                if line.eq_ignore_ascii_case("settings") {
                    Some(Reply::Settings)
                } else if line.eq_ignore_ascii_case("new") {
                    Some(Reply::NewBoard)
                } else {
                    request.accept(line).map(Reply::Call)
                }
            },
        )
    }

    fn edit_settings(&mut self) -> Result<(), InputError> {
        loop {
            let current = *self.session.settings();
            self.reader.message(&format!(
                "Mode: {}  Meaning of bids: {}  Meaning of possible bids: {}",
                current.mode,
                on_off(current.display_meaning_of_bids),
                on_off(current.display_meaning_of_possible_bids),
            ));

            let toggle = validated_input(
                &mut *self.reader,
                "Toggle [m]ode, [b]id meanings, [o]ption meanings, or [d]one: ",
                SETTINGS_HELP,
                self.max_tries,
                |line| match line.to_ascii_lowercase().as_str() {
                    "m" | "mode" => Some(Toggle::Mode),
                    "b" => Some(Toggle::BidMeanings),
                    "o" => Some(Toggle::OptionMeanings),
                    "" | "d" | "done" => Some(Toggle::Done),
                    _ => None,
                },
            )?;

            let settings = self.session.settings_mut();
            match toggle {
                Toggle::Mode => settings.mode = settings.mode.toggled(),
                Toggle::BidMeanings => {
                    settings.display_meaning_of_bids = !settings.display_meaning_of_bids
                }
                Toggle::OptionMeanings => {
                    settings.display_meaning_of_possible_bids =
                        !settings.display_meaning_of_possible_bids
                }
                Toggle::Done => return Ok(()),
            }
            info!(settings = ?settings, "settings changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bidding_core::io::hand_parser::parse_hand;
    use bidding_core::{Contract, Deal};
    use bidding_engine::{OracleError, ScriptedLines, System};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SYSTEM: &str = "
bids:
  - call: 1H
    description: five hearts
    constraints:
      - { type: MinHCP, min: 12 }
      - { type: MinLength, suit: Hearts, count: 5 }
    responses:
      - call: 2H
        description: heart support
        constraints:
          - { type: MinLength, suit: Hearts, count: 3 }
        responses:
          - call: 4H
            constraints:
              - { type: MinHCP, min: 19 }
";

    struct TenTricks;

    impl DoubleDummyOracle for TenTricks {
        fn tricks(&self, _deal: &Deal, _contract: &Contract) -> Result<u8, OracleError> {
            Ok(10)
        }
    }

    fn fixed_deal() -> Deal {
        Deal::new([
            parse_hand("A2.K32.AKQ76.K32").unwrap(),
            parse_hand("KQJ3.QJ4.32.QJ54").unwrap(),
            parse_hand("9876.A765.JT8.A6").unwrap(),
            parse_hand("T54.T98.954.T987").unwrap(),
        ])
    }

    fn session() -> Session<StdRng> {
        let tree = System::from_yaml(SYSTEM).unwrap().build().unwrap();
        Session::new(tree, Box::new(fixed_deal), StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_interactive_board() {
        let mut lines = ScriptedLines::new(["2h", "p"]);
        let oracle: &dyn DoubleDummyOracle = &TenTricks;
        let reports = Repl::new(session(), &mut lines, Some(oracle))
            .run(Some(1))
            .unwrap();

        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(report.auction, "1H P 2H P 4H P P P");
        assert_eq!(report.contract, "4HN");
        assert_eq!(report.result.map(|r| (r.tricks, r.score)), Some((10, 420)));
        assert!(lines.messages.contains(&"[2h]".to_string()));
        assert!(lines.messages.contains(&"Contract: 4HN".to_string()));
    }

    #[test]
    fn test_quit_ends_session() {
        let mut lines = ScriptedLines::new(["7n", "quit", "p"]);
        let mut repl = Repl::new(session(), &mut lines, None);
        let reports = repl.run(None).unwrap();
        assert!(reports.is_empty());
        assert_eq!(repl.session().board_number(), 1);
        assert_eq!(repl.session().auction().len(), 2);
        drop(repl);
        assert_eq!(lines.remaining(), 1);
    }

    #[test]
    fn test_settings_switch_to_automatic() {
        let mut lines = ScriptedLines::new(["settings", "b", "m", "d"]);
        let reports = Repl::new(session(), &mut lines, None)
            .run(Some(1))
            .unwrap();
        assert_eq!(reports[0].contract, "4HN");
        assert_eq!(reports[0].result, None);
        assert_eq!(lines.remaining(), 0);
        assert!(lines.messages.contains(&"S: 2H (heart support)".to_string()));
    }

    #[test]
    fn test_new_skips_the_board() {
        let mut lines = ScriptedLines::new(["new", "quit"]);
        let mut repl = Repl::new(session(), &mut lines, None);
        assert!(repl.run(None).unwrap().is_empty());
        assert_eq!(repl.session().board_number(), 2);
        // East dealt and passed before South was asked.
        assert_eq!(repl.session().auction().len(), 1);
    }

    #[test]
    fn test_exhausted_input_keeps_the_session() {
        let mut lines = ScriptedLines::new(["7n", "7n", "2h", "p"]);
        let mut repl = Repl::new(session(), &mut lines, None).with_max_tries(Some(2));
        let reports = repl.run(Some(1)).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].auction, "1H P 2H P 4H P P P");
        assert_eq!(repl.session().board_number(), 1);
        drop(repl);
        assert_eq!(lines.remaining(), 0);
        assert!(lines
            .messages
            .contains(&"No valid bid after 2 attempts, try again.".to_string()));
    }

    #[test]
    fn test_exhausted_settings_return_to_the_auction() {
        let mut lines = ScriptedLines::new(["settings", "x", "x", "2h", "p"]);
        let reports = Repl::new(session(), &mut lines, None)
            .with_max_tries(Some(2))
            .run(Some(1))
            .unwrap();
        assert_eq!(reports[0].contract, "4HN");
        assert!(lines
            .messages
            .contains(&"No valid setting after 2 attempts, try again.".to_string()));
    }

    #[test]
    fn test_json_lines_in_automatic_mode() {
        let mut lines = ScriptedLines::new(Vec::<String>::new());
        let mut session = session();
        session.settings_mut().mode = Mode::Automatic;
        let oracle: &dyn DoubleDummyOracle = &TenTricks;
        let reports = Repl::new(session, &mut lines, Some(oracle))
            .with_json(true)
            .run(Some(2))
            .unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].auction, "P P P 1H P 2H P 4H P P P");

        assert_eq!(lines.messages.len(), 2);
        let second: serde_json::Value = serde_json::from_str(&lines.messages[1]).unwrap();
        assert_eq!(second["board"], 2);
        assert_eq!(second["dealer"], "East");
        assert_eq!(second["vulnerability"], "Unfavourable");
        assert_eq!(second["contract"], "4HN");
        // North-South vulnerable game.
        assert_eq!(second["result"]["score"], 620);
    }
}
