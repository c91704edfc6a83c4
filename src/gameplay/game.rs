use super::Position;
use super::action::Action;
use super::outcome::Outcome;
use super::record::Record;
use super::rejection::Rejection;
use super::seat::Seat;
use super::showdown::Showdown;
use crate::Chips;
use crate::N;
use crate::STACK;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use crate::cards::strength::Strength;

/// Game represents one hand of heads-up no-limit hold'em, from posted
/// blinds to settlement.
///
/// It keeps the public and the private side of the table in one value,
/// and owns turn order, the pot, and the board. apply() is copy-on-write: the parent
/// is never touched, so callers sharing a Game across threads only need to
/// guard the swap of old state for new. an illegal action comes back as a
/// Rejection on the child, never as a panic and never as an Err.
///
/// seat 0 posts the big blind. seat 1 posts the small blind, holds the
/// dealer button, and acts first preflop; the big blind acts first on
/// every later street.
#[derive(Debug, Clone)]
pub struct Game {
    deck: Deck,
    board: Board,
    seats: [Seat; N],
    pot: Chips,
    raised: Chips,
    action: Position,
    outcome: Outcome,
    error: Option<Rejection>,
    context: String,
    history: Vec<Record>,
}

impl Game {
    /// fresh hand at the first decision: cards dealt, blinds posted,
    /// small blind to act
    pub fn new() -> Self {
        Self::from(Deck::new())
    }

    pub fn apply(&self, action: Action) -> Self {
        let mut child = self.clone();
        child.act(action);
        child
    }

    //
    pub fn pot(&self) -> Chips {
        self.pot
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn to_act(&self) -> Position {
        self.action
    }
    pub fn actor(&self) -> &Seat {
        &self.seats[self.action]
    }
    pub fn seat(&self, position: Position) -> &Seat {
        &self.seats[position]
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn error(&self) -> Option<Rejection> {
        self.error
    }
    pub fn context(&self) -> &str {
        &self.context
    }
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// chips owed to match the opponent's stake
    pub fn to_call(&self) -> Chips {
        self.opponent().stake() - self.actor().stake()
    }
    /// smallest wager that counts as a raise
    pub fn to_raise(&self) -> Chips {
        self.to_call() + self.raised
    }

    //
    fn act(&mut self, action: Action) {
        self.error = None;
        if self.outcome.is_decided() {
            self.context = String::from("hand is over");
            return;
        }
        match action {
            Action::Fold => self.fold(),
            Action::Check => self.check(),
            Action::Call => self.call(),
            Action::Raise(wager) => self.raise(wager),
        }
    }

    fn fold(&mut self) {
        let folder = self.action;
        let winner = self.other();
        self.record(Action::Fold, 0);
        let stakes = self.seats.iter_mut().map(|s| s.sweep()).sum::<Chips>();
        let reward = self.pot + stakes;
        self.pot = 0;
        self.seats[winner].win(reward);
        self.outcome = Outcome::Winner(winner);
        self.context = format!("seat {} folds, seat {} takes {}", folder, winner, reward);
        log::trace!("seat {} +{}", winner, reward);
    }

    fn check(&mut self) {
        if self.opponent().stake() > self.actor().stake() {
            return self.reject(
                Rejection::InvalidCheck,
                String::from("cannot check a live bet"),
            );
        }
        let checker = self.action;
        self.record(Action::Check, 0);
        match self.street() {
            Street::Pref => self.advance(),
            _ if self.actor().is_big_blind() => {
                self.context = format!("seat {} checks", checker);
                self.pass();
            }
            _ => self.advance(),
        }
    }

    fn call(&mut self) {
        if self.opponent().stake() <= self.actor().stake() {
            return self.reject(Rejection::InvalidCall, String::from("nothing to call"));
        }
        let caller = self.action;
        let price = self.to_call();
        let limp = self.street() == Street::Pref && self.actor().stake() == Self::sblind();
        self.seats[self.action].bet(price);
        self.record(Action::Call, price);
        if limp {
            // the big blind still has its option
            self.context = format!("seat {} calls {}", caller, price);
            self.pass();
        } else {
            self.advance();
        }
    }

    fn raise(&mut self, wager: Chips) {
        let raiser = self.action;
        let price = self.to_call();
        if self.actor().stack() == 0 {
            return self.reject(
                Rejection::InvalidWager,
                String::from("cannot wager from an empty stack"),
            );
        }
        if wager == 0 {
            return self.reject(Rejection::InvalidWager, String::from("wager must be positive"));
        }
        if wager > self.actor().stack() {
            return self.reject(
                Rejection::InvalidWager,
                format!("wager {} exceeds stack {}", wager, self.actor().stack()),
            );
        }
        if wager < price + self.raised {
            return self.reject(
                Rejection::InvalidWager,
                format!("minimum raise is {}", price + self.raised),
            );
        }
        let cap = self.opponent().stake() + self.opponent().stack() - self.actor().stake();
        let bet = wager.min(cap);
        self.seats[self.action].bet(bet);
        self.raised = bet - price;
        self.record(Action::Raise(wager), bet);
        self.context = format!("seat {} raises to {}", raiser, self.seats[raiser].stake());
        self.pass();
    }

    //
    fn pass(&mut self) {
        self.action = self.other();
    }

    /// close the betting round: stakes into the pot, then either the
    /// next street is dealt or the hand goes to showdown
    fn advance(&mut self) {
        let stakes = self.seats.iter_mut().map(|s| s.sweep()).sum::<Chips>();
        self.pot += stakes;
        self.raised = Self::bblind();
        self.action = self
            .seats
            .iter()
            .position(|s| s.is_big_blind())
            .expect("one big blind");
        match self.street() {
            Street::Rive => self.settle(),
            street => {
                for _ in 0..street.n_revealed() {
                    let card = self.deck.draw();
                    self.board.add(card);
                }
                self.context = format!("{}: {}", self.street(), self.board);
                log::debug!("{}", self.context);
            }
        }
    }

    fn settle(&mut self) {
        let strengths = [self.strength(0), self.strength(1)];
        let showdown = Showdown::from((strengths, self.pot, self.dealer()));
        let payouts = showdown.payouts();
        log::trace!("{}", self.board);
        for (seat, chips) in self.seats.iter_mut().zip(payouts) {
            log::trace!("{} {:>4} +{}", seat.cards(), seat.stack(), chips);
            seat.win(chips);
        }
        self.pot = 0;
        self.outcome = showdown.outcome();
        self.context = match self.outcome {
            Outcome::Winner(winner) => {
                format!("showdown: seat {} wins with {}", winner, strengths[winner])
            }
            Outcome::Tie => format!("showdown: split pot on {}", strengths[0]),
            Outcome::Pending => unreachable!(),
        };
    }

    //
    fn record(&mut self, action: Action, chips: Chips) {
        let record = Record {
            street: self.street(),
            seat: self.action,
            action,
            chips,
        };
        log::debug!("{}", record);
        self.history.push(record);
    }

    fn reject(&mut self, error: Rejection, context: String) {
        log::debug!("seat {} rejected: {} ({})", self.action, error, context);
        self.error = Some(error);
        self.context = context;
    }

    //
    fn other(&self) -> Position {
        (self.action + 1) % N
    }
    fn opponent(&self) -> &Seat {
        &self.seats[self.other()]
    }
    fn dealer(&self) -> Position {
        self.seats
            .iter()
            .position(|s| !s.is_big_blind())
            .expect("one small blind")
    }
    fn strength(&self, position: Position) -> Strength {
        Strength::from(Hand::add(
            Hand::from(self.seats[position].cards()),
            Hand::from(&self.board),
        ))
    }

    pub const fn bblind() -> Chips {
        crate::B_BLIND
    }
    pub const fn sblind() -> Chips {
        crate::S_BLIND
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// deal alternates between the seats, big blind first,
/// then the blinds go in and the small blind is up
impl From<Deck> for Game {
    fn from(mut deck: Deck) -> Self {
        let a = deck.draw();
        let b = deck.draw();
        let c = deck.draw();
        let d = deck.draw();
        let mut seats = [
            Seat::new(Hole::from((a, c)), STACK, true),
            Seat::new(Hole::from((b, d)), STACK, false),
        ];
        seats[0].bet(Self::bblind());
        seats[1].bet(Self::sblind());
        Self {
            deck,
            board: Board::empty(),
            seats,
            pot: 0,
            raised: Self::bblind(),
            action: 1,
            outcome: Outcome::Pending,
            error: None,
            context: String::from("new hand, blinds posted"),
            history: Vec::new(),
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        for seat in self.seats.iter() {
            write!(f, "{}  ", seat)?;
        }
        write!(
            f,
            "{}",
            format!("@ {:>4} {} {}", self.pot, self.board, self.street()).bright_green()
        )
    }
}
