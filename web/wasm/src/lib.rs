use ace_showdown::{
    Card, DealOutcome, Game, GameOptions, GameState, Outcome, RoundResult, Scoreboard,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.game = Game::new(GameOptions::default(), seed as u64);
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
    }

    pub fn reset_scores(&mut self) {
        self.game.reset_scores();
    }

    /// Deals a round. Returns `false` if the deck had to be replaced first
    /// and nothing was dealt.
    pub fn deal_round(&mut self) -> Result<bool, JsValue> {
        self.game
            .deal_round()
            .map(|outcome| matches!(outcome, DealOutcome::Dealt(_)))
            .map_err(js_err)
    }

    pub fn reveal(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.reveal().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            scores: JsScores::from(self.game.scores()),
            player_card: self.game.player_card().map(card_to_js),
            computer_card: self.game.computer_card().map(card_to_js),
            winner: self.game.winner().map(outcome_to_str),
            can_draw: self.game.can_draw(),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    scores: JsScores,
    player_card: Option<JsCard>,
    computer_card: Option<JsCard>,
    winner: Option<&'static str>,
    can_draw: bool,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsScores {
    player: u32,
    computer: u32,
}

impl From<Scoreboard> for JsScores {
    fn from(scores: Scoreboard) -> Self {
        Self {
            player: scores.player,
            computer: scores.computer,
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
    red: bool,
}

#[derive(Serialize)]
struct JsRoundResult {
    player_card: JsCard,
    computer_card: JsCard,
    outcome: &'static str,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            player_card: card_to_js(result.player_card),
            computer_card: card_to_js(result.computer_card),
            outcome: outcome_to_str(result.outcome),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.label(),
        value: card.value(),
        red: card.suit.is_red(),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Initial => "initial",
        GameState::Playing => "playing",
        GameState::Result => "result",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "player",
        Outcome::Computer => "computer",
        Outcome::Tie => "tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
