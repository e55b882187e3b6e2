mod common;

use roach_engine::agent::{GuessValue, Proposal};
use roach_engine::cards::CardType as T;
use roach_engine::player::PlayerId;
use roach_engine::rules::{validate_proposal, Action, Phase, RuleContext, RuleViolation};

use common::fixed_table;

fn opening(proposal: &Proposal) -> Result<Action, RuleViolation> {
    let table = fixed_table();
    let ctx = RuleContext {
        table: &table,
        hand: table.hand(PlayerId(0)).unwrap(),
        targets: &[PlayerId(1), PlayerId(2)],
    };
    validate_proposal(Phase::Opening, &ctx, proposal)
}

fn with_targets(phase: Phase, targets: &[PlayerId], proposal: &Proposal) -> Result<Action, RuleViolation> {
    let table = fixed_table();
    let ctx = RuleContext {
        table: &table,
        hand: table.hand(PlayerId(1)).unwrap(),
        targets,
    };
    validate_proposal(phase, &ctx, proposal)
}

#[test]
fn opening_accepts_held_card_with_lie() {
    let action = opening(&Proposal::play(T::Cockroach, "b", T::Bat, "bluff")).unwrap();
    assert_eq!(
        action,
        Action::Play {
            card: T::Cockroach,
            target: PlayerId(1),
            claim: T::Bat
        }
    );
}

#[test]
fn opening_rejects_card_not_in_hand() {
    let err = opening(&Proposal::play(T::Spider, "b", T::Spider, "x")).unwrap_err();
    assert_eq!(err, RuleViolation::CardNotHeld(T::Spider));
}

#[test]
fn opening_rejects_target_outside_pool() {
    // the starter itself is never a target
    let err = opening(&Proposal::play(T::Bat, "a", T::Bat, "x")).unwrap_err();
    assert_eq!(err, RuleViolation::IllegalTarget("a".into()));

    let err = opening(&Proposal::play(T::Bat, "nobody", T::Bat, "x")).unwrap_err();
    assert_eq!(err, RuleViolation::IllegalTarget("nobody".into()));
}

#[test]
fn opening_rejects_unknown_card_or_claim() {
    let mut p = Proposal::play(T::Bat, "c", T::Bat, "x");
    p.card = Some("1x BAT".into());
    assert_eq!(
        opening(&p).unwrap_err(),
        RuleViolation::UnknownCardType("1x BAT".into())
    );

    let mut p = Proposal::play(T::Bat, "c", T::Bat, "x");
    p.claim = Some("DRAGON".into());
    assert_eq!(
        opening(&p).unwrap_err(),
        RuleViolation::UnknownCardType("DRAGON".into())
    );
}

#[test]
fn opening_requires_every_field() {
    for field in ["card", "target", "claim", "reason"] {
        let mut p = Proposal::play(T::Bat, "c", T::Bat, "x");
        match field {
            "card" => p.card = None,
            "target" => p.target = None,
            "claim" => p.claim = None,
            _ => p.reason = None,
        }
        assert_eq!(opening(&p).unwrap_err(), RuleViolation::MissingField(field));
    }
}

#[test]
fn opening_accepts_missing_action_but_not_a_wrong_one() {
    let mut p = Proposal::play(T::Fly, "c", T::Fly, "honest");
    p.action = None;
    assert!(opening(&p).is_ok());

    p.action = Some("GUESS".into());
    assert!(matches!(
        opening(&p).unwrap_err(),
        RuleViolation::UnexpectedAction { .. }
    ));
}

#[test]
fn forced_guess_rejects_everything_but_a_guess() {
    let targets: &[PlayerId] = &[];
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &Proposal::guess(false, "liar")),
        Ok(Action::Guess { truthful: false })
    );
    assert!(with_targets(Phase::ForcedGuess, targets, &Proposal::look("peek")).is_err());
    assert!(with_targets(Phase::ForcedGuess, targets, &Proposal::pass("c", T::Rat, "x")).is_err());

    let mut no_guess = Proposal::guess(true, "x");
    no_guess.guess = None;
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &no_guess).unwrap_err(),
        RuleViolation::MissingField("guess")
    );
}

#[test]
fn guesses_are_normalized_from_text() {
    let targets: &[PlayerId] = &[];
    let mut p = Proposal::guess(true, "x");
    p.guess = Some(GuessValue::Text("False".into()));
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Ok(Action::Guess { truthful: false })
    );
    p.guess = Some(GuessValue::Text("TRUE".into()));
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Ok(Action::Guess { truthful: true })
    );
    p.guess = Some(GuessValue::Text("NONE".into()));
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Err(RuleViolation::InvalidGuess("NONE".into()))
    );
}

#[test]
fn must_pass_only_allows_pass() {
    let targets = [PlayerId(2)];
    assert_eq!(
        with_targets(Phase::MustPass, &targets, &Proposal::pass("c", T::Rat, "x")),
        Ok(Action::Pass {
            target: PlayerId(2),
            claim: T::Rat
        })
    );
    assert!(with_targets(Phase::MustPass, &targets, &Proposal::guess(true, "x")).is_err());
    assert!(with_targets(Phase::MustPass, &targets, &Proposal::look("x")).is_err());
    // passing back to a seat that already saw the card is illegal
    assert_eq!(
        with_targets(Phase::MustPass, &targets, &Proposal::pass("a", T::Rat, "x")),
        Err(RuleViolation::IllegalTarget("a".into()))
    );
}

#[test]
fn free_choice_needs_look_or_guess() {
    let targets = [PlayerId(2)];
    assert_eq!(
        with_targets(Phase::FreeChoice, &targets, &Proposal::look("curious")),
        Ok(Action::Look)
    );
    assert_eq!(
        with_targets(Phase::FreeChoice, &targets, &Proposal::guess(true, "trusting")),
        Ok(Action::Guess { truthful: true })
    );

    let mut lower = Proposal::look("x");
    lower.action = Some("look".into());
    assert_eq!(with_targets(Phase::FreeChoice, &targets, &lower), Ok(Action::Look));

    let pass = Proposal::pass("c", T::Rat, "x");
    assert!(matches!(
        with_targets(Phase::FreeChoice, &targets, &pass),
        Err(RuleViolation::UnexpectedAction { .. })
    ));
    assert_eq!(
        with_targets(Phase::FreeChoice, &targets, &Proposal::default()),
        Err(RuleViolation::MissingField("action"))
    );
}

#[test]
fn proposals_deserialize_from_loose_json() {
    let p: Proposal =
        serde_json::from_str(r#"{"guess": true, "reason": "gut feeling", "extra": 1}"#).unwrap();
    assert_eq!(p.guess, Some(GuessValue::Bool(true)));
    let p: Proposal = serde_json::from_str(r#"{"guess": "FALSE"}"#).unwrap();
    assert_eq!(p.guess, Some(GuessValue::Text("FALSE".into())));
    assert_eq!(p.reason, None);
}

#[test]
fn numeric_guesses_deserialize_and_normalize() {
    let targets: &[PlayerId] = &[];
    let p: Proposal = serde_json::from_str(r#"{"guess": 1, "reason": "x"}"#).unwrap();
    assert_eq!(p.guess, Some(GuessValue::Number(1)));
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Ok(Action::Guess { truthful: true })
    );
    let p: Proposal = serde_json::from_str(r#"{"guess": 0, "reason": "x"}"#).unwrap();
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Ok(Action::Guess { truthful: false })
    );
    let p: Proposal = serde_json::from_str(r#"{"guess": 2, "reason": "x"}"#).unwrap();
    assert_eq!(
        with_targets(Phase::ForcedGuess, targets, &p),
        Err(RuleViolation::InvalidGuess("2".into()))
    );
}

#[test]
fn violation_text_is_diagnostic() {
    assert_eq!(
        RuleViolation::MissingField("claim").to_string(),
        "Missing key 'claim' in response."
    );
    assert_eq!(
        RuleViolation::IllegalTarget("zed".into()).to_string(),
        "Player zed is not a valid target."
    );
}
