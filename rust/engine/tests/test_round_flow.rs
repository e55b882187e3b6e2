mod common;

use roach_engine::agent::{AgentError, Proposal};
use roach_engine::cards::CardType as T;
use roach_engine::engine::{Engine, Step};
use roach_engine::player::PlayerId;
use roach_engine::rules::{ActionKind, Phase};
use roach_engine::round::Resolution;

use common::fixed_table;

const A: PlayerId = PlayerId(0);
const B: PlayerId = PlayerId(1);
const C: PlayerId = PlayerId(2);

fn engine() -> Engine {
    Engine::from_table(fixed_table(), A, 1).unwrap()
}

fn round_over(step: Step) -> roach_engine::round::RoundOutcome {
    match step {
        Step::RoundOver(outcome) => outcome,
        other => panic!("expected round over, got {:?}", other),
    }
}

#[test]
fn play_look_pass_guess_scenario() {
    let mut e = engine();
    assert_eq!(e.phase().unwrap(), Phase::Opening);

    e.submit(Ok(Proposal::play(T::Cockroach, "b", T::Bat, "bluff")))
        .unwrap();
    assert_eq!(e.table().hand(A).unwrap().count(T::Cockroach), 7);
    assert_eq!(e.current_seat().unwrap(), B);
    assert_eq!(e.phase().unwrap(), Phase::FreeChoice);
    assert_eq!(e.round().targets(), &[C]);

    e.submit(Ok(Proposal::look("suspicious"))).unwrap();
    assert_eq!(e.current_seat().unwrap(), B);
    assert_eq!(e.phase().unwrap(), Phase::MustPass);
    assert_eq!(e.view().unwrap().looked_card, Some(T::Cockroach));

    e.submit(Ok(Proposal::pass("c", T::Frog, "my turn to lie")))
        .unwrap();
    assert_eq!(e.current_seat().unwrap(), C);
    assert_eq!(e.phase().unwrap(), Phase::ForcedGuess);
    assert!(e.view().unwrap().targets.is_empty());

    // FROG was claimed for a COCKROACH: "false" is the correct call
    let outcome = round_over(e.submit(Ok(Proposal::guess(false, "liar"))).unwrap());
    assert_eq!(outcome.loser, B);
    assert_eq!(outcome.card, T::Cockroach);
    assert_eq!(outcome.resolution, Resolution::ClaimantCaught);
    assert_eq!(e.table().revealed(B).unwrap().count(T::Cockroach), 1);

    let kinds: Vec<ActionKind> = outcome.moves.iter().map(|m| m.action).collect();
    assert_eq!(
        kinds,
        vec![
            ActionKind::Play,
            ActionKind::Look,
            ActionKind::Pass,
            ActionKind::Guess
        ]
    );
    let guess = outcome.moves.last().unwrap();
    assert_eq!(guess.target, Some(B));
    assert_eq!(guess.claim, Some(T::Frog));
    assert_eq!(guess.guess_correct(), Some(true));

    // loser starts the next round
    assert_eq!(e.current_seat().unwrap(), B);
    assert_eq!(e.phase().unwrap(), Phase::Opening);
    assert_eq!(e.table().total_cards(), 64);
}

#[test]
fn guess_truth_table() {
    // (claim, guess, expected loser)
    let cases = [
        (T::Bat, true, A),     // truth, believed
        (T::Bat, false, B),    // truth, called a lie
        (T::Spider, false, A), // lie, called a lie
        (T::Spider, true, B),  // lie, believed
    ];
    for (claim, guess, loser) in cases {
        let mut e = engine();
        e.submit(Ok(Proposal::play(T::Bat, "b", claim, "x"))).unwrap();
        let outcome = round_over(e.submit(Ok(Proposal::guess(guess, "y"))).unwrap());
        assert_eq!(outcome.loser, loser, "claim {} guess {}", claim, guess);
        let expected = if loser == A {
            Resolution::ClaimantCaught
        } else {
            Resolution::GuesserWrong
        };
        assert_eq!(outcome.resolution, expected);
        assert_eq!(e.table().revealed(loser).unwrap().count(T::Bat), 1);
    }
}

#[test]
fn look_forces_pass_and_wrong_action_forfeits() {
    let mut e = engine();
    e.submit(Ok(Proposal::play(T::Fly, "c", T::Fly, "honest")))
        .unwrap();
    e.submit(Ok(Proposal::look("checking"))).unwrap();
    assert_eq!(e.phase().unwrap(), Phase::MustPass);

    let outcome = round_over(e.submit(Ok(Proposal::guess(true, "changed my mind"))).unwrap());
    assert_eq!(outcome.loser, C);
    assert_eq!(outcome.resolution, Resolution::Forfeit);
    assert_eq!(outcome.card, T::Fly);
    assert_eq!(e.table().revealed(C).unwrap().count(T::Fly), 1);
    let forfeit = outcome.moves.last().unwrap();
    assert_eq!(forfeit.action, ActionKind::Forfeit);
    assert!(forfeit.reason.contains("not allowed"));
}

#[test]
fn pass_cannot_go_back_to_a_seat_that_saw_the_card() {
    let mut e = engine();
    e.submit(Ok(Proposal::play(T::Bat, "c", T::Bat, "x"))).unwrap();
    e.submit(Ok(Proposal::look("x"))).unwrap();
    let outcome = round_over(
        e.submit(Ok(Proposal::pass("a", T::Rat, "back to you")))
            .unwrap(),
    );
    assert_eq!(outcome.resolution, Resolution::Forfeit);
    assert_eq!(outcome.loser, C);
}

#[test]
fn forfeit_on_opening_backfills_from_hand() {
    let mut e = engine();
    let outcome = round_over(
        e.submit(Ok(Proposal::play(T::Spider, "b", T::Spider, "not mine")))
            .unwrap(),
    );
    assert_eq!(outcome.loser, A);
    assert_eq!(outcome.resolution, Resolution::Forfeit);
    // the card came out of a's own hand: BAT, COCKROACH or FLY
    assert!(matches!(outcome.card, T::Bat | T::Cockroach | T::Fly));
    assert_eq!(e.table().hand(A).unwrap().total(), 21);
    assert_eq!(e.table().revealed(A).unwrap().total(), 1);
    assert_eq!(e.table().total_cards(), 64);
    assert_eq!(outcome.moves.len(), 1);
    assert_eq!(outcome.moves[0].card, Some(outcome.card));
}

#[test]
fn agent_failure_forfeits_with_the_card_in_flight() {
    let mut e = engine();
    e.submit(Ok(Proposal::play(T::Cockroach, "b", T::Cockroach, "x")))
        .unwrap();
    let outcome = round_over(
        e.submit(Err(AgentError::Unparseable("garbage".into())))
            .unwrap(),
    );
    assert_eq!(outcome.loser, B);
    assert_eq!(outcome.card, T::Cockroach);
    assert!(outcome.moves[1].reason.contains("garbage"));
    assert_eq!(e.table().hand(B).unwrap().total(), 21);
}

#[test]
fn view_hides_other_hands_and_lists_claims() {
    let mut e = engine();
    e.submit(Ok(Proposal::play(T::Bat, "b", T::Rat, "x"))).unwrap();
    let view = e.view().unwrap();
    assert_eq!(view.name, "b");
    assert_eq!(view.hand, *e.table().hand(B).unwrap());
    assert_eq!(view.revealed.len(), 3);
    assert_eq!(view.claims.len(), 1);
    assert_eq!(view.claims[0].from, "a");
    assert_eq!(view.claims[0].to, "b");
    assert_eq!(view.claims[0].claim, T::Rat);
    assert_eq!(view.looked_card, None);
    assert_eq!(view.targets, vec!["c".to_string()]);
}

#[test]
fn two_seat_game_goes_straight_to_forced_guess() {
    use roach_engine::deck::{deal_equally, full_deck};
    use roach_engine::table::Table;

    let names = common::names(&["x", "y"]);
    let table = Table::from_deal(&names, deal_equally(&full_deck(), 2)).unwrap();
    let mut e = Engine::from_table(table, PlayerId(0), 3).unwrap();
    e.submit(Ok(Proposal::play(T::Bat, "y", T::Bat, "x"))).unwrap();
    assert_eq!(e.phase().unwrap(), Phase::ForcedGuess);
}
