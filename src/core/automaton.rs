//! Automaton definitions and validated construction.
//!
//! An [`Automaton`] is the immutable half of the engine: the state set,
//! alphabet, transition table, and initial/accepting sets, validated once
//! at construction and never mutated afterward. All simulation state
//! lives in caller-owned [`Cursor`]s, so one automaton may back any
//! number of independent runs.

use super::cursor::Cursor;
use super::error::{DefinitionError, UnknownSymbolError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Bound set for state identifiers.
///
/// A state identifier is an opaque, totally-ordered, hashable value:
/// plain integers, strings like `"q0"`, or any caller-defined type
/// satisfying the bounds. The trait is blanket-implemented, so there is
/// nothing to implement by hand - all parsing of user-entered text into
/// identifiers stays with the caller.
pub trait StateId:
    Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> StateId for T where
    T: Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Bound set for alphabet symbols.
///
/// Same shape as [`StateId`]: opaque, ordered, hashable. `char` and
/// `String` both qualify, as do caller-defined symbol enums.
pub trait Symbol:
    Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

impl<T> Symbol for T where
    T: Clone + Eq + Ord + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
}

/// Nested transition table: source state, then symbol, then the set of
/// destination states. Absent entries mean the empty destination set.
pub type TransitionTable<Q, A> = BTreeMap<Q, BTreeMap<A, BTreeSet<Q>>>;

/// A nondeterministic finite automaton without epsilon-moves.
///
/// Immutable once constructed: [`Automaton::new`] validates every
/// invariant and a value that exists is guaranteed well-formed. The
/// automaton itself holds no simulation state - it is safe to share
/// read-only across any number of concurrently running cursors.
///
/// # Example
///
/// ```rust
/// use std::collections::{BTreeMap, BTreeSet};
/// use nfasim::core::Automaton;
///
/// let automaton = Automaton::new(
///     BTreeSet::from([0, 1, 2]),
///     BTreeSet::from(['a', 'b']),
///     BTreeMap::from([
///         (0, BTreeMap::from([('a', BTreeSet::from([0, 1]))])),
///         (1, BTreeMap::from([('b', BTreeSet::from([2]))])),
///     ]),
///     BTreeSet::from([0]),
///     BTreeSet::from([2]),
/// )?;
///
/// assert!(automaton.run("ab".chars())?);
/// assert!(!automaton.run("ba".chars())?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct Automaton<Q: StateId, A: Symbol> {
    states: BTreeSet<Q>,
    alphabet: BTreeSet<A>,
    transitions: TransitionTable<Q, A>,
    initial: BTreeSet<Q>,
    accepting: BTreeSet<Q>,
}

impl<Q: StateId, A: Symbol> Automaton<Q, A> {
    /// Construct an automaton, validating every definition invariant.
    ///
    /// Fails with the first violation found: empty states, alphabet, or
    /// initial set; an initial or accepting state outside the state set;
    /// or a transition whose source, symbol, or target is unknown.
    /// Construction is otherwise side-effect-free.
    pub fn new(
        states: BTreeSet<Q>,
        alphabet: BTreeSet<A>,
        transitions: TransitionTable<Q, A>,
        initial: BTreeSet<Q>,
        accepting: BTreeSet<Q>,
    ) -> Result<Self, DefinitionError> {
        if states.is_empty() {
            return Err(DefinitionError::EmptyStates);
        }
        if alphabet.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }
        if initial.is_empty() {
            return Err(DefinitionError::EmptyInitial);
        }

        for state in &initial {
            if !states.contains(state) {
                return Err(DefinitionError::UnknownInitialState {
                    state: format!("{state:?}"),
                });
            }
        }

        for state in &accepting {
            if !states.contains(state) {
                return Err(DefinitionError::UnknownAcceptingState {
                    state: format!("{state:?}"),
                });
            }
        }

        for (state, by_symbol) in &transitions {
            if !states.contains(state) {
                return Err(DefinitionError::UnknownTransitionState {
                    state: format!("{state:?}"),
                });
            }

            for (symbol, targets) in by_symbol {
                if !alphabet.contains(symbol) {
                    return Err(DefinitionError::UnknownTransitionSymbol {
                        symbol: format!("{symbol:?}"),
                    });
                }

                for target in targets {
                    if !states.contains(target) {
                        return Err(DefinitionError::UnknownTransitionTarget {
                            state: format!("{state:?}"),
                            symbol: format!("{symbol:?}"),
                            target: format!("{target:?}"),
                        });
                    }
                }
            }
        }

        Ok(Self {
            states,
            alphabet,
            transitions,
            initial,
            accepting,
        })
    }

    /// The state set.
    pub fn states(&self) -> &BTreeSet<Q> {
        &self.states
    }

    /// The alphabet.
    pub fn alphabet(&self) -> &BTreeSet<A> {
        &self.alphabet
    }

    /// The full transition table.
    pub fn transitions(&self) -> &TransitionTable<Q, A> {
        &self.transitions
    }

    /// The initial-state set.
    pub fn initial(&self) -> &BTreeSet<Q> {
        &self.initial
    }

    /// The accepting-state set.
    pub fn accepting(&self) -> &BTreeSet<Q> {
        &self.accepting
    }

    /// The destination set for one `(state, symbol)` pair.
    ///
    /// `None` means no entry, which is equivalent to the empty
    /// destination set.
    pub fn targets(&self, state: &Q, symbol: &A) -> Option<&BTreeSet<Q>> {
        self.transitions
            .get(state)
            .and_then(|by_symbol| by_symbol.get(symbol))
    }

    /// Whether a state is in the accepting set.
    pub fn is_accepting_state(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }

    /// Whether a state is in the initial set.
    pub fn is_initial_state(&self, state: &Q) -> bool {
        self.initial.contains(state)
    }

    /// Advance an active set across one symbol, set-wise.
    ///
    /// Returns the union of destination sets over every state in `from`.
    /// This is the pure one-step rule with no cursor and no bookkeeping:
    /// an empty `from` yields an empty result, and a symbol with no
    /// entries yields an empty result as well. Alphabet membership is
    /// not checked here - [`Cursor::step`] layers that check on top.
    pub fn next_states(&self, from: &BTreeSet<Q>, symbol: &A) -> BTreeSet<Q> {
        let mut next = BTreeSet::new();
        for state in from {
            if let Some(targets) = self.targets(state, symbol) {
                next.extend(targets.iter().cloned());
            }
        }
        next
    }

    /// Begin a fresh simulation run.
    ///
    /// The cursor starts with `active` equal to the initial set and a
    /// trace holding the single start entry.
    pub fn cursor(&self) -> Cursor<'_, Q, A> {
        Cursor::new(self)
    }

    /// Run the automaton over a whole input, reporting acceptance.
    ///
    /// Equivalent to a fresh cursor stepped once per symbol in order,
    /// then checked for acceptance. Fails with [`UnknownSymbolError`] on
    /// the first symbol outside the alphabet; the run aborts and no
    /// partial acceptance is reported.
    pub fn run<I>(&self, input: I) -> Result<bool, UnknownSymbolError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut cursor = self.cursor();
        for symbol in input {
            cursor.step(symbol)?;
        }
        Ok(cursor.is_accepted())
    }

    /// Whether the transition table is deterministic.
    ///
    /// True iff there is exactly one initial state and no `(state,
    /// symbol)` pair leads to more than one destination. Partial tables
    /// count as deterministic; this is an inspection only, no conversion
    /// is performed.
    pub fn is_deterministic(&self) -> bool {
        self.initial.len() == 1
            && self
                .transitions
                .values()
                .all(|by_symbol| by_symbol.values().all(|targets| targets.len() <= 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Automaton<u32, char> {
        Automaton::new(
            BTreeSet::from([0, 1, 2]),
            BTreeSet::from(['a', 'b']),
            BTreeMap::from([
                (0, BTreeMap::from([('a', BTreeSet::from([0, 1]))])),
                (1, BTreeMap::from([('b', BTreeSet::from([2]))])),
            ]),
            BTreeSet::from([0]),
            BTreeSet::from([2]),
        )
        .unwrap()
    }

    #[test]
    fn construction_accepts_valid_definition() {
        let automaton = sample();

        assert_eq!(automaton.states().len(), 3);
        assert_eq!(automaton.alphabet().len(), 2);
        assert_eq!(automaton.initial(), &BTreeSet::from([0]));
        assert_eq!(automaton.accepting(), &BTreeSet::from([2]));
    }

    #[test]
    fn empty_states_rejected() {
        let result = Automaton::<u32, char>::new(
            BTreeSet::new(),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::new(),
            BTreeSet::new(),
        );

        assert!(matches!(result, Err(DefinitionError::EmptyStates)));
    }

    #[test]
    fn empty_alphabet_rejected() {
        let result = Automaton::<u32, char>::new(
            BTreeSet::from([0]),
            BTreeSet::new(),
            BTreeMap::new(),
            BTreeSet::from([0]),
            BTreeSet::new(),
        );

        assert!(matches!(result, Err(DefinitionError::EmptyAlphabet)));
    }

    #[test]
    fn empty_initial_rejected() {
        let result = Automaton::<u32, char>::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::new(),
            BTreeSet::new(),
        );

        assert!(matches!(result, Err(DefinitionError::EmptyInitial)));
    }

    #[test]
    fn initial_outside_states_rejected() {
        let result = Automaton::<u32, char>::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::from([7]),
            BTreeSet::new(),
        );

        assert!(matches!(
            result,
            Err(DefinitionError::UnknownInitialState { .. })
        ));
    }

    #[test]
    fn accepting_outside_states_rejected() {
        let result = Automaton::<u32, char>::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::from([0]),
            BTreeSet::from([7]),
        );

        assert!(matches!(
            result,
            Err(DefinitionError::UnknownAcceptingState { .. })
        ));
    }

    #[test]
    fn transition_source_outside_states_rejected() {
        let result = Automaton::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::from([(9, BTreeMap::from([('a', BTreeSet::from([0]))]))]),
            BTreeSet::from([0]),
            BTreeSet::new(),
        );

        assert!(matches!(
            result,
            Err(DefinitionError::UnknownTransitionState { .. })
        ));
    }

    #[test]
    fn transition_symbol_outside_alphabet_rejected() {
        let result = Automaton::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::from([(0, BTreeMap::from([('z', BTreeSet::from([0]))]))]),
            BTreeSet::from([0]),
            BTreeSet::new(),
        );

        assert!(matches!(
            result,
            Err(DefinitionError::UnknownTransitionSymbol { .. })
        ));
    }

    #[test]
    fn transition_target_outside_states_rejected() {
        let result = Automaton::new(
            BTreeSet::from([0, 1, 2]),
            BTreeSet::from(['a', 'b']),
            BTreeMap::from([(1, BTreeMap::from([('a', BTreeSet::from([5]))]))]),
            BTreeSet::from([0]),
            BTreeSet::from([2]),
        );

        assert!(matches!(
            result,
            Err(DefinitionError::UnknownTransitionTarget { .. })
        ));
    }

    #[test]
    fn run_accepts_matching_input() {
        assert!(sample().run("ab".chars()).unwrap());
    }

    #[test]
    fn run_rejects_nonmatching_input() {
        assert!(!sample().run("ba".chars()).unwrap());
    }

    #[test]
    fn run_on_empty_input_checks_initial_set() {
        // No symbol consumed, so acceptance is decided by the initial set.
        assert!(!sample().run(std::iter::empty()).unwrap());

        let accepts_empty = Automaton::new(
            BTreeSet::from([0]),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::from([0]),
            BTreeSet::from([0]),
        )
        .unwrap();
        assert!(accepts_empty.run(std::iter::empty()).unwrap());
    }

    #[test]
    fn run_aborts_on_unknown_symbol() {
        let result = sample().run("az".chars());
        assert!(result.is_err());
    }

    #[test]
    fn next_states_unions_destinations() {
        let automaton = sample();

        let next = automaton.next_states(&BTreeSet::from([0]), &'a');
        assert_eq!(next, BTreeSet::from([0, 1]));

        let next = automaton.next_states(&BTreeSet::from([0, 1]), &'b');
        assert_eq!(next, BTreeSet::from([2]));
    }

    #[test]
    fn next_states_empty_for_missing_entry() {
        let automaton = sample();

        assert!(automaton.next_states(&BTreeSet::from([0]), &'b').is_empty());
        assert!(automaton.next_states(&BTreeSet::new(), &'a').is_empty());
    }

    #[test]
    fn targets_absent_entry_is_none() {
        let automaton = sample();

        assert_eq!(automaton.targets(&0, &'a'), Some(&BTreeSet::from([0, 1])));
        assert_eq!(automaton.targets(&2, &'a'), None);
    }

    #[test]
    fn membership_helpers_follow_definition() {
        let automaton = sample();

        assert!(automaton.is_initial_state(&0));
        assert!(!automaton.is_initial_state(&2));
        assert!(automaton.is_accepting_state(&2));
        assert!(!automaton.is_accepting_state(&0));
    }

    #[test]
    fn sample_is_nondeterministic() {
        // 0 --a--> {0, 1} has two destinations.
        assert!(!sample().is_deterministic());
    }

    #[test]
    fn single_destination_table_is_deterministic() {
        let automaton = Automaton::new(
            BTreeSet::from([0, 1]),
            BTreeSet::from(['a']),
            BTreeMap::from([(0, BTreeMap::from([('a', BTreeSet::from([1]))]))]),
            BTreeSet::from([0]),
            BTreeSet::from([1]),
        )
        .unwrap();

        assert!(automaton.is_deterministic());
    }

    #[test]
    fn multiple_initial_states_are_nondeterministic() {
        let automaton = Automaton::new(
            BTreeSet::from([0, 1]),
            BTreeSet::from(['a']),
            BTreeMap::new(),
            BTreeSet::from([0, 1]),
            BTreeSet::new(),
        )
        .unwrap();

        assert!(!automaton.is_deterministic());
    }

    #[test]
    fn automaton_serializes() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("alphabet"));
    }
}
