//! End-to-end tests for equation enumeration.
//!
//! Tests cover the rendered output, the counts for small bounds, and the symmetry guarantees.

use std::collections::HashSet;

use magma_eqs::config::{Alphabet, Config, ConfigError};
use magma_eqs::enumerate::EquationEnumerator;
use magma_eqs::equation::Equation;
use magma_eqs::expr::is_canonical_from;
use magma_eqs::symmetry::{equivalent, orbit};
use num_bigint::BigUint;

fn render(max_ops: usize) -> Vec<String> {
    let config = Config::with_default_alphabet(max_ops).unwrap();
    let enumerator = EquationEnumerator::new(&config);
    enumerator.equations().map(|eq| config.display(&eq).to_string()).collect()
}

// ─── Output ────────────────────────────────────────────────────────────────────

#[test]
fn bound_one_listing() {
    assert_eq!(
        render(1),
        vec![
            "x = x",
            "x = y",
            "x = x ◦︎ x",
            "x = x ◦︎ y",
            "x = y ◦︎ x",
            "x = y ◦︎ y",
            "x = y ◦︎ z",
        ]
    );
}

#[test]
fn bound_two_tail() {
    let lines = render(2);
    assert_eq!(lines.len(), 46);
    assert_eq!(
        lines[41..],
        [
            "x ◦︎ y = x ◦︎ z",
            "x ◦︎ y = y ◦︎ x",
            "x ◦︎ y = y ◦︎ z",
            "x ◦︎ y = z ◦︎ y",
            "x ◦︎ y = z ◦︎ w",
        ]
    );
    assert!(!lines.contains(&"y ◦︎ x = x ◦︎ y".to_string()));
    assert!(!lines.contains(&"x ◦︎ x = x ◦︎ x".to_string()));
}

#[test]
fn custom_glyph_and_names() {
    let config = Config::new(1, Alphabet::from_chars("abc").unwrap()).unwrap().with_glyph("*").unwrap();
    let enumerator = EquationEnumerator::new(&config);
    let last = enumerator.equations().last().unwrap();
    assert_eq!(config.display(&last).to_string(), "a = b * c");
}

// ─── Counts ────────────────────────────────────────────────────────────────────

#[test]
fn known_counts() {
    let expected = [2, 7, 46, 410, 4694];
    for (max_ops, &count) in expected.iter().enumerate() {
        assert_eq!(EquationEnumerator::with_bound(max_ops).count(), count, "max_ops = {}", max_ops);
    }
}

#[test]
fn monotonic_growth() {
    let counts: Vec<_> = (0..=3).map(|m| EquationEnumerator::with_bound(m).count()).collect();
    for w in counts.windows(2) {
        assert!(w[0] <= w[1], "{:?}", counts);
    }
}

#[test]
fn every_candidate_is_accounted_for() {
    let enumerator = EquationEnumerator::with_bound(3);
    let mut equations = enumerator.equations();
    equations.by_ref().for_each(drop);
    let stats = equations.stats();
    assert_eq!(BigUint::from(stats.candidates), enumerator.search_space());
    assert_eq!(stats.candidates, stats.accepted + stats.duplicates + stats.trivial);
}

// ─── Symmetry ──────────────────────────────────────────────────────────────────

#[test]
fn representatives_are_canonical() {
    for eq in EquationEnumerator::with_bound(3).equations() {
        let mut leaves = eq.lhs.leaves();
        leaves.extend(eq.rhs.leaves());
        assert!(is_canonical_from(&leaves, 0), "{}", eq);
    }
}

#[test]
fn orbits_are_disjoint() {
    let all: Vec<Equation> = EquationEnumerator::with_bound(3).equations().collect();
    let mut covered: HashSet<Equation> = HashSet::new();
    for eq in &all {
        let images: HashSet<Equation> = orbit(&eq.lhs, &eq.rhs, eq.num_vars()).collect();
        assert!(images.is_disjoint(&covered), "{}", eq);
        covered.extend(images);
    }
}

#[test]
fn orbit_members_map_back() {
    for eq in EquationEnumerator::with_bound(2).equations() {
        for image in orbit(&eq.lhs, &eq.rhs, eq.num_vars()) {
            assert!(equivalent(&image, &eq), "{} vs {}", image, eq);
        }
    }
}

#[test]
fn trivial_identity_policy() {
    for max_ops in 0..=3 {
        let all: Vec<Equation> = EquationEnumerator::with_bound(max_ops).equations().collect();
        let reflexive: Vec<_> = all.iter().filter(|eq| eq.lhs == eq.rhs).collect();
        assert_eq!(reflexive.len(), 1);
        assert!(reflexive[0].lhs.is_var());
    }
}

#[test]
fn every_class_is_represented() {
    // Every canonical candidate is equivalent to some emitted equation, or is a tautology.
    let enumerator = EquationEnumerator::with_bound(2);
    let all: Vec<Equation> = enumerator.equations().collect();
    for (eq, _) in enumerator.candidates() {
        if eq.is_trivial() {
            continue;
        }
        assert!(all.iter().any(|rep| equivalent(rep, &eq)), "{}", eq);
    }
}

// ─── Configuration ─────────────────────────────────────────────────────────────

#[test]
fn configuration_errors() {
    assert!(matches!(Config::bound_from_signed(-2), Err(ConfigError::NegativeBound(-2))));
    assert!(matches!(
        Config::new(4, Alphabet::from_chars("xyzwu").unwrap()),
        Err(ConfigError::AlphabetTooSmall { required: 6, available: 5, .. })
    ));
    assert!(Config::new(4, Alphabet::default()).is_ok());
}
