use crate::{TrimError, trim_strings, visitor::NodeKind};
use proptest::prelude::*;
use std::{cell::RefCell, rc::Rc};
use trimmer_derive::Trim;

#[derive(Clone, Debug, Trim)]
struct Leaf {
    text: String,
    #[trim(skip)]
    raw: String,
    bytes: Vec<u8>,
}

#[derive(Clone, Debug, Trim)]
struct Branch {
    label: Option<Box<String>>,
    leaf: Leaf,
    boxed: Option<Box<Leaf>>,
    shared: Rc<RefCell<String>>,
}

fn arb_text() -> impl Strategy<Value = String> {
    let ws = prop_oneof![
        Just(' '),
        Just('\t'),
        Just('\n'),
        Just('\r'),
        Just('\u{a0}'),
        Just('\u{2003}'),
        Just('\u{3000}'),
    ];
    let body = prop_oneof![any::<char>(), ws.clone()];

    (
        prop::collection::vec(ws.clone(), 0..4),
        prop::collection::vec(body, 0..12),
        prop::collection::vec(ws, 0..4),
    )
        .prop_map(|(lead, body, trail)| lead.into_iter().chain(body).chain(trail).collect::<String>())
}

fn arb_leaf() -> impl Strategy<Value = Leaf> {
    (arb_text(), arb_text(), arb_text()).prop_map(|(text, raw, bytes)| Leaf {
        text,
        raw,
        bytes: bytes.into_bytes(),
    })
}

fn arb_branch() -> impl Strategy<Value = Branch> {
    (
        prop::option::of(arb_text()),
        arb_leaf(),
        prop::option::of(arb_leaf()),
        arb_text(),
    )
        .prop_map(|(label, leaf, boxed, shared)| Branch {
            label: label.map(Box::new),
            leaf,
            boxed: boxed.map(Box::new),
            shared: Rc::new(RefCell::new(shared)),
        })
}

fn deep_copy(branch: &Branch) -> Branch {
    Branch {
        shared: Rc::new(RefCell::new(branch.shared.borrow().clone())),
        ..branch.clone()
    }
}

fn assert_leaf(before: &Leaf, after: &Leaf) -> Result<(), TestCaseError> {
    prop_assert_eq!(after.text.as_str(), before.text.trim());
    prop_assert_eq!(&after.raw, &before.raw);
    prop_assert_eq!(&after.bytes, &before.bytes);

    Ok(())
}

proptest! {
    #[test]
    fn trims_every_reachable_text(branch in arb_branch()) {
        let before = deep_copy(&branch);
        let mut after = branch;

        trim_strings(&mut after).unwrap();

        prop_assert_eq!(
            after.label.as_deref().map(String::as_str),
            before.label.as_deref().map(|s| s.trim())
        );
        let shared_after = after.shared.borrow();
        let shared_before = before.shared.borrow();
        prop_assert_eq!(shared_after.as_str(), shared_before.trim());
        assert_leaf(&before.leaf, &after.leaf)?;

        match (&before.boxed, &after.boxed) {
            (Some(b), Some(a)) => assert_leaf(b, a)?,
            (None, None) => {}
            _ => prop_assert!(false, "absent reference changed presence"),
        }
    }

    #[test]
    fn trimming_twice_matches_trimming_once(branch in arb_branch()) {
        let mut once = deep_copy(&branch);
        let mut twice = branch;

        trim_strings(&mut once).unwrap();
        trim_strings(&mut twice).unwrap();
        trim_strings(&mut twice).unwrap();

        prop_assert_eq!(&once.leaf.text, &twice.leaf.text);
        prop_assert_eq!(&once.label, &twice.label);
        let shared_once = once.shared.borrow();
        let shared_twice = twice.shared.borrow();
        prop_assert_eq!(&*shared_once, &*shared_twice);
    }

    #[test]
    fn non_record_roots_are_rejected_untouched(words in prop::collection::vec(arb_text(), 0..5)) {
        let mut target = words.clone();

        prop_assert_eq!(
            trim_strings(&mut target),
            Err(TrimError::InvalidType { found: NodeKind::Other })
        );
        prop_assert_eq!(target, words);
    }
}
