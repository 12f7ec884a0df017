//! Random operation sequences checked against a `Vec` reference model.

use linked_seq::{ConcurrentList, DoublyLinkedList, IndexError, Sequence, SinglyLinkedList};

use proptest::collection::vec;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(Vec<u8>),
    Prepend(Vec<u8>),
    Get(usize),
    Set(usize, u8),
    Insert(usize, Vec<u8>),
    RemoveFirst,
    RemoveLast,
    Remove(usize),
    Clear,
    Reverse,
}

fn op() -> impl Strategy<Value = Op> {
    // indices slightly past the usual length so rejections get exercised
    let index = 0..24usize;
    let values = || vec(any::<u8>(), 0..4);
    prop_oneof![
        3 => values().prop_map(Op::Add),
        2 => values().prop_map(Op::Prepend),
        2 => index.clone().prop_map(Op::Get),
        2 => (index.clone(), any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        3 => (index.clone(), values()).prop_map(|(i, vs)| Op::Insert(i, vs)),
        1 => Just(Op::RemoveFirst),
        1 => Just(Op::RemoveLast),
        2 => index.prop_map(Op::Remove),
        1 => Just(Op::Clear),
        1 => Just(Op::Reverse),
    ]
}

/// The expected behaviour, spelled out on a `Vec`.
#[derive(Default)]
struct Model(Vec<u8>);

impl Model {
    fn insert(&mut self, index: usize, values: &[u8]) -> Result<(), IndexError> {
        let len = self.0.len();
        if index >= len {
            if index == 0 {
                self.0.extend_from_slice(values);
                return Ok(());
            }
            return Err(IndexError { index, len });
        }
        let at = if index == 0 {
            0
        } else if index == len - 1 {
            len
        } else {
            index
        };
        self.0.splice(at..at, values.iter().copied());
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Option<u8> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }
}

fn check<L: Sequence<u8> + Default>(ops: &[Op]) -> Result<(), TestCaseError> {
    let mut list = L::default();
    let mut model = Model::default();

    for op in ops {
        match op {
            Op::Add(vs) => {
                list.add(vs.iter().copied());
                model.0.extend_from_slice(vs);
            }
            Op::Prepend(vs) => {
                list.prepend(vs.iter().copied());
                model.0.splice(0..0, vs.iter().copied());
            }
            Op::Get(i) => {
                prop_assert_eq!(list.get(*i), model.0.get(*i));
            }
            Op::Set(i, v) => {
                let len = model.0.len();
                let want = match model.0.get_mut(*i) {
                    Some(slot) => {
                        *slot = *v;
                        Ok(())
                    }
                    None => Err(IndexError { index: *i, len }),
                };
                prop_assert_eq!(list.set(*i, *v), want);
            }
            Op::Insert(i, vs) => {
                let want = model.insert(*i, vs);
                prop_assert_eq!(list.insert(*i, vs.iter().copied()), want);
            }
            Op::RemoveFirst => {
                let want = model.remove(0);
                prop_assert_eq!(list.remove_first(), want);
            }
            Op::RemoveLast => {
                let want = model.0.pop();
                prop_assert_eq!(list.remove_last(), want);
            }
            Op::Remove(i) => {
                let want = model.remove(*i);
                prop_assert_eq!(list.remove(*i), want);
            }
            Op::Clear => {
                list.clear();
                model.0.clear();
            }
            Op::Reverse => {
                list.reverse();
                model.0.reverse();
            }
        }

        prop_assert_eq!(list.len(), model.0.len());
        prop_assert_eq!(list.is_empty(), model.0.is_empty());
        prop_assert_eq!(list.get_first(), model.0.first());
        prop_assert_eq!(list.get_last(), model.0.last());
        prop_assert_eq!(list.to_vec(), model.0.clone());
    }
    Ok(())
}

proptest! {
    #[test]
    fn singly_matches_model(ops in vec(op(), 0..64)) {
        check::<SinglyLinkedList<u8>>(&ops)?;
    }

    #[test]
    fn doubly_matches_model(ops in vec(op(), 0..64)) {
        check::<DoublyLinkedList<u8>>(&ops)?;
    }

    #[test]
    fn engines_agree(values in vec(any::<u8>(), 0..32), index in 0..32usize) {
        let mut singly: SinglyLinkedList<u8> = values.iter().copied().collect();
        let mut doubly: DoublyLinkedList<u8> = values.iter().copied().collect();

        prop_assert_eq!(singly.remove(index), doubly.remove(index));
        singly.reverse();
        doubly.reverse();
        prop_assert_eq!(singly.to_vec(), doubly.to_vec());
    }

    #[test]
    fn adapter_matches_engine(values in vec(any::<u8>(), 0..32), index in 0..32usize) {
        let mut engine: DoublyLinkedList<u8> = values.iter().copied().collect();
        let shared = ConcurrentList::from_list(engine.clone());

        prop_assert_eq!(shared.get(index), engine.get(index).copied());
        prop_assert_eq!(shared.insert(index, [7, 7]), engine.insert(index, [7, 7]));
        prop_assert_eq!(shared.remove(index), engine.remove(index));
        prop_assert_eq!(shared.to_vec(), engine.to_vec());
        prop_assert_eq!(shared.into_inner(), engine);
    }
}
