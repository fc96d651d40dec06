#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lifostack::{EmptyStackError, Stack};

#[derive(Arbitrary, Debug)]
enum Action {
    Push(String),
    Pop,
    Length,
    IsEmpty,
    Empty,
    Drain(u8),
}

use self::Action::*;

fuzz_target!(|actions: Vec<Action>| {
    let mut stack = Stack::new();
    let mut model = Vec::new();
    for action in actions {
        match action {
            Push(data) => {
                stack.push(data.clone());
                model.push(data);
            }
            Pop => {
                assert_eq!(model.pop().ok_or(EmptyStackError), stack.pop());
            }
            Length => {
                assert_eq!(model.len(), stack.length());
            }
            IsEmpty => {
                assert_eq!(model.is_empty(), stack.is_empty());
            }
            Empty => {
                stack.empty();
                model.clear();
            }
            Drain(count) => {
                for item in stack.drain().take(count as usize) {
                    assert_eq!(model.pop(), Some(item));
                }
            }
        }
        assert_eq!(model.len(), stack.len());
        assert_eq!(model.last(), stack.peek());
    }
});
