// Allocation checks (requires the memory_tracking feature)
//
// Kept to a single test so no other test thread allocates between the
// counter snapshots.

#![cfg(feature = "memory_tracking")]

use csvlex::memory::{allocated, allocation_count, peak, reset_peak};
use csvlex::{parse_with, Dialect, Tokenizer};

#[test]
fn tokenizer_is_allocation_free_and_builder_allocates_per_field() {
    let mut input = String::new();
    for i in 0..500 {
        input.push_str(&format!("{},\"q\"\"{}\",plain {}\r\n", i, i, i));
    }
    let dialect = Dialect::default();

    // Tokenizing only borrows from the input
    let before = allocation_count();
    let mut tokens = 0usize;
    let mut tokenizer = Tokenizer::new(&input, dialect);
    loop {
        let token = tokenizer.next_token();
        tokens += 1;
        if token.is_terminal() {
            break;
        }
    }
    assert_eq!(allocation_count(), before, "tokenizer allocated");
    assert!(tokens > 3000);

    // Building the table allocates, and the table owns all of it
    let (baseline, _) = reset_peak();
    let table = parse_with(&input, &dialect).unwrap();
    assert_eq!(table.len(), 501);
    assert!(allocated() > baseline);
    // The peak since the reset covers at least everything the table holds
    assert!(peak() >= allocated());
    assert!(peak() > baseline);
    drop(table);
    assert!(allocated() <= baseline + 1024);
}
